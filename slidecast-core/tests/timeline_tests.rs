use std::path::Path;

use slidecast_core::timeline::{total_duration_ms, SlideTimeline};
use slidecast_core::validate::{error_count, validate};
use slidecast_core::{AssetManifest, ContentCatalog};

fn builtin_timeline(n: u32) -> SlideTimeline {
    SlideTimeline::build(&ContentCatalog::builtin().resolve(n).unwrap())
}

#[test]
fn cues_start_at_prefix_sums() {
    let tl = builtin_timeline(1);
    let woman = tl.track("woman").unwrap();
    let starts: Vec<u64> = woman.cues.iter().map(|c| c.start_ms).collect();
    assert_eq!(starts, vec![0, 3000, 4000, 6000]);
    assert_eq!(woman.duration_ms, 7500);
    assert_eq!(woman.audio.as_deref(), Some("woman-01.wav"));
}

#[test]
fn slide_lasts_as_long_as_longest_track() {
    assert_eq!(builtin_timeline(1).duration_ms, 12000);
    assert_eq!(builtin_timeline(2).duration_ms, 14000);
    assert_eq!(builtin_timeline(3).duration_ms, 12500);

    let all: Vec<SlideTimeline> = (1..=3).map(builtin_timeline).collect();
    assert_eq!(total_duration_ms(&all), 38500);
}

#[test]
fn cue_lookup_uses_half_open_ranges() {
    let tl = builtin_timeline(1);
    assert_eq!(tl.cue_at("woman", 0).unwrap().index, 0);
    assert_eq!(tl.cue_at("woman", 2999).unwrap().index, 0);
    assert_eq!(tl.cue_at("woman", 3000).unwrap().index, 1);
    assert_eq!(tl.cue_at("woman", 7499).unwrap().index, 3);
    assert!(tl.cue_at("woman", 7500).is_none());
    assert!(tl.cue_at("robot", 0).is_none());
}

#[test]
fn builtin_manifest_lists_every_asset_once() {
    let manifest = AssetManifest::collect(ContentCatalog::builtin()).unwrap();
    let images: Vec<&str> = manifest.images.iter().map(String::as_str).collect();
    assert_eq!(
        images,
        vec![
            "background_01.png",
            "background_02.png",
            "background_03.png",
            "man.gif",
            "man.png",
            "wman.gif",
            "wman.png",
        ]
    );
    assert_eq!(manifest.audios.len(), 6);
    assert!(manifest.audios.contains("woman-03.wav"));
    assert_eq!(manifest.full_path("man.png"), Path::new("data/man.png"));
}

#[test]
fn manifest_reports_missing_files() {
    let dir = tempfile::tempdir().unwrap();
    let data = dir.path().join("data");
    std::fs::create_dir_all(&data).unwrap();
    std::fs::write(data.join("man.png"), b"").unwrap();

    let manifest = AssetManifest::collect(ContentCatalog::builtin()).unwrap();
    let missing = manifest.missing(dir.path());
    assert_eq!(missing.len(), 12);
    assert!(!missing.contains(&data.join("man.png")));
}

#[test]
fn huge_durations_saturate_instead_of_overflowing() {
    let mut src = String::from(
        r#"{"defaultAvatars": {
            "man": {"static": "m.png", "animated": "m.gif"},
            "woman": {"static": "w.png", "animated": "w.gif"}},
        "defaultBackgrounds": ["b.png"], "slides": {"#,
    );
    for n in 1..=3 {
        if n > 1 {
            src.push(',');
        }
        src.push_str(&format!(
            r#""{n}": {{"audio": {{"man": "m.wav", "woman": "w.wav"}},
            "subtitles": {{"man": [{{"text": "a", "duration": 9223372036854775807}}, {{"text": "b", "duration": 9223372036854775807}}],
                          "woman": [{{"text": "c"}}]}}}}"#
        ));
    }
    src.push_str("}}");

    let catalog = ContentCatalog::from_json_str(&src).unwrap();
    assert_eq!(error_count(&validate(&catalog)), 0);

    let timelines: Vec<SlideTimeline> = catalog
        .resolve_all()
        .unwrap()
        .iter()
        .map(SlideTimeline::build)
        .collect();
    assert_eq!(timelines[0].track("man").unwrap().duration_ms, u64::MAX - 1);
    assert_eq!(total_duration_ms(&timelines), u64::MAX);
}
