use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use slidecast_core::ContentCatalog;
use slidecast_core::timeline::SlideTimeline;

fn make_content(slides: usize) -> String {
    let mut buf = String::with_capacity(slides * 240);
    buf.push_str(r#"{"basePath":"data/","defaultAvatars":{"man":{"static":"man.png","animated":"man.gif"},"woman":{"static":"wman.png","animated":"wman.gif"}},"#);
    buf.push_str(r#""defaultBackgrounds":["bg1.png","bg2.png","bg3.png"],"defaultSubtitleDuration":2000,"slides":{"#);
    for i in 1..=slides {
        if i > 1 {
            buf.push(',');
        }
        let avatars = if i % 4 == 0 {
            r#""avatars":{"man":{"static":"alt.png"}},"#
        } else {
            ""
        };
        buf.push_str(&format!(
            r#""{i}":{{{avatars}"audio":{{"man":"m{i}.wav","woman":"w{i}.wav"}},"subtitles":{{"man":[{{"text":"line {i}"}},{{"text":"more","duration":1500}}],"woman":[{{"text":"reply {i}"}}]}}}}"#
        ));
    }
    buf.push_str("}}");
    buf
}

fn bench_resolver(c: &mut Criterion) {
    const SLIDES: usize = 10_000;
    let mut group = c.benchmark_group("resolver");
    group.sample_size(10);

    group.bench_function("parse 10k slides", |b| {
        b.iter_batched(|| make_content(SLIDES),
        |src| ContentCatalog::from_json_str(&src).unwrap(),
        BatchSize::SmallInput);
    });

    let catalog = ContentCatalog::from_json_str(&make_content(SLIDES)).unwrap();
    group.bench_function("resolve + timeline 10k slides", |b| {
        b.iter(|| {
            for slide in catalog.resolve_all().unwrap() {
                std::hint::black_box(SlideTimeline::build(&slide));
            }
        });
    });
    group.finish();
}

criterion_group!(benches, bench_resolver);
criterion_main!(benches);
