//! Cue timing for a resolved slide.
//!
//! Each role's subtitle lines play back to back from t = 0; role tracks run
//! side by side, so a slide lasts as long as its longest track.

use serde::Serialize;

use crate::model::ResolvedSlide;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Cue {
    pub index: usize,
    pub text: String,
    pub start_ms: u64,
    pub end_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoleTrack {
    pub role: String,
    pub audio: Option<String>,
    pub cues: Vec<Cue>,
    pub duration_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlideTimeline {
    pub number: u32,
    pub tracks: Vec<RoleTrack>,
    pub duration_ms: u64,
}

impl SlideTimeline {
    pub fn build(slide: &ResolvedSlide) -> Self {
        let tracks: Vec<RoleTrack> = slide
            .subtitles
            .iter()
            .map(|(role, lines)| {
                let mut clock = 0u64;
                let cues = lines
                    .iter()
                    .enumerate()
                    .map(|(index, line)| {
                        let start_ms = clock;
                        clock = clock.saturating_add(line.duration);
                        Cue { index, text: line.text.clone(), start_ms, end_ms: clock }
                    })
                    .collect();
                RoleTrack {
                    role: role.clone(),
                    audio: slide.audio.get(role).cloned(),
                    cues,
                    duration_ms: clock,
                }
            })
            .collect();

        let duration_ms = tracks.iter().map(|t| t.duration_ms).max().unwrap_or(0);
        Self { number: slide.number, tracks, duration_ms }
    }

    pub fn track(&self, role: &str) -> Option<&RoleTrack> {
        self.tracks.iter().find(|t| t.role == role)
    }

    /// The cue of `role` on screen at `at_ms`; end bounds are exclusive.
    pub fn cue_at(&self, role: &str, at_ms: u64) -> Option<&Cue> {
        self.track(role)?
            .cues
            .iter()
            .find(|c| c.start_ms <= at_ms && at_ms < c.end_ms)
    }
}

/// Sum of slide durations when slides play one after another, saturating.
pub fn total_duration_ms(timelines: &[SlideTimeline]) -> u64 {
    timelines.iter().fold(0u64, |acc, t| acc.saturating_add(t.duration_ms))
}
