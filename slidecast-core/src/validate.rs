//! Load-time checks for content the decoder accepts but a player cannot use.

use std::fmt;

use crate::catalog::ContentCatalog;
use crate::model::{Role, Slide};
use crate::resolver;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    pub severity: Severity,
    /// `None` for problems in the default table.
    pub slide: Option<u32>,
    pub message: String,
}

impl Issue {
    fn error(slide: Option<u32>, message: impl Into<String>) -> Self {
        Self { severity: Severity::Error, slide, message: message.into() }
    }

    fn warning(slide: Option<u32>, message: impl Into<String>) -> Self {
        Self { severity: Severity::Warning, slide, message: message.into() }
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let level = match self.severity {
            Severity::Warning => "warning",
            Severity::Error => "error",
        };
        match self.slide {
            Some(n) => write!(f, "{}: slide {}: {}", level, n, self.message),
            None => write!(f, "{}: defaults: {}", level, self.message),
        }
    }
}

pub fn has_errors(issues: &[Issue]) -> bool {
    issues.iter().any(|i| i.severity == Severity::Error)
}

pub fn error_count(issues: &[Issue]) -> usize {
    issues.iter().filter(|i| i.severity == Severity::Error).count()
}

pub fn validate(catalog: &ContentCatalog) -> Vec<Issue> {
    let defaults = catalog.get_defaults();
    let mut issues = Vec::new();

    if defaults.default_backgrounds.is_empty() {
        issues.push(Issue::warning(None, "defaultBackgrounds is empty"));
    }
    if defaults.default_backgrounds.iter().any(|b| b.trim().is_empty()) {
        issues.push(Issue::error(None, "defaultBackgrounds contains an empty filename"));
    }
    for role in Role::ALL {
        let pair = defaults.default_avatars.get(role);
        for (field, file) in [("static", &pair.static_image), ("animated", &pair.animated)] {
            if file.trim().is_empty() {
                issues.push(Issue::error(
                    None,
                    format!("default {} avatar for '{}' is an empty filename", field, role),
                ));
            }
        }
    }
    if defaults.default_subtitle_duration == 0 {
        issues.push(Issue::error(None, "defaultSubtitleDuration is 0"));
    }

    for slide in catalog.slides() {
        check_slide(slide, &mut issues);
        if let Err(e) = resolver::resolve_slide(slide, defaults) {
            issues.push(Issue::error(Some(slide.number), e.to_string()));
        }
    }

    issues
}

fn check_slide(slide: &Slide, issues: &mut Vec<Issue>) {
    let n = Some(slide.number);

    if slide.background.as_deref().is_some_and(|b| b.trim().is_empty()) {
        issues.push(Issue::error(n, "background is an empty filename"));
    }

    for (role, over) in slide.avatars.iter().flatten() {
        let fields = [("static", &over.static_image), ("animated", &over.animated)];
        for (field, file) in fields {
            if file.as_deref().is_some_and(|f| f.trim().is_empty()) {
                issues.push(Issue::error(
                    n,
                    format!("{} avatar for '{}' is an empty filename", field, role),
                ));
            }
        }
    }

    for role in Role::ALL {
        match slide.audio.get(role.as_str()) {
            None => issues.push(Issue::error(n, format!("no audio for '{}'", role))),
            Some(file) if file.trim().is_empty() => {
                issues.push(Issue::error(n, format!("audio for '{}' is an empty filename", role)))
            }
            Some(_) => {}
        }
        match slide.subtitles.get(role.as_str()) {
            None => issues.push(Issue::error(n, format!("no subtitles for '{}'", role))),
            Some(lines) if lines.is_empty() => {
                issues.push(Issue::error(n, format!("subtitles for '{}' are empty", role)))
            }
            Some(_) => {}
        }
    }

    let named_roles = slide
        .audio
        .keys()
        .chain(slide.subtitles.keys())
        .chain(slide.avatars.iter().flat_map(|a| a.keys()));
    let mut unknown: Vec<&str> = named_roles
        .map(String::as_str)
        .filter(|r| Role::from_name(r).is_none())
        .collect();
    unknown.sort_unstable();
    unknown.dedup();
    for role in unknown {
        issues.push(Issue::warning(n, format!("unknown role '{}'", role)));
    }

    for (role, lines) in &slide.subtitles {
        for (idx, line) in lines.iter().enumerate() {
            if line.text.trim().is_empty() {
                issues.push(Issue::warning(n, format!("subtitle {} of '{}' has no text", idx, role)));
            }
            if let Some(ms) = line.duration.filter(|ms| *ms <= 0) {
                issues.push(Issue::warning(
                    n,
                    format!("subtitle {} of '{}' has duration {}, default used", idx, role, ms),
                ));
            }
        }
    }
}
