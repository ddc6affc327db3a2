//! Raw and resolved content records.
//!
//! Raw records mirror the content file: every field a slide may omit is an
//! `Option`. Resolved records come out of [`crate::resolver`] and carry no
//! optional fields at all.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

pub const DEFAULT_SUBTITLE_DURATION_MS: u64 = 2000;

/// One of the two fixed actors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Man,
    Woman,
}

impl Role {
    pub const ALL: [Role; 2] = [Role::Man, Role::Woman];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Man => "man",
            Role::Woman => "woman",
        }
    }

    pub fn from_name(name: &str) -> Option<Role> {
        Role::ALL.into_iter().find(|r| r.as_str() == name)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvatarPair {
    #[serde(rename = "static")]
    pub static_image: String,
    pub animated: String,
}

/// Per-slide avatar override; each image falls back independently.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvatarOverride {
    #[serde(rename = "static", default, skip_serializing_if = "Option::is_none")]
    pub static_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animated: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleAvatars {
    pub man: AvatarPair,
    pub woman: AvatarPair,
}

impl RoleAvatars {
    pub fn get(&self, role: Role) -> &AvatarPair {
        match role {
            Role::Man => &self.man,
            Role::Woman => &self.woman,
        }
    }
}

/// Global fallback table shared by every slide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DefaultConfig {
    /// Prefix for every resource filename; joined by the asset loader.
    #[serde(default)]
    pub base_path: String,
    pub default_avatars: RoleAvatars,
    /// Used cyclically by slide number.
    #[serde(default)]
    pub default_backgrounds: Vec<String>,
    #[serde(default = "default_subtitle_duration")]
    pub default_subtitle_duration: u64,
}

fn default_subtitle_duration() -> u64 {
    DEFAULT_SUBTITLE_DURATION_MS
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubtitleLine {
    pub text: String,
    /// Milliseconds. Missing or non-positive values use the default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<i64>,
}

/// A slide exactly as written in the content file.
///
/// Role maps are keyed by role name rather than [`Role`] so that content
/// naming an unknown actor still loads and can be reported.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    /// Taken from the slide's key in the content file.
    #[serde(skip)]
    pub number: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatars: Option<BTreeMap<String, AvatarOverride>>,
    #[serde(default)]
    pub audio: BTreeMap<String, String>,
    #[serde(default)]
    pub subtitles: BTreeMap<String, Vec<SubtitleLine>>,
}

impl Slide {
    pub fn avatar_override(&self, role: &str) -> Option<&AvatarOverride> {
        self.avatars.as_ref().and_then(|a| a.get(role))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedSubtitleLine {
    pub text: String,
    pub duration: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedSlide {
    pub number: u32,
    pub background: String,
    pub avatars: BTreeMap<String, AvatarPair>,
    pub audio: BTreeMap<String, String>,
    pub subtitles: BTreeMap<String, Vec<ResolvedSubtitleLine>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_names() {
        assert_eq!(Role::from_name("man"), Some(Role::Man));
        assert_eq!(Role::from_name("woman"), Some(Role::Woman));
        assert_eq!(Role::from_name("Man"), None);
        assert_eq!(Role::Woman.to_string(), "woman");
    }

    #[test]
    fn subtitle_line_without_duration() {
        let line: SubtitleLine = serde_json::from_str(r#"{"text":"hi"}"#).unwrap();
        assert_eq!(line, SubtitleLine { text: "hi".into(), duration: None });
        assert_eq!(serde_json::to_string(&line).unwrap(), r#"{"text":"hi"}"#);
    }

    #[test]
    fn avatar_override_uses_static_key() {
        let o: AvatarOverride = serde_json::from_str(r#"{"static":"x.png"}"#).unwrap();
        assert_eq!(o.static_image.as_deref(), Some("x.png"));
        assert_eq!(o.animated, None);
    }
}
