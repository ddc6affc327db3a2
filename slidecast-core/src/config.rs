use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemConfig {
    pub content_path: String,
    pub log_path: String,
    pub log_level: String,
}

/// How hard the loader reacts to validation issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationMode {
    Off,
    #[default]
    Warn,
    Strict,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub validation: ValidationMode,
    /// Serve the bundled content when `content_path` does not exist.
    pub use_builtin_when_missing: bool,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            content_path: "content.json".into(),
            log_path: "logs/".into(),
            log_level: "info".into(),
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            validation: ValidationMode::Warn,
            use_builtin_when_missing: true,
        }
    }
}
