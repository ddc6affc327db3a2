use std::fs;
use std::path::Path;

use serde::Serialize;
use slidecast_core::config::{CatalogConfig, SystemConfig};

#[derive(Serialize, Default)]
struct FullConfig {
    system: SystemConfig,
    catalog: CatalogConfig,
}

pub fn default_config_toml() -> anyhow::Result<String> {
    Ok(toml::to_string_pretty(&FullConfig::default())?)
}

/// Writes a default config file on first run. Logging is not up yet, so
/// progress goes to stderr.
pub fn ensure_config_exists(path: &Path) {
    if path.exists() {
        return;
    }

    eprintln!("Creating default configuration at {:?}...", path);

    let toml_str = match default_config_toml() {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Failed to serialize default config: {}", e);
            return;
        }
    };

    if let Err(e) = fs::write(path, toml_str) {
        eprintln!("Failed to write config file: {}", e);
    }
}
