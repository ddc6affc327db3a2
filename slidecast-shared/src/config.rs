//! Process-wide application configuration.
//!
//! The TOML file is read once by [`init`]; afterwards every crate pulls its
//! own section out with [`get`]. Sections that are missing or malformed fall
//! back to the section type's `Default`.

use std::fs;
use std::path::Path;
use std::sync::RwLock;

use once_cell::sync::OnceCell;
use serde::de::DeserializeOwned;
use toml::Table;

static GLOBAL_CONFIG: OnceCell<RwLock<Table>> = OnceCell::new();

pub fn init<P: AsRef<Path>>(path: P) -> anyhow::Result<()> {
    let path = path.as_ref();

    let content = if path.exists() {
        log::info!("Loading config from {:?}", path);
        fs::read_to_string(path)?
    } else {
        log::warn!("Config file not found at {:?}, using defaults.", path);
        String::new()
    };

    init_from_str(&content)
}

/// Same as [`init`] but from an in-memory TOML document.
pub fn init_from_str(content: &str) -> anyhow::Result<()> {
    let table: Table = toml::from_str(content).unwrap_or_else(|e| {
        log::error!("Config syntax error: {}, using empty config.", e);
        Table::new()
    });

    GLOBAL_CONFIG
        .set(RwLock::new(table))
        .map_err(|_| anyhow::anyhow!("Config already initialized"))?;

    Ok(())
}

pub fn get<T: DeserializeOwned + Default>(key: &str) -> T {
    let Some(store) = GLOBAL_CONFIG.get() else {
        log::debug!("Config not initialized, section '[{}]' uses defaults.", key);
        return T::default();
    };
    let read_guard = match store.read() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    };

    match read_guard.get(key) {
        Some(value) => section_from_value(key, value.clone()),
        None => T::default(),
    }
}

fn section_from_value<T: DeserializeOwned + Default>(key: &str, value: toml::Value) -> T {
    value.try_into().unwrap_or_else(|e| {
        log::warn!("Config section '[{}]' mismatch: {}. Using default.", key, e);
        T::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Default, Deserialize, PartialEq)]
    #[serde(default)]
    struct Section {
        level: String,
        count: u32,
    }

    #[test]
    fn section_parses_partial_table() {
        let table: Table = toml::from_str("[s]\nlevel = \"debug\"\n").unwrap();
        let section: Section = section_from_value("s", table["s"].clone());
        assert_eq!(section, Section { level: "debug".into(), count: 0 });
    }

    #[test]
    fn mismatched_section_falls_back_to_default() {
        let table: Table = toml::from_str("[s]\ncount = \"many\"\n").unwrap();
        let section: Section = section_from_value("s", table["s"].clone());
        assert_eq!(section, Section::default());
    }
}
