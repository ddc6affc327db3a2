use std::path::Path;

use anyhow::Result;
use log::{info, warn};

use crate::catalog::ContentCatalog;
use crate::config::{CatalogConfig, SystemConfig, ValidationMode};
use crate::error::CatalogError;
use crate::validate::{self, Severity};

/// Loads the content named in `[system]` and applies the `[catalog]` policy.
pub fn load_configured() -> Result<ContentCatalog> {
    let sys: SystemConfig = slidecast_shared::config::get("system");
    let cat: CatalogConfig = slidecast_shared::config::get("catalog");
    load_content(&sys.content_path, &cat)
}

pub fn load_content(path: impl AsRef<Path>, cfg: &CatalogConfig) -> Result<ContentCatalog> {
    let path = path.as_ref();

    let catalog = if !path.exists() && cfg.use_builtin_when_missing {
        warn!("Content file not found at {:?}, using bundled content.", path);
        ContentCatalog::builtin().clone()
    } else {
        ContentCatalog::load(path)?
    };

    check(&catalog, cfg.validation)?;
    Ok(catalog)
}

/// Runs validation according to `mode`, logging each issue.
pub fn check(catalog: &ContentCatalog, mode: ValidationMode) -> Result<(), CatalogError> {
    if mode == ValidationMode::Off {
        return Ok(());
    }

    let issues = validate::validate(catalog);
    for issue in &issues {
        match issue.severity {
            Severity::Warning => warn!("{}", issue),
            Severity::Error => log::error!("{}", issue),
        }
    }

    let errors = validate::error_count(&issues);
    if mode == ValidationMode::Strict && validate::has_errors(&issues) {
        return Err(CatalogError::Invalid(format!(
            "{} validation error(s), first: {}",
            errors,
            issues.iter().find(|i| i.severity == Severity::Error).map(|i| i.to_string()).unwrap_or_default()
        )));
    }

    info!("Validation finished: {} issue(s), {} error(s)", issues.len(), errors);
    Ok(())
}
