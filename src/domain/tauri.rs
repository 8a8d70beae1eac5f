//! Typed view of the Tauri configuration, limited to the fields the pipeline
//! validates.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::domain::AppError;

/// Subset of `tauri.conf.json` relevant to asset validation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TauriConf {
    #[serde(default)]
    pub build: TauriBuildSection,
}

/// `build` object of `tauri.conf.json`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TauriBuildSection {
    /// Directory of front-end assets the bundler packages, relative to the
    /// configuration file.
    #[serde(default)]
    pub frontend_dist: Option<String>,
}

/// Parse a Tauri configuration from JSON content.
pub fn parse_tauri_conf(content: &str) -> Result<TauriConf, AppError> {
    Ok(serde_json::from_str(content)?)
}

/// The validated frontend dist reference of one Tauri configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontendDist {
    /// Value as written in the configuration.
    pub configured: String,
    /// Absolute path, resolved against the configuration file's directory.
    pub resolved: PathBuf,
}

/// Read a Tauri configuration file and resolve its `build.frontendDist`.
///
/// Fails before touching the filesystem for resolution when the field is
/// absent or empty. The configured value is resolved relative to the config
/// file's directory, matching how the Tauri CLI interprets it.
pub fn check_tauri_configuration(config_path: &Path) -> Result<FrontendDist, AppError> {
    if !config_path.exists() {
        return Err(AppError::TauriConfigMissing(config_path.to_path_buf()));
    }

    let content = fs::read_to_string(config_path)?;
    let conf = parse_tauri_conf(&content)?;

    let configured = match conf.build.frontend_dist {
        Some(value) if !value.trim().is_empty() => value,
        _ => return Err(AppError::FrontendDistNotConfigured(config_path.to_path_buf())),
    };

    let config_dir = config_path.parent().unwrap_or_else(|| Path::new("."));
    let resolved = resolve_against(config_dir, &configured);

    if !resolved.exists() {
        return Err(AppError::FrontendDistMissing { configured, resolved });
    }

    Ok(FrontendDist { configured, resolved })
}

fn resolve_against(base: &Path, value: &str) -> PathBuf {
    let candidate = Path::new(value);
    if candidate.is_absolute() {
        return candidate.to_path_buf();
    }

    // Lexical normalization only; the path is checked for existence, not
    // canonicalized, so a dangling symlink segment still reports the
    // configured shape.
    let mut resolved = base.to_path_buf();
    for component in candidate.components() {
        use std::path::Component;
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                resolved.pop();
            }
            other => resolved.push(other),
        }
    }
    resolved
}
