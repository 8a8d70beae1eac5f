//! Pipeline settings loading from the project root.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::{AppError, BuildSettings, parse_settings_content};

/// Default settings file name at the project root.
pub const SETTINGS_FILE: &str = "deskbuild.toml";

/// Location of the settings file for one invocation.
pub fn settings_path(root: &Path, override_path: Option<&Path>) -> PathBuf {
    match override_path {
        Some(path) if path.is_absolute() => path.to_path_buf(),
        Some(path) => root.join(path),
        None => root.join(SETTINGS_FILE),
    }
}

/// Load and validate settings, falling back to defaults when no file exists.
///
/// An explicitly passed `--config` path must exist; the implicit
/// `deskbuild.toml` is optional.
pub fn load_settings(root: &Path, override_path: Option<&Path>) -> Result<BuildSettings, AppError> {
    let path = settings_path(root, override_path);

    if !path.exists() {
        if override_path.is_some() {
            return Err(AppError::settings(format!(
                "settings file not found: {}",
                path.display()
            )));
        }
        return Ok(BuildSettings::default());
    }

    let content = fs::read_to_string(&path)?;
    parse_settings_content(&content)
}
