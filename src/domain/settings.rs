//! Pipeline settings loaded from `deskbuild.toml`.
//!
//! Every field has a default matching the CircuitVerse simulator layout, so the
//! file is optional and an empty file is valid.

use serde::Deserialize;

use crate::domain::AppError;

/// Settings for the desktop build pipeline.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BuildSettings {
    /// Front-end build step configuration.
    #[serde(default)]
    pub build: BuildSection,
    /// Tauri packaging configuration.
    #[serde(default)]
    pub tauri: TauriSection,
}

/// `[build]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct BuildSection {
    /// Command that produces the front-end dist, run through the platform shell.
    #[serde(default = "default_command")]
    pub command: String,
    /// Build output directory.
    #[serde(default = "default_dist_dir")]
    pub dist_dir: String,
    /// Versioned application subtree under the dist directory.
    #[serde(default = "default_app_dir")]
    pub app_dir: String,
    /// Candidate build versions, in promotion order.
    #[serde(default = "default_versions")]
    pub versions: Vec<String>,
    /// Desktop entry-point HTML file at the project root.
    #[serde(default = "default_entry_point")]
    pub entry_point: String,
}

impl Default for BuildSection {
    fn default() -> Self {
        Self {
            command: default_command(),
            dist_dir: default_dist_dir(),
            app_dir: default_app_dir(),
            versions: default_versions(),
            entry_point: default_entry_point(),
        }
    }
}

/// `[tauri]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct TauriSection {
    /// Path to `tauri.conf.json`, relative to the project root.
    #[serde(default = "default_tauri_config")]
    pub config_path: String,
}

impl Default for TauriSection {
    fn default() -> Self {
        Self { config_path: default_tauri_config() }
    }
}

fn default_command() -> String {
    "npm run build".to_string()
}

fn default_dist_dir() -> String {
    "dist".to_string()
}

fn default_app_dir() -> String {
    "simulatorvue".to_string()
}

fn default_versions() -> Vec<String> {
    vec!["v0".to_string(), "v1".to_string()]
}

fn default_entry_point() -> String {
    "index-cv.html".to_string()
}

fn default_tauri_config() -> String {
    "src-tauri/tauri.conf.json".to_string()
}

impl BuildSettings {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.build.command.trim().is_empty() {
            return Err(AppError::settings("build.command must not be empty"));
        }
        if self.build.dist_dir.trim().is_empty() {
            return Err(AppError::settings("build.dist_dir must not be empty"));
        }
        if self.build.app_dir.trim().is_empty() {
            return Err(AppError::settings("build.app_dir must not be empty"));
        }
        if self.build.entry_point.trim().is_empty() {
            return Err(AppError::settings("build.entry_point must not be empty"));
        }
        if self.build.versions.is_empty() {
            return Err(AppError::settings("build.versions must name at least one version"));
        }
        if self.build.versions.iter().any(|version| version.trim().is_empty()) {
            return Err(AppError::settings("build.versions must not contain empty entries"));
        }
        if self.tauri.config_path.trim().is_empty() {
            return Err(AppError::settings("tauri.config_path must not be empty"));
        }
        Ok(())
    }
}

/// Parse and validate pipeline settings from TOML content.
pub fn parse_settings_content(content: &str) -> Result<BuildSettings, AppError> {
    let settings: BuildSettings = toml::from_str(content)?;
    settings.validate()?;
    Ok(settings)
}
