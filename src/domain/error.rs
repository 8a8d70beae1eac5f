use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for deskbuild operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Settings file is present but invalid.
    #[error("Invalid deskbuild.toml: {0}")]
    Settings(String),

    /// External command exited non-zero or could not be spawned.
    #[error("Error executing command '{command}': {details}")]
    CommandFailed { command: String, details: String },

    /// No versioned build output was found after the front-end build.
    #[error("No valid build output found. Expected one of: {}", expected.join(", "))]
    NoBuildFound { expected: Vec<String> },

    /// Desktop entry-point HTML file is missing from the project root.
    #[error("Entry point not found: {}", .0.display())]
    EntryPointMissing(PathBuf),

    /// Tauri configuration file does not exist.
    #[error("Tauri configuration not found: {}", .0.display())]
    TauriConfigMissing(PathBuf),

    /// `build.frontendDist` is absent or empty in the Tauri configuration.
    #[error("frontendDist not configured in {}", .0.display())]
    FrontendDistNotConfigured(PathBuf),

    /// The configured frontend dist directory does not exist.
    #[error("Frontend dist path '{configured}' does not exist (resolved to {})", resolved.display())]
    FrontendDistMissing { configured: String, resolved: PathBuf },

    /// JSON parsing error (tauri.conf.json).
    #[error("Failed to parse Tauri configuration: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// TOML parsing error (deskbuild.toml).
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

impl AppError {
    pub(crate) fn settings<S: Into<String>>(message: S) -> Self {
        AppError::Settings(message.into())
    }
}
