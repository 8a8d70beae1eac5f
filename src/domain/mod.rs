//! Domain models: errors, pipeline settings, dist layout, Tauri configuration.

mod dist;
mod error;
mod settings;
mod tauri;

pub use dist::{DistLayout, PromotedBuild};
pub use error::AppError;
pub use settings::{BuildSettings, parse_settings_content};
pub use tauri::{FrontendDist, check_tauri_configuration, parse_tauri_conf};
