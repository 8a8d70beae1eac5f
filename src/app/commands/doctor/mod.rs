//! Validation-only pass over a desktop build workspace.
//!
//! Runs every check the build pipeline would fail on, but reports them all at
//! once instead of stopping at the first.

mod diagnostics;

use std::path::{Path, PathBuf};

use crate::app::config::{load_settings, settings_path};
use crate::domain::{AppError, BuildSettings, DistLayout, check_tauri_configuration};

#[allow(unused_imports)]
pub use diagnostics::{Diagnostic, Diagnostics, Severity};

#[derive(Debug, Clone, Default)]
pub struct DoctorOptions {
    /// Alternate settings file (`--config`).
    pub config: Option<PathBuf>,
    /// Treat warnings as failures (exit 2).
    pub strict: bool,
}

#[derive(Debug, Clone)]
pub struct DoctorOutcome {
    pub errors: usize,
    pub warnings: usize,
    pub exit_code: i32,
}

pub fn execute(root: &Path, options: &DoctorOptions) -> Result<DoctorOutcome, AppError> {
    let mut diagnostics = Diagnostics::default();

    let settings = read_settings(root, options.config.as_deref(), &mut diagnostics);
    let layout = DistLayout::new(root, &settings);

    entry_point_checks(&layout, &mut diagnostics);
    dist_checks(&layout, &mut diagnostics);
    tauri_checks(&root.join(&settings.tauri.config_path), &mut diagnostics);

    diagnostics.emit();

    let errors = diagnostics.error_count();
    let warnings = diagnostics.warning_count();
    let exit_code = if errors > 0 {
        1
    } else if warnings > 0 && options.strict {
        2
    } else {
        0
    };

    if errors == 0 && warnings == 0 {
        println!("All checks passed.");
    } else if errors == 0 && !options.strict {
        eprintln!("Check completed with {} warning(s).", warnings);
    } else {
        eprintln!("Check failed: {} error(s), {} warning(s) found.", errors, warnings);
    }

    Ok(DoctorOutcome { errors, warnings, exit_code })
}

fn read_settings(
    root: &Path,
    override_path: Option<&Path>,
    diagnostics: &mut Diagnostics,
) -> BuildSettings {
    match load_settings(root, override_path) {
        Ok(settings) => settings,
        Err(err) => {
            let path = settings_path(root, override_path);
            diagnostics.push_error(path.display().to_string(), err.to_string());
            BuildSettings::default()
        }
    }
}

fn entry_point_checks(layout: &DistLayout, diagnostics: &mut Diagnostics) {
    let entry_source = layout.entry_point_source();
    if !entry_source.exists() {
        diagnostics.push_error(entry_source.display().to_string(), "Missing entry-point HTML");
    }
}

fn dist_checks(layout: &DistLayout, diagnostics: &mut Diagnostics) {
    let dist_dir = layout.dist_dir();
    if !dist_dir.exists() {
        // Not necessarily wrong, the front-end build may simply not have run.
        diagnostics
            .push_warning(dist_dir.display().to_string(), "Dist directory missing (run build)");
        return;
    }

    if layout.find_build().is_none() {
        diagnostics.push_error(
            dist_dir.display().to_string(),
            format!(
                "No versioned build found. Expected one of: {}",
                layout
                    .expected_indexes()
                    .iter()
                    .map(|path| path.display().to_string())
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
        );
    }

    let root_index = layout.root_index();
    if !root_index.exists() {
        diagnostics
            .push_warning(root_index.display().to_string(), "Entry point not staged (run build)");
    }
}

fn tauri_checks(config_path: &Path, diagnostics: &mut Diagnostics) {
    if let Err(err) = check_tauri_configuration(config_path) {
        diagnostics.push_error(config_path.display().to_string(), err.to_string());
    }
}
