//! deskbuild: orchestrate a web front-end build into Tauri desktop packaging.
//!
//! The pipeline runs the front-end build with `DESKTOP_MODE=true`, validates
//! the versioned output under `dist/`, stages the desktop entry-point HTML as
//! `dist/index.html`, and checks that the Tauri configuration's
//! `build.frontendDist` names an existing directory.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

use std::env;

use adapters::ShellCommandRunner;
use app::commands::{build, doctor};

pub use app::commands::build::{BuildOptions, BuildOutcome, DESKTOP_MODE_ENV};
pub use app::commands::doctor::{DoctorOptions, DoctorOutcome};
pub use domain::AppError;

/// Run the full desktop build pipeline in the current directory.
pub fn run_build(options: &BuildOptions) -> Result<BuildOutcome, AppError> {
    let root = env::current_dir()?;
    let runner = ShellCommandRunner::new(&root);

    let outcome = build::execute(&root, &runner, options)?;
    if !options.dry_run {
        println!("✅ Desktop build process completed successfully");
    }
    Ok(outcome)
}

/// Run the validation pass in the current directory without building.
pub fn run_doctor(options: &DoctorOptions) -> Result<DoctorOutcome, AppError> {
    let root = env::current_dir()?;
    doctor::execute(&root, options)
}
