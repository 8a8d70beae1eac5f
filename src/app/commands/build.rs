//! Full desktop build pipeline: front-end build, output validation,
//! entry-point staging, Tauri configuration check.

use std::fs;
use std::path::{Path, PathBuf};

use crate::app::config::load_settings;
use crate::domain::{AppError, DistLayout, check_tauri_configuration};
use crate::ports::CommandRunner;

/// Environment flag signalling desktop mode to the front-end build.
pub const DESKTOP_MODE_ENV: &str = "DESKTOP_MODE";

#[derive(Debug, Clone, Default)]
pub struct BuildOptions {
    /// Alternate settings file (`--config`).
    pub config: Option<PathBuf>,
    /// Print the plan without executing anything.
    pub dry_run: bool,
}

#[derive(Debug, Clone)]
pub struct BuildOutcome {
    /// Version promoted to the dist root, `None` on a dry run.
    pub promoted_version: Option<String>,
    /// `build.frontendDist` as configured, `None` on a dry run.
    pub frontend_dist: Option<String>,
}

pub fn execute<R: CommandRunner>(
    root: &Path,
    runner: &R,
    options: &BuildOptions,
) -> Result<BuildOutcome, AppError> {
    let settings = load_settings(root, options.config.as_deref())?;
    let layout = DistLayout::new(root, &settings);
    let tauri_config_path = root.join(&settings.tauri.config_path);

    if options.dry_run {
        println!("Dry run; no commands will be executed.");
        println!("Build command: {}", settings.build.command);
        for index in layout.expected_indexes() {
            println!("Would check: {}", index.display());
        }
        println!("Would stage: {}", layout.entry_point_source().display());
        println!("Would validate: {}", tauri_config_path.display());
        return Ok(BuildOutcome { promoted_version: None, frontend_dist: None });
    }

    println!("Building front-end: {}", settings.build.command);
    let output = runner.run(&settings.build.command, &[(DESKTOP_MODE_ENV, "true")])?;
    if !output.stdout.trim().is_empty() {
        println!("{}", output.stdout.trim_end());
    }

    let promoted = layout.require_build()?;
    println!("Found build for version: {}", promoted.version);

    fs::copy(&promoted.index, layout.root_index())?;
    println!("Copied {} index.html to {}/", promoted.version, layout.dist_dir().display());

    let entry_source = layout.entry_point_source();
    if !entry_source.exists() {
        return Err(AppError::EntryPointMissing(entry_source));
    }
    fs::copy(&entry_source, layout.staged_entry_point())?;
    // The desktop entry HTML wins over the promoted build's own index.
    fs::copy(layout.staged_entry_point(), layout.root_index())?;
    println!("Promoted {} as desktop entry point", settings.build.entry_point);

    let frontend_dist = check_tauri_configuration(&tauri_config_path)?;
    println!("Tauri configuration validated (frontendDist: {})", frontend_dist.configured);

    Ok(BuildOutcome {
        promoted_version: Some(promoted.version),
        frontend_dist: Some(frontend_dist.configured),
    })
}
