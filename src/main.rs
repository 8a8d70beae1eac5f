use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use deskbuild::{AppError, BuildOptions, DoctorOptions};

#[derive(Parser)]
#[command(name = "deskbuild")]
#[command(version)]
#[command(
    about = "Orchestrate a web front-end build into Tauri desktop packaging",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full pipeline: build, validate output, stage entry point, check Tauri config
    #[clap(visible_alias = "b")]
    Build {
        /// Alternate settings file (default: deskbuild.toml if present)
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Print the plan without executing anything
        #[arg(long)]
        dry_run: bool,
    },
    /// Validate the workspace without building
    #[clap(visible_alias = "d")]
    Doctor {
        /// Alternate settings file (default: deskbuild.toml if present)
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Treat warnings as failures
        #[arg(long)]
        strict: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result: Result<i32, AppError> = match cli.command {
        Commands::Build { config, dry_run } => {
            deskbuild::run_build(&BuildOptions { config, dry_run }).map(|_| 0)
        }
        Commands::Doctor { config, strict } => {
            deskbuild::run_doctor(&DoctorOptions { config, strict })
                .map(|outcome| outcome.exit_code)
        }
    };

    match result {
        Ok(code) => ExitCode::from(code as u8),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(1)
        }
    }
}
