//! depdoctor - npm dependency update checker CLI tool
//!
//! Checks every dependency declared in package.json against the npm registry,
//! reports available upgrades and optionally installs them with the project's
//! package manager.

use anyhow::Context;
use clap::Parser;
use depdoctor::cli::CliArgs;
use depdoctor::orchestrator::Orchestrator;
use depdoctor::package_manager::SystemInstaller;
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--verbose` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("depdoctor=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("depdoctor=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(io::stderr))
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = CliArgs::parse();
    init_tracing(args.verbose);

    tracing::debug!("depdoctor starting with args: {:?}", args);

    if args.no_color {
        colored::control::set_override(false);
    }

    match run(args).await {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Resolve the target directory against the working directory
fn resolve_project_dir(path: &Path) -> anyhow::Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    let cwd = std::env::current_dir().context("failed to resolve current directory")?;
    Ok(cwd.join(path))
}

/// Main application logic
async fn run(args: CliArgs) -> anyhow::Result<ExitCode> {
    let project_dir = resolve_project_dir(&args.path)?;

    let orchestrator = Orchestrator::new(args)?;
    let report = orchestrator.run(&project_dir).await?;

    let mut stdout = io::stdout().lock();
    orchestrator.finish(&report, &SystemInstaller::new(), &project_dir, &mut stdout)?;

    Ok(ExitCode::SUCCESS)
}
