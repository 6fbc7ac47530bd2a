//! CLI argument parsing module for depdoctor

use crate::checker::DEFAULT_CONCURRENCY;
use crate::domain::Policy;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Parse a positive lookup concurrency
fn parse_concurrency(s: &str) -> Result<usize, String> {
    let n: usize = s
        .trim()
        .parse()
        .map_err(|_| format!("invalid number: {}", s))?;
    if n == 0 {
        return Err("concurrency must be at least 1".to_string());
    }
    Ok(n)
}

/// Check and update package dependencies
#[derive(Parser, Debug, Clone)]
#[command(
    name = "depdoctor",
    version,
    about = "Check and update package dependencies"
)]
pub struct CliArgs {
    /// Project directory containing package.json (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    // Policy options
    /// Include major version upgrades
    #[arg(long)]
    pub major: bool,

    /// Comma-separated list of packages to ignore (can be specified multiple times)
    #[arg(long, value_delimiter = ',', action = ArgAction::Append)]
    pub ignore: Vec<String>,

    // Install options
    /// Install the updated packages
    #[arg(long)]
    pub update: bool,

    /// Show what would change without modifying anything
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    // Output options
    /// Output report as JSON
    #[arg(long)]
    pub json: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable verbose output (debug logs on stderr)
    #[arg(short, long)]
    pub verbose: bool,

    /// Enable quiet mode - no progress or status messages
    #[arg(short, long)]
    pub quiet: bool,

    /// Maximum number of registry lookups in flight
    #[arg(long, default_value_t = DEFAULT_CONCURRENCY, value_parser = parse_concurrency)]
    pub concurrency: usize,
}

impl CliArgs {
    /// Ignored package names, trimmed with empty entries dropped
    pub fn ignored_packages(&self) -> Vec<String> {
        self.ignore
            .iter()
            .map(|name| name.trim())
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Build the run policy from the flags
    pub fn policy(&self) -> Policy {
        Policy::new()
            .with_allow_major(self.major)
            .with_ignore(self.ignored_packages())
    }

    /// Whether the progress bar should be drawn
    pub fn show_progress(&self) -> bool {
        !self.quiet && !self.json
    }

    /// Whether packages should actually be installed (JSON output is report-only)
    pub fn should_install(&self) -> bool {
        self.update && !self.dry_run && !self.json
    }
}
