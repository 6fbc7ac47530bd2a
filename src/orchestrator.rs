//! Check orchestrator for coordinating one run
//!
//! This module provides:
//! - Workflow coordination: read manifest → look up → evaluate → report
//! - Rendering plus the install or dry-run step applied to a finished report
//!
//! The project directory, installer and output sink are always passed in
//! explicitly; nothing here reads process state.

use crate::checker::ReportBuilder;
use crate::cli::CliArgs;
use crate::domain::Report;
use crate::error::AppError;
use crate::manifest::read_manifest;
use crate::output::{create_formatter, OutputConfig};
use crate::package_manager::{apply_updates, InstallOutcome, Installer};
use crate::registry::{HttpClient, NpmRegistry, RegistryLookup};
use std::io::Write;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

/// Orchestrator for the check workflow
pub struct Orchestrator {
    /// CLI arguments for configuration
    args: CliArgs,
    /// Registry used for latest-version lookups
    registry: Arc<dyn RegistryLookup>,
}

impl Orchestrator {
    /// Create an orchestrator backed by the public npm registry
    pub fn new(args: CliArgs) -> Result<Self, AppError> {
        let client = HttpClient::new()?;
        Ok(Self::with_registry(args, Arc::new(NpmRegistry::new(client))))
    }

    /// Create an orchestrator with a custom registry (for testing)
    pub fn with_registry(args: CliArgs, registry: Arc<dyn RegistryLookup>) -> Self {
        Self { args, registry }
    }

    /// Check every dependency declared by the project in `project_dir`
    pub async fn run(&self, project_dir: &Path) -> Result<Report, AppError> {
        let manifest = read_manifest(project_dir)?;
        if manifest.is_empty() {
            debug!(
                "{} declares no dependencies",
                manifest.name.as_deref().unwrap_or("package.json")
            );
        }

        let dependencies = manifest.declared_dependencies();
        debug!(
            "{} dependencies declared in {}",
            dependencies.len(),
            project_dir.display()
        );

        let policy = self.args.policy();
        let builder = ReportBuilder::new(Arc::clone(&self.registry))
            .with_concurrency(self.args.concurrency)
            .with_progress(self.args.show_progress());

        Ok(builder.build(&dependencies, &policy).await)
    }

    /// Render the report to `out`, then install or announce the dry run.
    ///
    /// JSON output is a plain report dump: nothing is installed and no status
    /// lines follow it. Installer failures surface after the report is written.
    pub fn finish<I: Installer + ?Sized>(
        &self,
        report: &Report,
        installer: &I,
        project_dir: &Path,
        out: &mut dyn Write,
    ) -> Result<(), AppError> {
        let config = OutputConfig::from_cli(self.args.json, self.args.no_color);
        create_formatter(&config).format(report, out)?;
        out.flush()?;

        if self.args.json || !report.has_updates() {
            return Ok(());
        }

        if self.args.should_install() {
            self.status(out, "\nUpdating packages...")?;
            let outcome = self.install(installer, project_dir, report)?;
            if !outcome.stdout.trim().is_empty() {
                self.status(out, outcome.stdout.trim_end())?;
            }
            self.status(
                out,
                &format!(
                    "Updated {} package(s) using {}",
                    report.updates.len(),
                    outcome.kind
                ),
            )?;
        } else if self.args.dry_run {
            self.status(out, "\nDry run: no packages were updated.")?;
        }

        Ok(())
    }

    /// Install the report's updates with the project's package manager
    pub fn install<I: Installer + ?Sized>(
        &self,
        installer: &I,
        project_dir: &Path,
        report: &Report,
    ) -> Result<InstallOutcome, AppError> {
        // The package manager blocks; keep other runtime workers free meanwhile
        let outcome =
            tokio::task::block_in_place(|| apply_updates(installer, project_dir, report))?;
        info!("'{}' finished", outcome.command);
        Ok(outcome)
    }

    fn status(&self, out: &mut dyn Write, message: &str) -> Result<(), AppError> {
        if !self.args.quiet {
            writeln!(out, "{}", message)?;
        }
        Ok(())
    }
}
