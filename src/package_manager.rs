//! Package manager integration for applying upgrades
//!
//! This module provides:
//! - Detection of the project's package manager from its lock file
//! - Construction and execution of the install command

use crate::domain::{Report, UpgradeCandidate};
use crate::error::InstallError;
use std::fmt;
use std::path::Path;
use std::process::Command;
use tracing::info;

/// Supported Node.js package managers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageManagerKind {
    Bun,
    Pnpm,
    Yarn,
    Npm,
}

impl PackageManagerKind {
    /// Detect the package manager from lock files in `dir`, defaulting to npm
    pub fn detect(dir: &Path) -> Self {
        // Checked in order; the first lock file present wins
        let lock_files = [
            ("bun.lockb", Self::Bun),
            ("bun.lock", Self::Bun),
            ("pnpm-lock.yaml", Self::Pnpm),
            ("yarn.lock", Self::Yarn),
            ("package-lock.json", Self::Npm),
        ];

        lock_files
            .iter()
            .find(|(file, _)| dir.join(file).exists())
            .map(|(_, kind)| *kind)
            .unwrap_or(Self::Npm)
    }

    /// Executable name
    pub fn program(&self) -> &'static str {
        match self {
            Self::Bun => "bun",
            Self::Pnpm => "pnpm",
            Self::Yarn => "yarn",
            Self::Npm => "npm",
        }
    }

    /// Subcommand that adds or upgrades packages
    fn add_subcommand(&self) -> &'static str {
        match self {
            Self::Npm => "install",
            Self::Bun | Self::Pnpm | Self::Yarn => "add",
        }
    }

    /// Full argument vector installing every candidate at its latest version
    pub fn install_command(&self, candidates: &[UpgradeCandidate]) -> Vec<String> {
        let mut command = vec![self.program().to_string(), self.add_subcommand().to_string()];
        command.extend(candidates.iter().map(UpgradeCandidate::install_spec));
        command
    }
}

impl fmt::Display for PackageManagerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program())
    }
}

/// Result of a package manager invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallOutcome {
    /// The package manager used
    pub kind: PackageManagerKind,
    /// The command that was executed (empty when nothing ran)
    pub command: String,
    /// Standard output from the command
    pub stdout: String,
    /// Standard error from the command
    pub stderr: String,
}

impl InstallOutcome {
    /// Create a result for an invocation that was not needed
    pub fn skipped(kind: PackageManagerKind) -> Self {
        Self {
            kind,
            command: String::new(),
            stdout: String::new(),
            stderr: String::new(),
        }
    }
}

/// Capability that applies upgrades with a package manager
pub trait Installer {
    /// Install `candidates` at their latest versions in `dir`
    fn install(
        &self,
        kind: PackageManagerKind,
        candidates: &[UpgradeCandidate],
        dir: &Path,
    ) -> Result<InstallOutcome, InstallError>;
}

/// Installer that runs the real package manager
#[derive(Debug, Default)]
pub struct SystemInstaller;

impl SystemInstaller {
    pub fn new() -> Self {
        Self
    }
}

impl Installer for SystemInstaller {
    fn install(
        &self,
        kind: PackageManagerKind,
        candidates: &[UpgradeCandidate],
        dir: &Path,
    ) -> Result<InstallOutcome, InstallError> {
        if candidates.is_empty() {
            return Ok(InstallOutcome::skipped(kind));
        }

        let parts = kind.install_command(candidates);
        let command = parts.join(" ");
        info!("running '{}' in {}", command, dir.display());

        let output = Command::new(&parts[0])
            .args(&parts[1..])
            .current_dir(dir)
            .output()
            .map_err(|source| InstallError::SpawnFailed {
                command: command.clone(),
                source,
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();

        if !output.status.success() {
            return Err(InstallError::CommandFailed {
                command,
                status: output.status.to_string(),
                stderr,
            });
        }

        Ok(InstallOutcome {
            kind,
            command,
            stdout,
            stderr,
        })
    }
}

/// Install every update in `report` using the package manager detected in `dir`
pub fn apply_updates<I: Installer + ?Sized>(
    installer: &I,
    dir: &Path,
    report: &Report,
) -> Result<InstallOutcome, InstallError> {
    let kind = PackageManagerKind::detect(dir);
    installer.install(kind, &report.updates, dir)
}
