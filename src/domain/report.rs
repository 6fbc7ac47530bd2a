//! Aggregated result of one dependency check

use super::UpgradeCandidate;
use serde::{Deserialize, Serialize};

/// Outcome of checking every declared dependency
///
/// Each sequence follows the declaration order of the manifest, and a name
/// appears in at most one of them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    /// Eligible upgrades
    pub updates: Vec<UpgradeCandidate>,
    /// Names skipped by the ignore list
    pub ignored: Vec<String>,
    /// Per-dependency diagnostics
    pub errors: Vec<String>,
}

impl Report {
    /// Create an empty report
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_update(&mut self, candidate: UpgradeCandidate) {
        self.updates.push(candidate);
    }

    pub fn add_ignored(&mut self, name: impl Into<String>) {
        self.ignored.push(name.into());
    }

    pub fn add_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    /// Returns true if at least one upgrade is available
    pub fn has_updates(&self) -> bool {
        !self.updates.is_empty()
    }

    /// Returns true if any dependency failed to check
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}
