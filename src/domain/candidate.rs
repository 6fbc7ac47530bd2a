//! Upgrade candidates produced by the policy evaluator

use super::{DifferenceKind, ResolvedVersion};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An available upgrade for one dependency
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpgradeCandidate {
    /// Package name
    pub name: String,
    /// Version extracted from the declared constraint
    pub current: ResolvedVersion,
    /// Latest published version
    pub latest: ResolvedVersion,
    /// Impact of the upgrade
    #[serde(rename = "type")]
    pub difference: DifferenceKind,
    /// Whether the current policy permits applying it
    #[serde(rename = "canUpdate")]
    pub eligible: bool,
    /// When the latest version was published, if the registry said
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,
}

impl UpgradeCandidate {
    /// Creates a candidate, classifying the difference between the two versions
    pub fn new(
        name: impl Into<String>,
        current: ResolvedVersion,
        latest: ResolvedVersion,
        allow_major: bool,
    ) -> Self {
        let difference = current.difference(&latest);
        Self {
            name: name.into(),
            current,
            latest,
            difference,
            eligible: difference != DifferenceKind::Major || allow_major,
            published_at: None,
        }
    }

    /// Attach the publish time of the latest version
    pub fn with_published_at(mut self, published_at: Option<DateTime<Utc>>) -> Self {
        self.published_at = published_at;
        self
    }

    /// `name@latest` as understood by npm-compatible installers
    pub fn install_spec(&self) -> String {
        format!("{}@{}", self.name, self.latest)
    }
}

impl fmt::Display for UpgradeCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} → {} ({})",
            self.name, self.current, self.latest, self.difference
        )
    }
}
