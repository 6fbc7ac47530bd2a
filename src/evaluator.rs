//! Version policy evaluation for a single dependency
//!
//! Given a declared constraint and the registry's latest tag, decides whether
//! an upgrade exists, how risky it is and whether the policy permits it.
//! Pure: no I/O, no clock.

use crate::domain::{Policy, ResolvedVersion, UpgradeCandidate, VersionConstraint};
use crate::error::EvaluationError;

/// Result of evaluating one dependency
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Evaluation {
    /// Latest is not newer than the declared version
    UpToDate,
    /// A newer version exists; check `eligible` before applying it
    Upgrade(UpgradeCandidate),
}

impl Evaluation {
    /// Returns the candidate if it exists and the policy permits it
    pub fn into_eligible(self) -> Option<UpgradeCandidate> {
        match self {
            Evaluation::Upgrade(candidate) if candidate.eligible => Some(candidate),
            _ => None,
        }
    }
}

/// Evaluate `raw_constraint` against the registry's `latest_raw` tag
pub fn evaluate(
    name: &str,
    raw_constraint: &str,
    latest_raw: Option<&str>,
    policy: &Policy,
) -> Result<Evaluation, EvaluationError> {
    let latest_raw = latest_raw
        .map(str::trim)
        .filter(|latest| !latest.is_empty())
        .ok_or_else(|| EvaluationError::NoLatestVersion(name.to_string()))?;

    let current = VersionConstraint::parse(raw_constraint)
        .resolve()
        .map_err(|_| EvaluationError::InvalidVersion(name.to_string()))?;
    let latest = ResolvedVersion::parse(latest_raw)
        .map_err(|_| EvaluationError::InvalidVersion(name.to_string()))?;

    if latest <= current {
        return Ok(Evaluation::UpToDate);
    }

    Ok(Evaluation::Upgrade(UpgradeCandidate::new(
        name,
        current,
        latest,
        policy.allow_major,
    )))
}
