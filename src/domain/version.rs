//! Comparable version values and upgrade classification
//!
//! Wraps `semver::Version` so that:
//! - a leading `v` or `=` is tolerated (as npm does)
//! - build metadata is ignored for ordering and equality
//! - parse failures surface as an explicit `Result`

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// A parsed, totally ordered version
#[derive(Debug, Clone)]
pub struct ResolvedVersion {
    inner: semver::Version,
}

/// Error returned when a version string cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid version '{input}': {message}")]
pub struct VersionParseError {
    /// The text that failed to parse
    pub input: String,
    /// Parser diagnostic
    pub message: String,
}

impl ResolvedVersion {
    /// Parse a version such as `1.2.3`, `v1.2.3`, `=1.2.3-beta.1` or `1.2.3+build.5`
    pub fn parse(input: &str) -> Result<Self, VersionParseError> {
        let trimmed = input.trim();
        let text = trimmed
            .strip_prefix('=')
            .unwrap_or(trimmed)
            .trim_start();
        let text = text.strip_prefix('v').unwrap_or(text);

        semver::Version::parse(text)
            .map(|inner| Self { inner })
            .map_err(|e| VersionParseError {
                input: input.to_string(),
                message: e.to_string(),
            })
    }

    pub fn major(&self) -> u64 {
        self.inner.major
    }

    pub fn minor(&self) -> u64 {
        self.inner.minor
    }

    pub fn patch(&self) -> u64 {
        self.inner.patch
    }

    /// Classify the change from `self` to `other`
    pub fn difference(&self, other: &ResolvedVersion) -> DifferenceKind {
        DifferenceKind::between(self, other)
    }
}

impl Ord for ResolvedVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        // Build metadata does not participate in precedence
        self.inner
            .major
            .cmp(&other.inner.major)
            .then(self.inner.minor.cmp(&other.inner.minor))
            .then(self.inner.patch.cmp(&other.inner.patch))
            .then_with(|| self.inner.pre.cmp(&other.inner.pre))
    }
}

impl PartialOrd for ResolvedVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for ResolvedVersion {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ResolvedVersion {}

impl fmt::Display for ResolvedVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl Serialize for ResolvedVersion {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.inner)
    }
}

impl<'de> Deserialize<'de> for ResolvedVersion {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        ResolvedVersion::parse(&raw).map_err(serde::de::Error::custom)
    }
}

/// Semantic impact of moving between two versions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DifferenceKind {
    /// Major, minor and patch components are identical
    None,
    /// Only the patch component (or the pre-release tag) changed
    Patch,
    /// Minor component changed
    Minor,
    /// Major component changed (breaking)
    Major,
}

impl DifferenceKind {
    /// The first differing component, in major → minor → patch priority, decides the kind
    pub fn between(from: &ResolvedVersion, to: &ResolvedVersion) -> Self {
        if from.major() != to.major() {
            DifferenceKind::Major
        } else if from.minor() != to.minor() {
            DifferenceKind::Minor
        } else if from.patch() != to.patch() || from != to {
            DifferenceKind::Patch
        } else {
            DifferenceKind::None
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DifferenceKind::None => "none",
            DifferenceKind::Patch => "patch",
            DifferenceKind::Minor => "minor",
            DifferenceKind::Major => "major",
        }
    }
}

impl fmt::Display for DifferenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
