//! Version constraints as declared in package.json
//!
//! Handles:
//! - Caret: `^1.2.3` (newer minor or patch allowed)
//! - Tilde: `~1.2.3` (newer patch allowed)
//! - Exact: `1.2.3`, `=1.2.3`
//!
//! Anything else (ranges, tags, URLs) keeps its text as the base version and
//! fails later when it is resolved.

use super::version::{ResolvedVersion, VersionParseError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The range marker in front of a declared version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConstraintKind {
    /// `^` prefix
    Caret,
    /// `~` prefix
    Tilde,
    /// No prefix, or `=`
    Exact,
}

impl ConstraintKind {
    pub fn marker(&self) -> &'static str {
        match self {
            ConstraintKind::Caret => "^",
            ConstraintKind::Tilde => "~",
            ConstraintKind::Exact => "",
        }
    }
}

/// A declared constraint split into its marker and base version text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionConstraint {
    /// The constraint as written in the manifest
    pub raw: String,
    /// The range marker
    pub kind: ConstraintKind,
    /// The version text with the marker removed
    pub base: String,
}

impl VersionConstraint {
    /// Split a raw constraint into marker and base
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();

        let (kind, rest) = if let Some(rest) = trimmed.strip_prefix('^') {
            (ConstraintKind::Caret, rest)
        } else if let Some(rest) = trimmed.strip_prefix('~') {
            (ConstraintKind::Tilde, rest)
        } else if let Some(rest) = trimmed.strip_prefix('=') {
            (ConstraintKind::Exact, rest)
        } else {
            (ConstraintKind::Exact, trimmed)
        };

        Self {
            raw: raw.to_string(),
            kind,
            base: rest.trim().to_string(),
        }
    }

    /// Resolve the base version into a comparable value
    pub fn resolve(&self) -> Result<ResolvedVersion, VersionParseError> {
        ResolvedVersion::parse(&self.base)
    }
}

impl fmt::Display for VersionConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}
