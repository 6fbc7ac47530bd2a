//! Declared dependency structures

use super::VersionConstraint;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A dependency as declared in the project manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeclaredDependency {
    /// Package name (unique within a project)
    pub name: String,
    /// Declared version constraint
    pub constraint: VersionConstraint,
    /// Whether the winning declaration came from devDependencies
    pub is_dev: bool,
}

impl DeclaredDependency {
    /// Creates a new dependency
    pub fn new(name: impl Into<String>, raw_constraint: &str, is_dev: bool) -> Self {
        Self {
            name: name.into(),
            constraint: VersionConstraint::parse(raw_constraint),
            is_dev,
        }
    }

    /// Creates a new production dependency
    pub fn production(name: impl Into<String>, raw_constraint: &str) -> Self {
        Self::new(name, raw_constraint, false)
    }

    /// Creates a new development dependency
    pub fn development(name: impl Into<String>, raw_constraint: &str) -> Self {
        Self::new(name, raw_constraint, true)
    }

    /// Returns the constraint as written in the manifest
    pub fn raw_constraint(&self) -> &str {
        &self.constraint.raw
    }
}

impl fmt::Display for DeclaredDependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dev_marker = if self.is_dev { " (dev)" } else { "" };
        write!(
            f,
            "{}@{}{}{}",
            self.name,
            self.constraint.kind.marker(),
            self.constraint.base,
            dev_marker
        )
    }
}
