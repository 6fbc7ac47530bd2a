//! User-supplied upgrade policy

use std::collections::HashSet;

/// Policy applied to every dependency in one run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Policy {
    /// Permit upgrades that change the major component
    pub allow_major: bool,
    /// Names that are never looked up or evaluated
    pub ignore: HashSet<String>,
}

impl Policy {
    /// Create a policy that blocks major upgrades and ignores nothing
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether major upgrades are permitted
    pub fn with_allow_major(mut self, allow_major: bool) -> Self {
        self.allow_major = allow_major;
        self
    }

    /// Set the names to ignore
    pub fn with_ignore<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignore = names.into_iter().map(Into::into).collect();
        self
    }

    /// Check if a package is ignored
    pub fn is_ignored(&self, name: &str) -> bool {
        self.ignore.contains(name)
    }
}
