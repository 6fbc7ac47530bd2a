//! Core domain models for depdoctor
//!
//! This module contains the fundamental types used throughout the application:
//! - Declared dependencies and their version constraints
//! - Comparable versions and upgrade classification
//! - Upgrade candidates, the run policy and the final report

mod candidate;
mod constraint;
mod dependency;
mod policy;
mod report;
mod version;

pub use candidate::UpgradeCandidate;
pub use constraint::{ConstraintKind, VersionConstraint};
pub use dependency::DeclaredDependency;
pub use policy::Policy;
pub use report::Report;
pub use version::{DifferenceKind, ResolvedVersion, VersionParseError};
