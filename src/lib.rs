//! depdoctor - npm dependency update checker library
//!
//! This library provides the core functionality for checking dependencies:
//! - Reading declared dependencies from package.json
//! - Looking up the latest published versions on the npm registry
//! - Deciding which upgrades are permitted by the run policy
//! - Rendering the report and applying upgrades with the package manager

pub mod checker;
pub mod cli;
pub mod domain;
pub mod error;
pub mod evaluator;
pub mod manifest;
pub mod orchestrator;
pub mod output;
pub mod package_manager;
pub mod progress;
pub mod registry;
