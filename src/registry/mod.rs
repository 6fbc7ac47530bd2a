//! Registry adapters for looking up the latest published version
//!
//! This module provides:
//! - The `RegistryLookup` capability consumed by the report builder
//! - HTTP client shared foundation with retry logic
//! - npm Registry adapter

mod client;
mod npm;

pub use client::HttpClient;
pub use npm::NpmRegistry;

use crate::error::RegistryError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// What the registry reports as the newest release of a package
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LatestVersionInfo {
    /// The `latest` tag, if the registry has one
    pub latest: Option<String>,
    /// When the latest version was published
    pub published_at: Option<DateTime<Utc>>,
}

impl LatestVersionInfo {
    /// Info carrying only a latest tag
    pub fn tagged(latest: impl Into<String>) -> Self {
        Self {
            latest: Some(latest.into()),
            published_at: None,
        }
    }

    /// Info for a package whose registry entry has no latest tag
    pub fn untagged() -> Self {
        Self::default()
    }
}

/// Capability to look up the latest version of a package
#[async_trait]
pub trait RegistryLookup: Send + Sync {
    /// Get the registry name
    fn registry_name(&self) -> &'static str;

    /// Fetch the latest version info for a package
    async fn lookup(&self, package: &str) -> Result<LatestVersionInfo, RegistryError>;
}
