//! npm Registry adapter
//!
//! Fetches the `latest` dist-tag of a package from the npm registry.
//! API endpoint: https://registry.npmjs.org/{package}

use crate::error::RegistryError;
use crate::registry::{HttpClient, LatestVersionInfo, RegistryLookup};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;

/// npm registry base URL
const NPM_REGISTRY_URL: &str = "https://registry.npmjs.org";

/// npm Registry adapter
pub struct NpmRegistry {
    client: HttpClient,
    base_url: String,
}

/// npm package metadata response (only the fields we read)
#[derive(Debug, Deserialize)]
struct NpmPackageResponse {
    /// Distribution tags such as `latest` and `next`
    #[serde(rename = "dist-tags", default)]
    dist_tags: HashMap<String, String>,
    /// Publish time per version (unpublished packages put an object here)
    #[serde(default)]
    time: HashMap<String, Value>,
}

impl NpmPackageResponse {
    fn into_latest(self) -> LatestVersionInfo {
        let latest = self.dist_tags.get("latest").cloned();
        let published_at = latest
            .as_ref()
            .and_then(|version| self.time.get(version))
            .and_then(Value::as_str)
            .and_then(|time| time.parse::<DateTime<Utc>>().ok());

        LatestVersionInfo {
            latest,
            published_at,
        }
    }
}

impl NpmRegistry {
    /// Create a new npm adapter against the public registry
    pub fn new(client: HttpClient) -> Self {
        Self::with_base_url(client, NPM_REGISTRY_URL)
    }

    /// Create an adapter against another npm-compatible endpoint
    pub fn with_base_url(client: HttpClient, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Build the URL for a package
    fn build_url(&self, package: &str) -> String {
        format!("{}/{}", self.base_url, package)
    }
}

#[async_trait]
impl RegistryLookup for NpmRegistry {
    fn registry_name(&self) -> &'static str {
        "npm"
    }

    async fn lookup(&self, package: &str) -> Result<LatestVersionInfo, RegistryError> {
        let url = self.build_url(package);
        let response: NpmPackageResponse = self
            .client
            .get_json(&url, package, self.registry_name())
            .await?;

        Ok(response.into_latest())
    }
}
