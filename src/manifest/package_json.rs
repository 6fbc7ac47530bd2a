//! package.json parsing
//!
//! Handles:
//! - dependencies
//! - devDependencies
//!
//! The two sections are merged with later-wins semantics: a name declared in
//! both keeps its position from `dependencies` but takes the constraint from
//! `devDependencies`.

use crate::domain::DeclaredDependency;
use crate::error::ManifestError;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use tracing::warn;

/// A parsed package.json
#[derive(Debug, Clone, Default)]
pub struct PackageManifest {
    /// Package name, if declared
    pub name: Option<String>,
    dependencies: Map<String, Value>,
    dev_dependencies: Map<String, Value>,
}

impl PackageManifest {
    /// Parse manifest content; `path` is only used for diagnostics
    pub fn parse(content: &str, path: &Path) -> Result<Self, ManifestError> {
        let json: Value = serde_json::from_str(content)
            .map_err(|e| ManifestError::json_parse_error(path, e.to_string()))?;

        let Value::Object(root) = json else {
            return Err(ManifestError::json_parse_error(
                path,
                "top-level value is not an object",
            ));
        };

        Ok(Self {
            name: root.get("name").and_then(Value::as_str).map(str::to_string),
            dependencies: section(&root, "dependencies"),
            dev_dependencies: section(&root, "devDependencies"),
        })
    }

    /// Returns the merged dependency list in declaration order
    pub fn declared_dependencies(&self) -> Vec<DeclaredDependency> {
        let mut merged: Map<String, Value> = self.dependencies.clone();
        let mut from_dev = Vec::new();

        for (name, value) in &self.dev_dependencies {
            // Map::insert on an existing key keeps its position under preserve_order
            merged.insert(name.clone(), value.clone());
            from_dev.push(name.as_str());
        }

        merged
            .iter()
            .map(|(name, value)| {
                DeclaredDependency::new(
                    name.clone(),
                    &constraint_text(value),
                    from_dev.contains(&name.as_str()),
                )
            })
            .collect()
    }

    /// Returns true if neither section declares anything
    pub fn is_empty(&self) -> bool {
        self.dependencies.is_empty() && self.dev_dependencies.is_empty()
    }
}

fn section(root: &Map<String, Value>, key: &str) -> Map<String, Value> {
    match root.get(key) {
        Some(Value::Object(deps)) => deps.clone(),
        Some(Value::Null) | None => Map::new(),
        Some(other) => {
            warn!("ignoring \"{}\": expected an object, found {}", key, other);
            Map::new()
        }
    }
}

/// String values are used as-is; anything else keeps its JSON text
fn constraint_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Read and parse `package.json` from a file path
pub fn parse_file(path: &Path) -> Result<PackageManifest, ManifestError> {
    let content = std::fs::read_to_string(path).map_err(|e| ManifestError::read_error(path, e))?;
    PackageManifest::parse(&content, path)
}

/// Location of package.json inside a project directory
pub fn manifest_path(project_dir: &Path) -> PathBuf {
    project_dir.join("package.json")
}
