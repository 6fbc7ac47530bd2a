//! Project manifest reading
//!
//! Locates `package.json` in a project directory and turns its dependency
//! sections into `DeclaredDependency` values.

mod package_json;

pub use package_json::{manifest_path, parse_file, PackageManifest};

use crate::error::ManifestError;
use std::path::Path;
use tracing::debug;

/// Read the manifest of the project rooted at `project_dir`
pub fn read_manifest(project_dir: &Path) -> Result<PackageManifest, ManifestError> {
    let path = manifest_path(project_dir);
    if !path.is_file() {
        return Err(ManifestError::not_found(project_dir));
    }

    debug!("reading {}", path.display());
    parse_file(&path)
}
