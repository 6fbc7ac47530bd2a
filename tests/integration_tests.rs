//! Integration tests for depdoctor
//!
//! These tests verify:
//! - Manifest reading from a project directory
//! - The npm adapter against a local HTTP endpoint
//! - Full check runs through the orchestrator

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Test fixture directory creation helper
fn create_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

fn write_package_json(dir: &Path, content: &str) {
    fs::write(dir.join("package.json"), content).unwrap();
}

/// Serve canned responses keyed by request path, one connection at a time.
/// Unknown paths answer 404. Returns the base URL.
async fn serve(routes: HashMap<&'static str, (u16, &'static str)>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        loop {
            let Ok((mut socket, _)) = listener.accept().await else {
                return;
            };

            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                match socket.read(&mut buf).await {
                    Ok(0) | Err(_) => break,
                    Ok(n) => request.extend_from_slice(&buf[..n]),
                }
            }

            let request = String::from_utf8_lossy(&request);
            let path = request.split_whitespace().nth(1).unwrap_or("/").to_string();
            let (status, body) = routes.get(path.as_str()).copied().unwrap_or((404, "{}"));
            let reason = if status == 200 { "OK" } else { "Error" };

            let response = format!(
                "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                reason,
                body.len(),
                body
            );
            let _ = socket.write_all(response.as_bytes()).await;
            let _ = socket.shutdown().await;
        }
    });

    format!("http://{}", addr)
}

mod manifest_reading {
    use super::*;
    use depdoctor::error::ManifestError;
    use depdoctor::manifest::read_manifest;

    /// Dependencies and devDependencies merge in declaration order
    #[test]
    fn test_read_merged_dependencies() {
        let temp_dir = create_test_dir();
        write_package_json(
            temp_dir.path(),
            r#"{
  "name": "test-project",
  "version": "1.0.0",
  "dependencies": {
    "lodash": "^4.17.21",
    "express": "~4.18.2"
  },
  "devDependencies": {
    "typescript": "~5.0.0",
    "lodash": "4.17.21"
  }
}"#,
        );

        let manifest = read_manifest(temp_dir.path()).unwrap();
        assert_eq!(manifest.name.as_deref(), Some("test-project"));

        let deps = manifest.declared_dependencies();
        let names: Vec<&str> = deps.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["lodash", "express", "typescript"]);
        assert_eq!(deps[0].raw_constraint(), "4.17.21");
        assert!(deps[0].is_dev);
    }

    #[test]
    fn test_missing_manifest_is_not_found() {
        let temp_dir = create_test_dir();
        let err = read_manifest(temp_dir.path()).unwrap_err();
        assert!(matches!(err, ManifestError::NotFound { .. }));
    }

    #[test]
    fn test_nonexistent_directory() {
        let err = read_manifest(Path::new("/nonexistent/path/for/depdoctor")).unwrap_err();
        assert!(matches!(err, ManifestError::NotFound { .. }));
    }
}

mod npm_registry {
    use super::*;
    use depdoctor::error::RegistryError;
    use depdoctor::registry::{HttpClient, NpmRegistry, RegistryLookup};

    const LODASH: &str = r#"{
        "name": "lodash",
        "dist-tags": { "latest": "4.17.21", "next": "5.0.0-beta.1" },
        "time": {
            "created": "2012-04-23T16:37:11.912Z",
            "4.17.21": "2021-02-20T15:42:16.891Z"
        }
    }"#;

    fn registry(base_url: &str) -> NpmRegistry {
        NpmRegistry::with_base_url(HttpClient::new().unwrap().with_max_retries(0), base_url)
    }

    #[tokio::test]
    async fn test_lookup_latest_tag() {
        let base_url = serve(HashMap::from([("/lodash", (200, LODASH))])).await;

        let info = registry(&base_url).lookup("lodash").await.unwrap();
        assert_eq!(info.latest.as_deref(), Some("4.17.21"));
        assert_eq!(
            info.published_at.unwrap().to_rfc3339(),
            "2021-02-20T15:42:16.891+00:00"
        );
    }

    #[tokio::test]
    async fn test_lookup_without_dist_tags() {
        let base_url = serve(HashMap::from([("/bare", (200, r#"{"name":"bare"}"#))])).await;

        let info = registry(&base_url).lookup("bare").await.unwrap();
        assert!(info.latest.is_none());
        assert!(info.published_at.is_none());
    }

    #[tokio::test]
    async fn test_lookup_not_found() {
        let base_url = serve(HashMap::new()).await;

        let err = registry(&base_url).lookup("ghost").await.unwrap_err();
        assert!(matches!(err, RegistryError::PackageNotFound { .. }));
    }

    #[tokio::test]
    async fn test_lookup_server_error() {
        let base_url = serve(HashMap::from([("/flaky", (503, "{}"))])).await;

        let err = registry(&base_url).lookup("flaky").await.unwrap_err();
        assert_eq!(err.to_string(), "npm responded with HTTP 503 for 'flaky'");
    }

    #[tokio::test]
    async fn test_lookup_invalid_body() {
        let base_url = serve(HashMap::from([("/junk", (200, "not json"))])).await;

        let err = registry(&base_url).lookup("junk").await.unwrap_err();
        assert!(matches!(err, RegistryError::InvalidResponse { .. }));
    }
}

mod full_run {
    use super::*;
    use clap::Parser;
    use depdoctor::cli::CliArgs;
    use depdoctor::domain::DifferenceKind;
    use depdoctor::orchestrator::Orchestrator;
    use depdoctor::registry::{HttpClient, NpmRegistry};

    fn orchestrator(base_url: &str, extra: &[&str]) -> Orchestrator {
        let args = CliArgs::parse_from(
            ["depdoctor", "--quiet"]
                .into_iter()
                .chain(extra.iter().copied()),
        );
        let registry =
            NpmRegistry::with_base_url(HttpClient::new().unwrap().with_max_retries(0), base_url);
        Orchestrator::with_registry(args, Arc::new(registry))
    }

    fn routes() -> HashMap<&'static str, (u16, &'static str)> {
        HashMap::from([
            ("/react", (200, r#"{"dist-tags":{"latest":"18.2.0"}}"#)),
            ("/lodash", (200, r#"{"dist-tags":{"latest":"4.17.21"}}"#)),
            ("/express", (200, r#"{"dist-tags":{"latest":"4.18.2"}}"#)),
            ("/untagged", (200, r#"{"dist-tags":{}}"#)),
        ])
    }

    const PACKAGE_JSON: &str = r#"{
        "dependencies": {
            "react": "^17.0.2",
            "lodash": "^4.17.20",
            "express": "~4.18.2"
        },
        "devDependencies": {
            "untagged": "1.0.0",
            "missing": "1.0.0"
        }
    }"#;

    #[tokio::test]
    async fn test_default_policy() {
        let base_url = serve(routes()).await;
        let temp_dir = create_test_dir();
        write_package_json(temp_dir.path(), PACKAGE_JSON);

        let report = orchestrator(&base_url, &[])
            .run(temp_dir.path())
            .await
            .unwrap();

        assert_eq!(report.updates.len(), 1);
        assert_eq!(report.updates[0].name, "lodash");
        assert_eq!(report.updates[0].difference, DifferenceKind::Patch);
        assert!(report.ignored.is_empty());
        assert_eq!(
            report.errors,
            vec![
                "No latest version found for untagged".to_string(),
                "Failed to check missing: package 'missing' not found in npm registry".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn test_major_and_ignore() {
        let base_url = serve(routes()).await;
        let temp_dir = create_test_dir();
        write_package_json(temp_dir.path(), PACKAGE_JSON);

        let report = orchestrator(&base_url, &["--major", "--ignore", "lodash,missing"])
            .run(temp_dir.path())
            .await
            .unwrap();

        let names: Vec<&str> = report.updates.iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, vec!["react"]);
        assert_eq!(report.updates[0].difference, DifferenceKind::Major);
        assert_eq!(report.ignored, vec!["lodash", "missing"]);
        assert_eq!(report.errors, vec!["No latest version found for untagged"]);
    }

    #[tokio::test]
    async fn test_json_shape() {
        let base_url = serve(routes()).await;
        let temp_dir = create_test_dir();
        write_package_json(
            temp_dir.path(),
            r#"{"dependencies": {"lodash": "^4.17.20"}}"#,
        );

        let report = orchestrator(&base_url, &[])
            .run(temp_dir.path())
            .await
            .unwrap();
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "updates": [{
                    "name": "lodash",
                    "current": "4.17.20",
                    "latest": "4.17.21",
                    "type": "patch",
                    "canUpdate": true
                }],
                "ignored": [],
                "errors": []
            })
        );
    }
}
