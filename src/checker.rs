//! Dependency report builder
//!
//! Coordinates one check pass: ignore filtering → registry lookup → policy
//! evaluation → report assembly.
//!
//! Lookups run concurrently (bounded by a semaphore), but each one owns the
//! slot at its declaration index and the report is assembled from the slots
//! in order afterwards, so completion order never leaks into the output.

use crate::domain::{DeclaredDependency, Policy, Report};
use crate::error::RegistryError;
use crate::evaluator::{evaluate, Evaluation};
use crate::progress::LookupProgress;
use crate::registry::{LatestVersionInfo, RegistryLookup};
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinHandle;
use tracing::debug;

/// Default number of registry lookups in flight
pub const DEFAULT_CONCURRENCY: usize = 8;

type LookupResult = Result<LatestVersionInfo, RegistryError>;

/// Per-dependency slot, indexed by declaration order
enum Slot {
    Ignored,
    Pending(JoinHandle<LookupResult>),
}

/// Builds a `Report` for a set of declared dependencies
pub struct ReportBuilder {
    /// Registry lookup capability
    registry: Arc<dyn RegistryLookup>,
    /// Maximum concurrent lookups
    concurrency: usize,
    /// Whether to draw a progress bar on stderr
    show_progress: bool,
}

impl ReportBuilder {
    /// Create a builder around a registry lookup
    pub fn new(registry: Arc<dyn RegistryLookup>) -> Self {
        Self {
            registry,
            concurrency: DEFAULT_CONCURRENCY,
            show_progress: false,
        }
    }

    /// Set the maximum number of concurrent lookups (at least 1)
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    /// Enable or disable the progress bar
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Check every dependency and aggregate the outcomes
    pub async fn build(&self, dependencies: &[DeclaredDependency], policy: &Policy) -> Report {
        let semaphore = Arc::new(Semaphore::new(self.concurrency));

        let lookups = dependencies
            .iter()
            .filter(|dep| !policy.is_ignored(&dep.name))
            .count();
        let progress = LookupProgress::start(self.show_progress, lookups);

        // Step 1: fan out lookups for everything not ignored
        let slots: Vec<Slot> = dependencies
            .iter()
            .map(|dep| {
                if policy.is_ignored(&dep.name) {
                    debug!("ignoring {}", dep.name);
                    Slot::Ignored
                } else {
                    Slot::Pending(self.spawn_lookup(&dep.name, &semaphore, &progress))
                }
            })
            .collect();

        // Step 2: merge slots in declaration order
        let mut report = Report::new();
        for (dep, slot) in dependencies.iter().zip(slots) {
            match slot {
                Slot::Ignored => report.add_ignored(&dep.name),
                Slot::Pending(handle) => {
                    let lookup = match handle.await {
                        Ok(result) => result,
                        Err(e) => {
                            debug!("lookup task for {} failed: {}", dep.name, e);
                            Err(RegistryError::connection("lookup task failed"))
                        }
                    };
                    record(&mut report, dep, lookup, policy);
                }
            }
        }
        progress.finish();

        report
    }

    fn spawn_lookup(
        &self,
        name: &str,
        semaphore: &Arc<Semaphore>,
        progress: &LookupProgress,
    ) -> JoinHandle<LookupResult> {
        let registry = Arc::clone(&self.registry);
        let semaphore = Arc::clone(semaphore);
        let progress = progress.clone();
        let name = name.to_string();

        tokio::spawn(async move {
            let _permit = semaphore
                .acquire_owned()
                .await
                .map_err(|_| RegistryError::connection("lookup queue closed"))?;

            progress.lookup_started(&name);
            debug!("looking up {} in {}", name, registry.registry_name());
            let result = registry.lookup(&name).await;
            progress.lookup_finished();
            result
        })
    }
}

/// Fold one dependency's lookup outcome into the report
fn record(report: &mut Report, dep: &DeclaredDependency, lookup: LookupResult, policy: &Policy) {
    let info = match lookup {
        Ok(info) => info,
        Err(e) => {
            debug!("lookup failed for {}: {}", dep.name, e);
            report.add_error(format!("Failed to check {}: {}", dep.name, e));
            return;
        }
    };

    match evaluate(
        &dep.name,
        dep.raw_constraint(),
        info.latest.as_deref(),
        policy,
    ) {
        Ok(Evaluation::UpToDate) => debug!("{} is up to date", dep),
        Ok(Evaluation::Upgrade(candidate)) if candidate.eligible => {
            debug!("{}", candidate);
            report.add_update(candidate.with_published_at(info.published_at));
        }
        Ok(Evaluation::Upgrade(candidate)) => {
            debug!("{} (major upgrades not enabled)", candidate);
        }
        Err(e) => {
            debug!("{}: {}", dep, e);
            report.add_error(e.to_string());
        }
    }
}
