//! Package metadata lookup.
//!
//! Version resolution is the one unavoidable external dependency of a
//! check run, so it is modeled as a capability: production code snapshots
//! the interpreter's installed packages once per run via pip, tests inject
//! a [`FixedIndex`] with a deterministic name→version mapping.

use crate::error::{ReqcheckError, Result};
use crate::manifest::normalize_name;
use serde::Deserialize;
use std::collections::HashMap;
use std::process::Command;

/// Lookup of installed package versions.
///
/// Name matching is normalization-insensitive: `Foo_Bar.baz` and
/// `foo-bar-baz` address the same package.
pub trait PackageIndex {
    /// The installed version for `name`, or `None` if not installed.
    fn installed_version(&self, name: &str) -> Option<String>;
}

#[derive(Debug, Deserialize)]
struct PipListEntry {
    name: String,
    version: String,
}

/// Snapshot of a Python environment, taken via `pip list --format=json`.
///
/// One subprocess per run; the snapshot is immutable for the duration of
/// the check pass. Results are never carried across runs — remediation
/// takes a fresh snapshot before re-checking.
#[derive(Debug, Clone)]
pub struct PipIndex {
    packages: HashMap<String, String>,
}

impl PipIndex {
    /// Query `python`'s environment for its installed packages.
    pub fn snapshot(python: &str) -> Result<Self> {
        let command = format!("{} -m pip list --format=json", python);
        tracing::debug!(%command, "querying installed packages");

        let output = Command::new(python)
            .args(["-m", "pip", "list", "--format=json", "--disable-pip-version-check"])
            .output()
            .map_err(|e| ReqcheckError::EnvironmentQuery {
                command: command.clone(),
                message: e.to_string(),
            })?;

        if !output.status.success() {
            return Err(ReqcheckError::EnvironmentQuery {
                command,
                message: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let entries: Vec<PipListEntry> = serde_json::from_slice(&output.stdout)
            .map_err(|e| ReqcheckError::EnvironmentQuery {
                command,
                message: format!("unparsable pip output: {}", e),
            })?;

        tracing::debug!(count = entries.len(), "environment snapshot complete");
        Ok(Self {
            packages: entries
                .into_iter()
                .map(|p| (normalize_name(&p.name), p.version))
                .collect(),
        })
    }

    /// Number of packages in the snapshot.
    pub fn len(&self) -> usize {
        self.packages.len()
    }

    /// Whether the snapshot is empty.
    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }
}

impl PackageIndex for PipIndex {
    fn installed_version(&self, name: &str) -> Option<String> {
        self.packages.get(&normalize_name(name)).cloned()
    }
}

/// Fixed name→version mapping for tests and dry runs.
#[derive(Debug, Clone, Default)]
pub struct FixedIndex {
    packages: HashMap<String, String>,
}

impl FixedIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a package, returning self for chaining.
    pub fn with(mut self, name: &str, version: &str) -> Self {
        self.packages
            .insert(normalize_name(name), version.to_string());
        self
    }
}

impl PackageIndex for FixedIndex {
    fn installed_version(&self, name: &str) -> Option<String> {
        self.packages.get(&normalize_name(name)).cloned()
    }
}
