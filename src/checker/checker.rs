//! Resolution and evaluation over a parsed manifest.
//!
//! Each entry is resolved and evaluated independently; manifest order is
//! preserved in the output for deterministic reporting. Pure aggregation:
//! no caching across runs, no shared mutable state.

use crate::checker::resolver::PackageIndex;
use crate::checker::status::{CheckResult, CheckStatus};
use crate::manifest::RequirementEntry;

/// Checks manifest entries against a package index.
pub struct ManifestChecker<'a> {
    index: &'a dyn PackageIndex,
}

impl<'a> ManifestChecker<'a> {
    /// Create a checker over the given index.
    pub fn new(index: &'a dyn PackageIndex) -> Self {
        Self { index }
    }

    /// Check every entry, in manifest order.
    pub fn check_all(&self, entries: &[RequirementEntry]) -> Vec<CheckResult> {
        entries.iter().map(|e| self.check_one(e)).collect()
    }

    /// Check a single entry.
    ///
    /// An absent constraint is always satisfied; absence of the package
    /// itself is still `missing`, not a satisfied constraint.
    pub fn check_one(&self, entry: &RequirementEntry) -> CheckResult {
        let installed = self.index.installed_version(&entry.name);

        let status = match &installed {
            None => CheckStatus::Missing,
            Some(version) => match &entry.constraint {
                Some(constraint) if !constraint.satisfied_by(version) => {
                    CheckStatus::VersionMismatch
                }
                _ => CheckStatus::Ok,
            },
        };

        CheckResult {
            line: entry.line_no,
            requirement: entry.display(),
            name: entry.name.clone(),
            constraint: entry.constraint.as_ref().map(|c| c.to_string()),
            status,
            installed_version: installed,
        }
    }
}
