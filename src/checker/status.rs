//! Check result types and the exit-signal policy.

use serde::Serialize;

/// Outcome of checking a single requirement entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CheckStatus {
    /// Installed and the constraint (if any) is satisfied.
    Ok,
    /// Not present in the package index.
    Missing,
    /// Installed, but the installed version fails the constraint.
    VersionMismatch,
}

impl CheckStatus {
    /// Whether the requirement is fully satisfied.
    pub fn is_ok(self) -> bool {
        matches!(self, CheckStatus::Ok)
    }

    /// Stable textual label, as used in reports.
    pub fn label(self) -> &'static str {
        match self {
            CheckStatus::Ok => "ok",
            CheckStatus::Missing => "missing",
            CheckStatus::VersionMismatch => "version-mismatch",
        }
    }
}

/// The result of checking one manifest entry.
///
/// `installed_version` is present whenever the package was found,
/// regardless of whether its version satisfied the constraint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckResult {
    /// Manifest line number of the originating entry.
    pub line: usize,
    /// Full requirement display string (`name[extras]constraint`).
    pub requirement: String,
    /// Package name as written.
    pub name: String,
    /// Constraint expression, if the entry had one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub constraint: Option<String>,
    /// Check outcome.
    pub status: CheckStatus,
    /// Version found in the index, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub installed_version: Option<String>,
}

/// Which statuses fail a run.
///
/// The core check only states facts; turning them into an exit signal is
/// policy, configured from the CLI.
#[derive(Debug, Clone, Copy)]
pub struct FailurePolicy {
    /// `missing` entries fail the run.
    pub fail_missing: bool,
    /// `version-mismatch` entries fail the run.
    pub fail_mismatch: bool,
}

impl Default for FailurePolicy {
    fn default() -> Self {
        Self {
            fail_missing: true,
            fail_mismatch: true,
        }
    }
}

impl FailurePolicy {
    /// Whether a result set passes under this policy.
    pub fn passes(&self, results: &[CheckResult]) -> bool {
        results.iter().all(|r| match r.status {
            CheckStatus::Ok => true,
            CheckStatus::Missing => !self.fail_missing,
            CheckStatus::VersionMismatch => !self.fail_mismatch,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(status: CheckStatus) -> CheckResult {
        CheckResult {
            line: 1,
            requirement: "demo".to_string(),
            name: "demo".to_string(),
            constraint: None,
            status,
            installed_version: None,
        }
    }

    #[test]
    fn only_ok_is_ok() {
        assert!(CheckStatus::Ok.is_ok());
        assert!(!CheckStatus::Missing.is_ok());
        assert!(!CheckStatus::VersionMismatch.is_ok());
    }

    #[test]
    fn labels_are_stable() {
        assert_eq!(CheckStatus::Ok.label(), "ok");
        assert_eq!(CheckStatus::Missing.label(), "missing");
        assert_eq!(CheckStatus::VersionMismatch.label(), "version-mismatch");
    }

    #[test]
    fn status_serializes_as_kebab_case() {
        let json = serde_json::to_string(&CheckStatus::VersionMismatch).unwrap();
        assert_eq!(json, "\"version-mismatch\"");
    }

    #[test]
    fn default_policy_fails_both_statuses() {
        let policy = FailurePolicy::default();
        assert!(policy.passes(&[result(CheckStatus::Ok)]));
        assert!(!policy.passes(&[result(CheckStatus::Missing)]));
        assert!(!policy.passes(&[result(CheckStatus::VersionMismatch)]));
    }

    #[test]
    fn allow_missing_downgrades_missing_only() {
        let policy = FailurePolicy {
            fail_missing: false,
            fail_mismatch: true,
        };
        assert!(policy.passes(&[result(CheckStatus::Missing)]));
        assert!(!policy.passes(&[result(CheckStatus::VersionMismatch)]));
    }

    #[test]
    fn allow_mismatch_downgrades_mismatch_only() {
        let policy = FailurePolicy {
            fail_missing: true,
            fail_mismatch: false,
        };
        assert!(policy.passes(&[result(CheckStatus::VersionMismatch)]));
        assert!(!policy.passes(&[result(CheckStatus::Missing)]));
    }

    #[test]
    fn empty_result_set_passes() {
        assert!(FailurePolicy::default().passes(&[]));
    }

    #[test]
    fn result_omits_absent_fields_in_json() {
        let json = serde_json::to_value(result(CheckStatus::Missing)).unwrap();
        assert!(json.get("installed_version").is_none());
        assert!(json.get("constraint").is_none());
        assert_eq!(json["status"], "missing");
    }
}
