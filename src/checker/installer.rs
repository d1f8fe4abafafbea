//! Remediation of failed requirements.
//!
//! Installing is a side-effecting external action, modeled as a capability
//! so tests can substitute a recording double. Entries are remediated
//! sequentially — the installed-package registry must not be mutated
//! concurrently — and a failed install is reported, never retried.
//! Callers re-snapshot the environment and re-check afterwards instead of
//! assuming success.

use crate::error::{ReqcheckError, Result};
use crate::manifest::RequirementEntry;
use std::process::Command;

/// Capability to install one requirement into the environment.
pub trait PackageInstaller {
    /// Install the package the entry describes, at a satisfying version.
    fn install(&self, entry: &RequirementEntry) -> Result<()>;
}

/// Installs via `<python> -m pip install <name>[extras]<constraint>`.
///
/// pip's own output is left on the terminal, matching what a user would
/// see running the install by hand.
#[derive(Debug, Clone)]
pub struct PipInstaller {
    python: String,
}

impl PipInstaller {
    /// Create an installer driving the given interpreter.
    pub fn new(python: &str) -> Self {
        Self {
            python: python.to_string(),
        }
    }
}

impl PackageInstaller for PipInstaller {
    fn install(&self, entry: &RequirementEntry) -> Result<()> {
        let spec = entry.display();
        tracing::info!(%spec, "installing");

        let status = Command::new(&self.python)
            .args(["-m", "pip", "install", &spec])
            .status()
            .map_err(|e| ReqcheckError::InstallFailed {
                requirement: spec.clone(),
                message: e.to_string(),
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(ReqcheckError::InstallFailed {
                requirement: spec,
                message: match status.code() {
                    Some(code) => format!("pip exited with code {}", code),
                    None => "pip terminated by signal".to_string(),
                },
            })
        }
    }
}

/// Outcome of one remediation attempt.
#[derive(Debug, Clone)]
pub struct RemediationOutcome {
    /// The requirement display string that was installed.
    pub requirement: String,
    /// Whether the install invocation succeeded.
    pub success: bool,
    /// Failure detail, when unsuccessful.
    pub message: Option<String>,
}

/// Install every given entry, one at a time, in order.
///
/// Failures are collected rather than aborting the pass; re-running the
/// whole check afterwards is safe whether or not any install succeeded.
pub fn remediate(
    entries: &[&RequirementEntry],
    installer: &dyn PackageInstaller,
) -> Vec<RemediationOutcome> {
    entries
        .iter()
        .map(|entry| match installer.install(entry) {
            Ok(()) => RemediationOutcome {
                requirement: entry.display(),
                success: true,
                message: None,
            },
            Err(e) => {
                tracing::warn!(requirement = %entry.display(), error = %e, "install failed");
                RemediationOutcome {
                    requirement: entry.display(),
                    success: false,
                    message: Some(e.to_string()),
                }
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::parser::parse_str;
    use std::cell::RefCell;

    /// Records install order; fails for configured names.
    struct RecordingInstaller {
        installed: RefCell<Vec<String>>,
        fail_for: Vec<String>,
    }

    impl RecordingInstaller {
        fn new(fail_for: &[&str]) -> Self {
            Self {
                installed: RefCell::new(Vec::new()),
                fail_for: fail_for.iter().map(|s| s.to_string()).collect(),
            }
        }
    }

    impl PackageInstaller for RecordingInstaller {
        fn install(&self, entry: &RequirementEntry) -> Result<()> {
            self.installed.borrow_mut().push(entry.display());
            if self.fail_for.contains(&entry.name) {
                return Err(ReqcheckError::InstallFailed {
                    requirement: entry.display(),
                    message: "simulated failure".to_string(),
                });
            }
            Ok(())
        }
    }

    fn entries(manifest: &str) -> Vec<RequirementEntry> {
        parse_str(manifest).entries
    }

    #[test]
    fn installs_sequentially_in_manifest_order() {
        let parsed = entries("zlib-state\nattrs>=23.0\nmarkupsafe");
        let refs: Vec<&RequirementEntry> = parsed.iter().collect();
        let installer = RecordingInstaller::new(&[]);

        let outcomes = remediate(&refs, &installer);

        assert_eq!(
            *installer.installed.borrow(),
            vec!["zlib-state", "attrs>=23.0", "markupsafe"]
        );
        assert!(outcomes.iter().all(|o| o.success));
    }

    #[test]
    fn failure_does_not_abort_the_pass() {
        let parsed = entries("a\nb\nc");
        let refs: Vec<&RequirementEntry> = parsed.iter().collect();
        let installer = RecordingInstaller::new(&["b"]);

        let outcomes = remediate(&refs, &installer);

        assert_eq!(installer.installed.borrow().len(), 3);
        assert!(outcomes[0].success);
        assert!(!outcomes[1].success);
        assert!(outcomes[1].message.as_deref().unwrap().contains("simulated"));
        assert!(outcomes[2].success);
    }

    #[test]
    fn install_spec_includes_extras_and_constraint() {
        let parsed = entries("uvicorn[standard]==0.23.2");
        let refs: Vec<&RequirementEntry> = parsed.iter().collect();
        let installer = RecordingInstaller::new(&[]);

        remediate(&refs, &installer);

        assert_eq!(
            *installer.installed.borrow(),
            vec!["uvicorn[standard]==0.23.2"]
        );
    }

    #[test]
    fn failures_are_not_retried() {
        let parsed = entries("flaky");
        let refs: Vec<&RequirementEntry> = parsed.iter().collect();
        let installer = RecordingInstaller::new(&["flaky"]);

        let outcomes = remediate(&refs, &installer);

        assert_eq!(installer.installed.borrow().len(), 1);
        assert_eq!(outcomes.len(), 1);
        assert!(!outcomes[0].success);
    }
}
