//! The `check` command: parse, resolve, evaluate, report.

use crate::checker::{
    remediate, FailurePolicy, ManifestChecker, PipIndex, PipInstaller,
};
use crate::checker::status::CheckResult;
use crate::cli::args::{CheckArgs, GlobalOpts};
use crate::cli::commands::dispatcher::{Command, CommandResult};
use crate::error::Result;
use crate::manifest::{parser, RequirementEntry};
use crate::report::{CheckReport, HumanFormatter, JsonFormatter, ReportFormatter};
use crate::ui::{ProgressSpinner, ReqTheme, StatusKind};

/// Check the environment against the manifest.
pub struct CheckCommand {
    globals: GlobalOpts,
    args: CheckArgs,
}

impl CheckCommand {
    /// Create the command.
    pub fn new(globals: GlobalOpts, args: CheckArgs) -> Self {
        Self { globals, args }
    }

    fn theme(&self) -> ReqTheme {
        if console::colors_enabled() {
            ReqTheme::new()
        } else {
            ReqTheme::plain()
        }
    }

    fn confirm_install(&self, count: usize) -> Result<bool> {
        if self.args.yes || !console::user_attended() {
            return Ok(true);
        }
        let proceed = dialoguer::Confirm::new()
            .with_prompt(format!(
                "Install {} missing or mismatched package(s)?",
                count
            ))
            .default(true)
            .interact()
            .map_err(anyhow::Error::from)?;
        Ok(proceed)
    }

    /// Install every failed entry, then re-check everything against a
    /// fresh snapshot. Installs are not assumed to have succeeded.
    fn remediate_failures(
        &self,
        entries: &[RequirementEntry],
        results: Vec<CheckResult>,
        theme: &ReqTheme,
    ) -> Result<Vec<CheckResult>> {
        let failed: Vec<&RequirementEntry> = entries
            .iter()
            .zip(&results)
            .filter(|(_, r)| !r.status.is_ok())
            .map(|(entry, _)| entry)
            .collect();

        if failed.is_empty() {
            return Ok(results);
        }
        if !self.confirm_install(failed.len())? {
            tracing::info!("install declined, keeping original results");
            return Ok(results);
        }

        let installer = PipInstaller::new(&self.args.python);
        let outcomes = remediate(&failed, &installer);
        if !self.globals.quiet && !self.args.json {
            for outcome in &outcomes {
                let kind = if outcome.success {
                    StatusKind::Success
                } else {
                    StatusKind::Failed
                };
                eprintln!(
                    " {} install {}",
                    kind.styled(theme, self.globals.ascii),
                    outcome.requirement
                );
            }
        }

        let index = PipIndex::snapshot(&self.args.python)?;
        Ok(ManifestChecker::new(&index).check_all(entries))
    }
}

impl Command for CheckCommand {
    fn execute(&self) -> Result<CommandResult> {
        let parsed = parser::parse_file(&self.globals.requirements)?;
        let theme = self.theme();
        let show_output = !self.globals.quiet;

        if show_output {
            for warning in &parsed.warnings {
                eprintln!(
                    "{}",
                    theme.format_warning(&warning.to_string(), self.globals.ascii)
                );
            }
        }

        let spinner = if show_output && !self.args.json {
            ProgressSpinner::new("Querying installed packages...")
        } else {
            ProgressSpinner::hidden()
        };
        let snapshot = PipIndex::snapshot(&self.args.python);
        spinner.finish_and_clear();
        let index = snapshot?;

        if self.globals.verbose && show_output {
            eprintln!(
                "Environment: {} ({} packages installed)",
                self.args.python,
                index.len()
            );
        }

        let mut results = ManifestChecker::new(&index).check_all(&parsed.entries);
        if self.args.auto_install {
            results = self.remediate_failures(&parsed.entries, results, &theme)?;
        }

        let report = CheckReport {
            manifest_path: &self.globals.requirements,
            results: &results,
            warnings: &parsed.warnings,
            checked_at: chrono::Utc::now(),
        };

        if self.args.json {
            JsonFormatter::new().format(&report, &mut std::io::stdout().lock())?;
        } else if show_output {
            HumanFormatter::new(theme, self.globals.ascii)
                .format(&report, &mut std::io::stdout().lock())?;
        }

        let policy = FailurePolicy {
            fail_missing: !self.args.allow_missing,
            fail_mismatch: !self.args.allow_mismatch,
        };
        if policy.passes(&results) {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(1))
        }
    }
}
