//! JSON report formatter.
//!
//! Machine-readable payload mirroring the human report: per-entry details
//! plus summary lists, for CI pipelines and tooling.

use super::{CheckReport, ReportFormatter};
use crate::checker::{CheckResult, CheckStatus};
use crate::manifest::ParseWarning;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;

/// Formats check results as JSON.
pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    requirements_file: String,
    checked_at: DateTime<Utc>,
    total: usize,
    ok: usize,
    missing: Vec<&'a str>,
    version_mismatch: Vec<&'a str>,
    warnings: &'a [ParseWarning],
    details: &'a [CheckResult],
}

impl JsonFormatter {
    /// Create a new JSON formatter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonFormatter {
    fn format<W: Write>(&self, report: &CheckReport<'_>, writer: &mut W) -> std::io::Result<()> {
        let by_status = |status: CheckStatus| -> Vec<&str> {
            report
                .results
                .iter()
                .filter(|r| r.status == status)
                .map(|r| r.requirement.as_str())
                .collect()
        };

        let output = JsonOutput {
            requirements_file: report.manifest_path.display().to_string(),
            checked_at: report.checked_at,
            total: report.results.len(),
            ok: report.ok_count(),
            missing: by_status(CheckStatus::Missing),
            version_mismatch: by_status(CheckStatus::VersionMismatch),
            warnings: report.warnings,
            details: report.results,
        };

        serde_json::to_writer_pretty(&mut *writer, &output).map_err(std::io::Error::other)?;
        writeln!(writer)?;
        Ok(())
    }
}
