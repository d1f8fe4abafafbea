//! Human-readable report formatter.
//!
//! One line per requirement with a status mark, then summary blocks for
//! anything missing or mismatched:
//!
//! ```text
//! Requirements file: requirements.txt
//!  ✓ foo==1.0 (installed: 1.0) -> ok
//!  ✗ bar>=2.0 (installed: 1.9) -> version-mismatch
//!  ✗ baz -> missing
//! ```

use super::{CheckReport, ReportFormatter};
use crate::checker::CheckStatus;
use crate::ui::{ReqTheme, StatusKind};
use std::io::Write;

/// Formats check results as status lines for the terminal.
pub struct HumanFormatter {
    theme: ReqTheme,
    ascii: bool,
}

impl HumanFormatter {
    /// Create a formatter with the given theme.
    ///
    /// `ascii` swaps the Unicode marks for `+`/`-`, for terminal encodings
    /// that cannot print them.
    pub fn new(theme: ReqTheme, ascii: bool) -> Self {
        Self { theme, ascii }
    }
}

impl ReportFormatter for HumanFormatter {
    fn format<W: Write>(&self, report: &CheckReport<'_>, writer: &mut W) -> std::io::Result<()> {
        writeln!(
            writer,
            "{}",
            self.theme
                .header
                .apply_to(format!("Requirements file: {}", report.manifest_path.display()))
        )?;

        for result in report.results {
            let kind = StatusKind::from(result.status);
            let installed = match &result.installed_version {
                Some(version) => format!(" (installed: {})", self.theme.dim.apply_to(version)),
                None => String::new(),
            };
            writeln!(
                writer,
                " {} {}{} -> {}",
                kind.styled(&self.theme, self.ascii),
                result.requirement,
                installed,
                result.status.label()
            )?;
        }

        let missing: Vec<&str> = report
            .results
            .iter()
            .filter(|r| r.status == CheckStatus::Missing)
            .map(|r| r.requirement.as_str())
            .collect();
        let mismatched: Vec<&str> = report
            .results
            .iter()
            .filter(|r| r.status == CheckStatus::VersionMismatch)
            .map(|r| r.requirement.as_str())
            .collect();

        if !missing.is_empty() {
            writeln!(writer)?;
            writeln!(writer, "{}", self.theme.error.apply_to("Missing packages:"))?;
            for requirement in &missing {
                writeln!(writer, "  - {}", requirement)?;
            }
        }

        if !mismatched.is_empty() {
            writeln!(writer)?;
            writeln!(
                writer,
                "{}",
                self.theme.warning.apply_to("Version mismatches:")
            )?;
            for requirement in &mismatched {
                writeln!(writer, "  - {}", requirement)?;
            }
        }

        writeln!(writer)?;
        writeln!(
            writer,
            "{} checked: {} ok, {} missing, {} mismatched",
            report.results.len(),
            report.ok_count(),
            missing.len(),
            mismatched.len()
        )?;

        Ok(())
    }
}
