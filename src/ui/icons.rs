//! Status mark vocabulary.
//!
//! One canonical set of marks for all output. Every mark has an ASCII
//! twin (`--ascii`) for terminal encodings that cannot print the Unicode
//! forms — the original motivation being GBK consoles mangling `✓`/`✗`.

use super::theme::ReqTheme;
use crate::checker::CheckStatus;

/// Canonical status kinds used across reqcheck output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    /// Requirement satisfied.
    Success,
    /// Requirement missing or mismatched.
    Failed,
    /// Non-fatal problem (e.g. an unparsable manifest line).
    Warning,
}

impl StatusKind {
    /// Unicode mark.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Success => "✓",
            Self::Failed => "✗",
            Self::Warning => "⚠",
        }
    }

    /// ASCII twin of [`icon`](Self::icon).
    pub fn ascii(self) -> &'static str {
        match self {
            Self::Success => "+",
            Self::Failed => "-",
            Self::Warning => "!",
        }
    }

    /// Styled mark using the given theme.
    pub fn styled(self, theme: &ReqTheme, ascii: bool) -> String {
        let mark = if ascii { self.ascii() } else { self.icon() };
        match self {
            Self::Success => theme.success.apply_to(mark).to_string(),
            Self::Failed => theme.error.apply_to(mark).to_string(),
            Self::Warning => theme.warning.apply_to(mark).to_string(),
        }
    }
}

impl From<CheckStatus> for StatusKind {
    fn from(status: CheckStatus) -> Self {
        match status {
            CheckStatus::Ok => Self::Success,
            CheckStatus::Missing | CheckStatus::VersionMismatch => Self::Failed,
        }
    }
}
