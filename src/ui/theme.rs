//! Visual theme and styling.

use console::Style;

/// Console styles used across reqcheck output.
#[derive(Debug, Clone)]
pub struct ReqTheme {
    /// Style for satisfied requirements (green).
    pub success: Style,
    /// Style for version mismatches (orange).
    pub warning: Style,
    /// Style for missing packages and errors (red bold).
    pub error: Style,
    /// Style for dim/secondary text.
    pub dim: Style,
    /// Style for highlighted text (bold).
    pub highlight: Style,
    /// Style for headers (bold cyan).
    pub header: Style,
}

impl Default for ReqTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl ReqTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            dim: Style::new().dim(),
            highlight: Style::new().bold(),
            header: Style::new().bold().cyan(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            dim: Style::new(),
            highlight: Style::new(),
            header: Style::new(),
        }
    }

    /// Format a warning message with its mark.
    pub fn format_warning(&self, msg: &str, ascii: bool) -> String {
        let mark = if ascii { "!" } else { "⚠" };
        format!("{}", self.warning.apply_to(format!("{} {}", mark, msg)))
    }

    /// Format an error message with its mark.
    pub fn format_error(&self, msg: &str, ascii: bool) -> String {
        let mark = if ascii { "-" } else { "✗" };
        format!("{}", self.error.apply_to(format!("{} {}", mark, msg)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_theme_renders_text_unstyled() {
        let theme = ReqTheme::plain();
        assert_eq!(theme.format_warning("watch out", true), "! watch out");
        assert_eq!(theme.format_error("broken", true), "- broken");
    }

    #[test]
    fn unicode_marks_by_default() {
        let theme = ReqTheme::plain();
        assert_eq!(theme.format_warning("watch out", false), "⚠ watch out");
        assert_eq!(theme.format_error("broken", false), "✗ broken");
    }
}
