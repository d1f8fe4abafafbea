//! Progress spinner.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// A spinner for the environment snapshot, the one operation in a run
/// slow enough to need one.
pub struct ProgressSpinner {
    bar: ProgressBar,
}

impl ProgressSpinner {
    /// Create a new spinner with a message.
    pub fn new(message: &str) -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::default_spinner()
                .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏ ")
                .template("{spinner:.cyan} {msg}")
                .expect("spinner template must parse"),
        );
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(80));
        Self { bar }
    }

    /// Create a spinner that doesn't show (quiet mode, JSON output).
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    /// Remove the spinner from the terminal.
    pub fn finish_and_clear(&self) {
        self.bar.finish_and_clear();
    }
}
