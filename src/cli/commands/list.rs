//! The `list` command: show the parsed manifest.
//!
//! Parses and prints entries without consulting any interpreter — useful
//! for checking what the manifest actually says, and for debugging lines
//! that end up as warnings.

use crate::cli::args::{GlobalOpts, ListArgs};
use crate::cli::commands::dispatcher::{Command, CommandResult};
use crate::error::Result;
use crate::manifest::parser;
use crate::ui::ReqTheme;
use serde::Serialize;

/// Show the parsed manifest.
pub struct ListCommand {
    globals: GlobalOpts,
    args: ListArgs,
}

#[derive(Serialize)]
struct ListRow<'a> {
    line: usize,
    name: &'a str,
    extras: Vec<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    constraint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    marker: Option<&'a str>,
}

impl ListCommand {
    /// Create the command.
    pub fn new(globals: GlobalOpts, args: ListArgs) -> Self {
        Self { globals, args }
    }
}

impl Command for ListCommand {
    fn execute(&self) -> Result<CommandResult> {
        let parsed = parser::parse_file(&self.globals.requirements)?;
        let theme = if console::colors_enabled() {
            ReqTheme::new()
        } else {
            ReqTheme::plain()
        };

        for warning in &parsed.warnings {
            eprintln!(
                "{}",
                theme.format_warning(&warning.to_string(), self.globals.ascii)
            );
        }

        if self.args.json {
            let rows: Vec<ListRow<'_>> = parsed
                .entries
                .iter()
                .map(|entry| ListRow {
                    line: entry.line_no,
                    name: &entry.name,
                    extras: entry.extras.iter().map(String::as_str).collect(),
                    constraint: entry.constraint.as_ref().map(|c| c.to_string()),
                    marker: entry.marker.as_deref(),
                })
                .collect();
            let stdout = std::io::stdout();
            serde_json::to_writer_pretty(&mut stdout.lock(), &rows)
                .map_err(std::io::Error::other)?;
            println!();
        } else {
            println!(
                "{}",
                theme.header.apply_to(format!(
                    "{}: {} requirement(s)",
                    self.globals.requirements.display(),
                    parsed.entries.len()
                ))
            );
            for entry in &parsed.entries {
                let marker = match &entry.marker {
                    Some(marker) => format!("  {}", theme.dim.apply_to(format!("; {}", marker))),
                    None => String::new(),
                };
                println!("  {:>3}  {}{}", entry.line_no, entry.display(), marker);
            }
        }

        Ok(CommandResult::success())
    }
}
