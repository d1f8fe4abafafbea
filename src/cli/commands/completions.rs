//! The `completions` command: generate shell completion scripts.

use crate::cli::args::{Cli, CompletionsArgs};
use crate::cli::commands::dispatcher::{Command, CommandResult};
use crate::error::Result;
use clap::CommandFactory;

/// Generate completions for the requested shell.
pub struct CompletionsCommand {
    args: CompletionsArgs,
}

impl CompletionsCommand {
    /// Create the command.
    pub fn new(args: CompletionsArgs) -> Self {
        Self { args }
    }
}

impl Command for CompletionsCommand {
    fn execute(&self) -> Result<CommandResult> {
        let mut cmd = Cli::command();
        clap_complete::generate(
            self.args.shell,
            &mut cmd,
            "reqcheck",
            &mut std::io::stdout(),
        );
        Ok(CommandResult::success())
    }
}
