//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// reqcheck - Check installed Python packages against a requirements manifest.
#[derive(Debug, Parser)]
#[command(name = "reqcheck")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the requirements manifest
    #[arg(
        short = 'r',
        long,
        global = true,
        value_name = "FILE",
        default_value = "requirements.txt"
    )]
    pub requirements: PathBuf,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress report output (exit code only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Use ASCII status marks instead of Unicode
    #[arg(long, global = true)]
    pub ascii: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Global options shared by every command.
    pub fn globals(&self) -> GlobalOpts {
        GlobalOpts {
            requirements: self.requirements.clone(),
            verbose: self.verbose,
            quiet: self.quiet,
            ascii: self.ascii,
        }
    }
}

/// Global options extracted from [`Cli`].
#[derive(Debug, Clone)]
pub struct GlobalOpts {
    pub requirements: PathBuf,
    pub verbose: bool,
    pub quiet: bool,
    pub ascii: bool,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check the environment against the manifest (default if no command specified)
    Check(CheckArgs),

    /// Show the parsed manifest without touching the environment
    List(ListArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CheckArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Install missing or mismatched packages, then re-check
    #[arg(long)]
    pub auto_install: bool,

    /// Skip the confirmation prompt before installing
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// Missing packages do not fail the run
    #[arg(long)]
    pub allow_missing: bool,

    /// Version mismatches do not fail the run
    #[arg(long)]
    pub allow_mismatch: bool,

    /// Python interpreter whose environment is checked
    #[arg(long, value_name = "EXE", default_value = "python3", env = "REQCHECK_PYTHON")]
    pub python: String,
}

impl Default for CheckArgs {
    fn default() -> Self {
        Self {
            json: false,
            auto_install: false,
            yes: false,
            allow_missing: false,
            allow_mismatch: false,
            python: std::env::var("REQCHECK_PYTHON").unwrap_or_else(|_| "python3".to_string()),
        }
    }
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
