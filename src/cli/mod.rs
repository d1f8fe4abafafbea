//! Command-line interface.
//!
//! # Modules
//!
//! - [`args`] - clap argument definitions
//! - [`commands`] - command implementations and dispatching

pub mod args;
pub mod commands;

pub use args::{CheckArgs, Cli, Commands, GlobalOpts, ListArgs};
pub use commands::dispatcher::{Command, CommandDispatcher, CommandResult};
