//! Command line interface for kodegen_release_git.
//!
//! This module provides the CLI over the repository layer, with argument
//! parsing, command execution, and user feedback.

mod args;
pub mod commands;
mod output;

pub use args::{Args, Command, RuntimeConfig};
pub use commands::execute_command;
pub use output::OutputManager;

use crate::error::Result;

/// Main CLI entry point
pub fn run() -> Result<i32> {
    let args = Args::parse_args();
    execute_command(args)
}
