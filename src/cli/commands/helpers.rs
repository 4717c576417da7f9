//! Shared helper functions for command execution.

use crate::cli::{Args, RuntimeConfig};
use crate::error::Result;
use crate::git::RepositoryHandle;
use serde::Serialize;
use std::io::Write;

/// Build the repository handle for the selected directory
pub(super) fn repository_handle(args: &Args, config: &RuntimeConfig) -> RepositoryHandle {
    log::debug!(
        "Using {} (root search: {})",
        args.dir.display(),
        config.git.git_root_search
    );
    RepositoryHandle::new(&args.dir, config.git.git_root_search)
}

/// Print a value as pretty JSON on stdout
pub(super) fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json_output = serde_json::to_string_pretty(value)?;
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", json_output)?;
    stdout.flush()?;
    Ok(())
}
