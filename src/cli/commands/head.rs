//! Head command implementation.
//!
//! Displays the commit HEAD points to and the branch it is on.

use super::helpers::print_json;
use crate::cli::RuntimeConfig;
use crate::error::Result;
use crate::git::{GitOperations, RepositoryHandle};

/// Execute head command
pub(super) fn execute_head(handle: &RepositoryHandle, config: &RuntimeConfig) -> Result<i32> {
    let head = handle.current_head()?;

    if config.json {
        print_json(&head)?;
        return Ok(0);
    }

    config.field("commit", &head.hash);
    config.field("short", &head.short_hash);
    if head.ref_name.is_empty() {
        config.field("branch", "(detached)");
    } else {
        config.field("branch", &head.ref_name);
    }
    config.field("date", &head.timestamp.to_rfc3339());
    config.field("summary", &head.summary);

    Ok(0)
}
