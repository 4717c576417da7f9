//! Delete-tag command implementation.

use crate::cli::RuntimeConfig;
use crate::error::Result;
use crate::git::{GitOperations, RepositoryHandle};

/// Execute delete-tag command
pub(super) fn execute_delete_tag(
    handle: &RepositoryHandle,
    config: &RuntimeConfig,
    name: &str,
) -> Result<i32> {
    handle.delete_tag(name)?;

    if config.json {
        super::helpers::print_json(&serde_json::json!({ "deleted": name }))?;
    } else {
        config.success_println(&format!("Deleted tag {}", name));
    }

    Ok(0)
}
