//! Tag listing and lookup commands.

use super::helpers::print_json;
use crate::cli::RuntimeConfig;
use crate::error::Result;
use crate::git::{GitOperations, RepositoryHandle};

/// Execute tags command
pub(super) fn execute_tags(handle: &RepositoryHandle, config: &RuntimeConfig) -> Result<i32> {
    let tags = handle.list_tags()?;

    if config.json {
        print_json(&tags)?;
    } else if tags.is_empty() {
        config.println("No tags found");
    } else {
        for tag in &tags {
            config.println(&tag.name);
        }
    }

    Ok(0)
}

/// Execute tag-exists command; exit code 1 means no tag matched
pub(super) fn execute_tag_exists(
    handle: &RepositoryHandle,
    config: &RuntimeConfig,
    pattern: &str,
) -> Result<i32> {
    let found = handle.tag_exists(pattern)?;

    if config.json {
        print_json(&serde_json::json!({ "pattern": pattern, "exists": found }))?;
    } else if found {
        config.success_println(&format!("A tag matches '{}'", pattern));
    } else {
        config.warning_println(&format!("No tag matches '{}'", pattern));
    }

    Ok(if found { 0 } else { 1 })
}
