//! Origin command implementation.

use super::helpers::print_json;
use crate::cli::RuntimeConfig;
use crate::error::Result;
use crate::git::{GitOperations, RepositoryHandle};

/// Execute origin command
pub(super) fn execute_origin(handle: &RepositoryHandle, config: &RuntimeConfig) -> Result<i32> {
    let remote = handle.resolve_origin()?;

    if config.json {
        print_json(&remote)?;
    } else {
        config.field("kind", remote.kind.as_str());
        config.field("owner", &remote.owner);
        config.field("name", &remote.name);
        config.field("url", &remote.url);
    }

    Ok(0)
}
