//! Tag command implementation.
//!
//! Creates an annotated tag at HEAD, signed with gpg when signing is enabled
//! through `--sign` or the `sign` config key.

use crate::cli::RuntimeConfig;
use crate::error::Result;
use crate::git::{GitOperations, GpgSigner, RepositoryHandle, SigningContext};

/// Execute tag command
pub(super) fn execute_tag(
    handle: &RepositoryHandle,
    config: &RuntimeConfig,
    name: &str,
    message: Option<&str>,
    force: bool,
) -> Result<i32> {
    let message = message
        .map(str::to_string)
        .unwrap_or_else(|| config.git.generate_tag_message(name));

    // gpg is only looked up when it will actually be used
    let signer = if config.git.sign {
        Some(GpgSigner::from_config(&config.git)?)
    } else {
        None
    };
    let signing = match signer {
        Some(ref signer) => SigningContext::from_config(&config.git, signer),
        None => SigningContext::disabled(),
    };

    handle.create_tag_with_message(name, &message, force, signing)?;

    if config.json {
        super::helpers::print_json(&serde_json::json!({
            "tag": name,
            "signed": signing.is_enabled(),
            "forced": force,
        }))?;
    } else {
        let kind = if signing.is_enabled() { "signed tag" } else { "tag" };
        config.success_println(&format!("Created {} {}", kind, name));
    }

    Ok(0)
}
