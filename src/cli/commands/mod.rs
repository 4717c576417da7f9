//! Command execution functions.
//!
//! Each command opens the repository through a fresh [`RepositoryHandle`]
//! and reports the outcome in human-readable or JSON form.

mod delete_tag;
mod head;
mod helpers;
mod origin;
mod tag;
mod tags;

use crate::cli::{Args, Command, RuntimeConfig};
use crate::error::Result;

use delete_tag::execute_delete_tag;
use head::execute_head;
use origin::execute_origin;
use tag::execute_tag;
use tags::{execute_tag_exists, execute_tags};

/// Execute the command selected by parsed arguments, returning the exit code
pub fn execute_command(args: Args) -> Result<i32> {
    if let Err(validation_error) = args.validate() {
        // Create output for validation errors (never quiet)
        let output = super::OutputManager::new(false);
        output.error(&format!("Invalid arguments: {}", validation_error));
        return Ok(2);
    }

    let config = RuntimeConfig::from_args(&args)?;
    let handle = helpers::repository_handle(&args, &config);

    match &args.command {
        Command::Origin => execute_origin(&handle, &config),
        Command::Head => execute_head(&handle, &config),
        Command::Tags => execute_tags(&handle, &config),
        Command::TagExists { pattern } => execute_tag_exists(&handle, &config, pattern),
        Command::Tag {
            name,
            force,
            message,
            ..
        } => execute_tag(&handle, &config, name, message.as_deref(), *force),
        Command::DeleteTag { name } => execute_delete_tag(&handle, &config, name),
    }
}
