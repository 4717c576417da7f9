//! kodegen_release_git - repository introspection and release tagging.
//!
//! This binary exposes the repository layer as commands for release scripts:
//! resolving the origin remote, describing HEAD, and managing release tags.

use kodegen_release_git::cli;
use kodegen_release_git::cli::OutputManager;
use std::process;

fn main() {
    env_logger::init();

    match cli::run() {
        Ok(exit_code) => {
            process::exit(exit_code);
        }
        Err(e) => {
            // Create output manager for error display (never quiet for fatal errors)
            let output = OutputManager::new(false);
            output.error(&format!("Fatal error: {e}"));

            // Show recovery suggestions for critical errors
            let suggestions = e.recovery_suggestions();
            if !suggestions.is_empty() {
                output.error("Recovery suggestions:");
                for suggestion in suggestions {
                    output.error(&format!("    {suggestion}"));
                }
            }

            process::exit(1);
        }
    }
}
