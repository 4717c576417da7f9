//! Command line argument parsing and validation.

use crate::error::ConfigError;
use crate::git::GitConfig;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Repository introspection and release tagging
#[derive(Parser, Debug)]
#[command(
    name = "kodegen_release_git",
    version,
    about = "Inspect a git checkout and manage release tags",
    long_about = "Inspect a git checkout and manage release tags.

Usage:
  kodegen_release_git origin
  kodegen_release_git --dir crates/foo --git-root-search head
  kodegen_release_git tag v1.2.3 --sign
  kodegen_release_git tag-exists 'v1\\.2\\..*'"
)]
pub struct Args {
    /// Directory to start from
    #[arg(long, global = true, value_name = "PATH", default_value = ".")]
    pub dir: PathBuf,

    /// Search parent directories for the repository root
    #[arg(long, global = true)]
    pub git_root_search: bool,

    /// Configuration file (defaults to release-git.toml in --dir)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print machine-readable JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Command to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Show hosting kind, owner and name of the origin remote
    Origin,

    /// Show the HEAD commit and branch
    Head,

    /// List tags sorted by name
    Tags,

    /// Exit 0 when a tag fully matches the regular expression, 1 otherwise
    TagExists {
        /// Regular expression matched against each tag name
        #[arg(value_name = "PATTERN")]
        pattern: String,
    },

    /// Create an annotated tag at HEAD
    Tag {
        /// Tag name
        #[arg(value_name = "NAME")]
        name: String,

        /// Move the tag if it already exists
        #[arg(short, long)]
        force: bool,

        /// Tag message (defaults to the configured template or the tag name)
        #[arg(short, long)]
        message: Option<String>,

        /// GPG-sign the tag
        #[arg(short, long)]
        sign: bool,

        /// Key to sign with
        #[arg(long, env = "RELEASE_GIT_SIGNING_KEY", value_name = "KEY")]
        signing_key: Option<String>,
    },

    /// Delete a tag by exact name
    DeleteTag {
        /// Tag name
        #[arg(value_name = "NAME")]
        name: String,
    },
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate arguments for consistency
    pub fn validate(&self) -> Result<(), String> {
        match &self.command {
            Command::Tag { name, .. } | Command::DeleteTag { name } if name.trim().is_empty() => {
                Err("Tag name must not be empty".to_string())
            }
            Command::TagExists { pattern } if pattern.is_empty() => {
                Err("Tag pattern must not be empty".to_string())
            }
            _ => Ok(()),
        }
    }
}

/// Configuration derived from command line arguments and the config file
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Output manager for colored terminal output
    output: super::OutputManager,
    /// Emit JSON instead of human-readable text
    pub json: bool,
    /// Git settings after CLI overrides
    pub git: GitConfig,
}

impl RuntimeConfig {
    /// Load the config file and apply command line overrides
    pub fn from_args(args: &Args) -> Result<Self, ConfigError> {
        let mut git = match args.config {
            Some(ref path) => GitConfig::load(path)?,
            None => GitConfig::discover(&args.dir)?,
        };

        if args.git_root_search {
            git.git_root_search = true;
        }
        if let Command::Tag {
            sign, signing_key, ..
        } = &args.command
        {
            if *sign {
                git.sign = true;
            }
            if signing_key.is_some() {
                git.signing_key = signing_key.clone();
            }
        }

        Ok(Self {
            output: super::OutputManager::new(args.quiet),
            json: args.json,
            git,
        })
    }

    /// Print message
    pub fn println(&self, message: &str) {
        let _ = self.output.println(message);
    }

    /// Print a labelled value
    pub fn field(&self, label: &str, value: &str) {
        let _ = self.output.field(label, value);
    }

    /// Print warning message
    pub fn warning_println(&self, message: &str) {
        let _ = self.output.warn(message);
    }

    /// Print success message
    pub fn success_println(&self, message: &str) {
        let _ = self.output.success(message);
    }
}
