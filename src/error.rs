//! Error types for kodegen_release_git operations.
//!
//! Repository failures are reported through [`GitError`], whose variants form a
//! closed taxonomy. Each wrapped failure keeps the underlying cause reachable
//! through [`std::error::Error::source`].

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for kodegen_release_git operations
pub type Result<T> = std::result::Result<T, ReleaseError>;

/// Result type alias for repository operations
pub type GitResult<T> = std::result::Result<T, GitError>;

/// Boxed underlying cause carried by wrapped errors
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Main error type for all kodegen_release_git operations
#[derive(Error, Debug)]
pub enum ReleaseError {
    /// Git operation errors
    #[error("Git error: {0}")]
    Git(#[from] GitError),

    /// Tag signing errors
    #[error("Signing error: {0}")]
    Signing(#[from] SigningError),

    /// Configuration errors
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Writing command output failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Repository introspection and tagging errors
#[derive(Error, Debug)]
pub enum GitError {
    /// No repository metadata at (or, with upward search, above) the base directory
    #[error("Not a git repository: {}", path.display())]
    NotARepository {
        /// Directory the lookup started from
        path: PathBuf,
        /// Underlying open failure, if any was produced
        #[source]
        source: Option<BoxError>,
    },

    /// The requested remote is not configured
    #[error("Repository doesn't have an '{remote}' remote")]
    MissingRemote {
        /// Remote name
        remote: String,
    },

    /// The remote exists but its URL cannot yield an owner and a name
    #[error("Malformed '{remote}' remote: {reason}")]
    MalformedRemote {
        /// Remote name
        remote: String,
        /// What was wrong with the remote
        reason: String,
        /// URL parsing failure, if any
        #[source]
        source: Option<BoxError>,
    },

    /// Reading remote configuration failed
    #[error("Could not determine '{remote}' remote: {source}")]
    RemoteQueryFailed {
        /// Remote name
        remote: String,
        /// Underlying failure
        #[source]
        source: BoxError,
    },

    /// HEAD does not resolve to a commit (empty repository or corrupt object)
    #[error("Could not resolve HEAD: {source}")]
    HeadUnresolvable {
        /// Underlying failure
        #[source]
        source: BoxError,
    },

    /// Enumerating or matching tags failed
    #[error("Could not query tags '{query}': {source}")]
    TagQueryFailed {
        /// Pattern or query that failed
        query: String,
        /// Underlying failure
        #[source]
        source: BoxError,
    },

    /// Tag already exists and force was not requested
    #[error("Git tag '{tag}' already exists. Use --force to overwrite or choose a different name.")]
    TagAlreadyExists {
        /// Tag name
        tag: String,
    },

    /// Writing the tag object or reference failed
    #[error("Could not create tag '{tag}': {source}")]
    TagCreationFailed {
        /// Tag name
        tag: String,
        /// Underlying failure
        #[source]
        source: BoxError,
    },

    /// The tag does not exist or could not be removed
    #[error("Could not delete tag '{tag}': {source}")]
    TagDeletionFailed {
        /// Tag name
        tag: String,
        /// Underlying failure
        #[source]
        source: BoxError,
    },
}

/// Errors raised by a tag signing provider
#[derive(Error, Debug)]
pub enum SigningError {
    /// The signing program could not be located
    #[error("Signing program '{program}' not found: {source}")]
    ProgramNotFound {
        /// Program name that was searched for
        program: String,
        /// Lookup failure
        #[source]
        source: which::Error,
    },

    /// Spawning or talking to the signing program failed
    #[error("Failed to run signing program '{}': {source}", program.display())]
    Io {
        /// Program path
        program: PathBuf,
        /// IO failure
        #[source]
        source: std::io::Error,
    },

    /// The signing program exited unsuccessfully
    #[error("Signing program '{}' failed (exit code {code:?}): {stderr}", program.display())]
    Failed {
        /// Program path
        program: PathBuf,
        /// Exit code, if the program was not killed by a signal
        code: Option<i32>,
        /// Captured standard error
        stderr: String,
    },

    /// The program produced something that is not an armored signature
    #[error("Invalid signature output: {reason}")]
    InvalidSignature {
        /// Reason for the error
        reason: String,
    },
}

/// Configuration loading errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("Failed to read config file {}: {source}", path.display())]
    Read {
        /// Config file path
        path: PathBuf,
        /// IO failure
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for the expected schema
    #[error("Failed to parse config file {}: {source}", path.display())]
    Parse {
        /// Config file path
        path: PathBuf,
        /// Parse failure
        #[source]
        source: toml::de::Error,
    },
}

impl ReleaseError {
    /// Get actionable recovery suggestions for this error
    pub fn recovery_suggestions(&self) -> Vec<String> {
        match self {
            ReleaseError::Git(GitError::NotARepository { .. }) => vec![
                "Run from inside a git checkout or pass --dir <PATH>".to_string(),
                "Use --git-root-search when invoking from a subdirectory".to_string(),
            ],
            ReleaseError::Git(GitError::MissingRemote { remote }) => vec![format!(
                "Add the remote: git remote add {} <url>",
                remote
            )],
            ReleaseError::Git(GitError::MalformedRemote { remote, .. }) => vec![
                format!("Verify the remote URL: git remote get-url {}", remote),
                "The URL path must end in <owner>/<name>".to_string(),
            ],
            ReleaseError::Git(GitError::HeadUnresolvable { .. }) => vec![
                "Create an initial commit before tagging".to_string(),
            ],
            ReleaseError::Git(GitError::TagAlreadyExists { tag }) => vec![
                format!("Re-run with --force to move '{}' to HEAD", tag),
                format!("Delete the tag first: git tag -d {}", tag),
            ],
            ReleaseError::Git(GitError::TagDeletionFailed { .. }) => vec![
                "List existing tags with the 'tags' command".to_string(),
            ],
            ReleaseError::Git(GitError::TagCreationFailed { .. }) | ReleaseError::Signing(_) => {
                vec![
                    "Check that user.name and user.email are configured".to_string(),
                    "When signing, verify the key with: gpg --list-secret-keys".to_string(),
                ]
            }
            ReleaseError::Config(_) => vec![
                "Fix or remove the configuration file and retry".to_string(),
            ],
            _ => vec!["Check the error message above for specific details".to_string()],
        }
    }

    /// Check if this error is recoverable
    pub fn is_recoverable(&self) -> bool {
        !matches!(
            self,
            ReleaseError::Git(GitError::NotARepository { .. })
                | ReleaseError::Git(GitError::MissingRemote { .. })
                | ReleaseError::Git(GitError::MalformedRemote { .. })
                | ReleaseError::Git(GitError::HeadUnresolvable { .. })
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_wrapped_cause_is_preserved() {
        let cause = std::io::Error::other("disk on fire");
        let error = GitError::TagDeletionFailed {
            tag: "v1.0.0".to_string(),
            source: Box::new(cause),
        };

        let source = error.source().expect("cause should be attached");
        assert_eq!(source.to_string(), "disk on fire");
        assert!(error.to_string().contains("v1.0.0"));
    }

    #[test]
    fn test_recovery_suggestions_for_existing_tag() {
        let error = ReleaseError::from(GitError::TagAlreadyExists {
            tag: "v2.0.0".to_string(),
        });

        let suggestions = error.recovery_suggestions();
        assert!(suggestions.iter().any(|s| s.contains("--force")));
        assert!(error.is_recoverable());
    }

    #[test]
    fn test_missing_repository_is_terminal() {
        let error = ReleaseError::from(GitError::NotARepository {
            path: PathBuf::from("/nowhere"),
            source: None,
        });

        assert!(!error.is_recoverable());
    }
}
