//! Configuration for Git operations.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration for Git operations
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct GitConfig {
    /// Search parent directories for the repository root
    pub git_root_search: bool,
    /// Whether to GPG-sign release tags
    pub sign: bool,
    /// Key used for signing (gpg `--local-user`)
    pub signing_key: Option<String>,
    /// Explicit path to the gpg executable
    pub gpg_program: Option<PathBuf>,
    /// Custom tag message template
    pub tag_message_template: Option<String>,
}

impl GitConfig {
    /// Default config file name looked up in the base directory
    pub const FILE_NAME: &'static str = "release-git.toml";

    /// Load configuration from an explicit file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load `release-git.toml` from `basedir`, falling back to defaults when absent.
    pub fn discover(basedir: &Path) -> Result<Self, ConfigError> {
        let path = basedir.join(Self::FILE_NAME);
        if !path.is_file() {
            log::debug!("No {} in {}, using defaults", Self::FILE_NAME, basedir.display());
            return Ok(Self::default());
        }

        log::debug!("Loading git configuration from {}", path.display());
        Self::load(&path)
    }

    /// Generate tag message for a release tag
    pub fn generate_tag_message(&self, tag: &str) -> String {
        if let Some(ref template) = self.tag_message_template {
            template.replace("{tag}", tag)
        } else {
            tag.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GitConfig::default();
        assert!(!config.sign);
        assert!(!config.git_root_search);
        assert_eq!(config.signing_key, None);
        assert_eq!(config.generate_tag_message("v1.2.3"), "v1.2.3");
    }

    #[test]
    fn test_parse_partial_file() {
        let config: GitConfig = toml::from_str(
            r#"
            sign = true
            signing-key = "ABCDEF0123456789"
            tag-message-template = "Release {tag}"
            "#,
        )
        .expect("config should parse");

        assert!(config.sign);
        assert!(!config.git_root_search);
        assert_eq!(config.signing_key.as_deref(), Some("ABCDEF0123456789"));
        assert_eq!(config.generate_tag_message("v2.0.0"), "Release v2.0.0");
    }

    #[test]
    fn test_discover_without_file_uses_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = GitConfig::discover(dir.path()).expect("defaults");
        assert_eq!(config, GitConfig::default());
    }

    #[test]
    fn test_invalid_file_is_reported() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(GitConfig::FILE_NAME);
        std::fs::write(&path, "sign = \"maybe\"").expect("write config");

        let err = GitConfig::discover(dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_explicit_missing_file_is_reported() {
        let dir = tempfile::tempdir().expect("tempdir");
        let err = GitConfig::load(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
