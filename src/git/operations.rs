//! Core Git operations trait and types for release tagging.
//!
//! This module defines the GitOperations trait that specifies everything a
//! release pipeline asks of a checkout. The implementation is provided by
//! [`RepositoryHandle`](crate::git::RepositoryHandle).

use crate::error::GitResult;
use crate::git::{RemoteDescriptor, SigningContext};
use serde::Serialize;

/// Trait defining all required Git operations for release tagging
pub trait GitOperations {
    /// Identify the `origin` remote
    fn resolve_origin(&self) -> GitResult<RemoteDescriptor>;

    /// Describe the commit HEAD points to
    fn current_head(&self) -> GitResult<CommitInfo>;

    /// All tags, sorted by name
    fn list_tags(&self) -> GitResult<Vec<TagRef>>;

    /// Check if any tag name fully matches the regular expression `pattern`
    fn tag_exists(&self, pattern: &str) -> GitResult<bool>;

    /// Create an annotated tag at HEAD whose message is the tag name
    fn create_tag(&self, name: &str, force: bool, signing: SigningContext<'_>) -> GitResult<()> {
        self.create_tag_with_message(name, name, force, signing)
    }

    /// Create an annotated tag at HEAD
    fn create_tag_with_message(
        &self,
        name: &str,
        message: &str,
        force: bool,
        signing: SigningContext<'_>,
    ) -> GitResult<()>;

    /// Create a tag, failing if it already exists
    fn tag(&self, name: &str, signing: SigningContext<'_>) -> GitResult<()> {
        self.create_tag(name, false, signing)
    }

    /// Delete a tag by exact name
    fn delete_tag(&self, name: &str) -> GitResult<()>;
}

/// Information about the HEAD commit
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommitInfo {
    /// First seven characters of the commit hash
    pub short_hash: String,
    /// Commit hash (full hex)
    pub hash: String,
    /// Branch HEAD is on, empty when detached
    pub ref_name: String,
    /// First line of the commit message
    pub summary: String,
    /// Commit timestamp
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// A tag reference.
///
/// Ordering is by `name` first, so sorting a list orders it by tag name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct TagRef {
    /// Tag name without `refs/tags/`
    pub name: String,
    /// Full reference name
    pub full_name: String,
    /// Object id the reference points to
    pub target: String,
}
