//! Git repository introspection and tagging for release workflows.
//!
//! This module answers the questions a release pipeline asks of a checkout:
//! where `origin` is hosted, what HEAD is, and which tags exist. It also
//! creates (optionally signed) and deletes tags. All operations use the gix
//! library and never shell out to git.

mod config;
mod operations;
mod refs;
pub mod remote;
mod repository;
mod signing;

pub use config::GitConfig;
pub use operations::{CommitInfo, GitOperations, TagRef};
pub use refs::{REFS_HEADS, REFS_TAGS, extract_head_name, extract_tag_name};
pub use remote::{HostingKind, ORIGIN, RemoteDescriptor, parse_remote_url};
pub use repository::RepositoryHandle;
pub use signing::{GpgSigner, SigningContext, TagSigner, validate_signature};
