//! # Kodegen Release Git
//!
//! Repository introspection and tagging for release automation.
//!
//! A release pipeline needs three answers from the checkout it runs in:
//! which hosting service and owner/name `origin` points to, which commit HEAD
//! is and on which branch, and whether a release tag exists. It also needs to
//! create (optionally GPG-signed) tags and delete them again, including
//! force-retagging when a release is re-run.
//!
//! ## Features
//!
//! - **Stateless handles**: every call re-opens the repository, so nothing is cached
//! - **Upward search**: run from any subdirectory of a checkout
//! - **Remote classification**: GitHub, GitLab, Codeberg or other, from HTTPS, SSH and SCP-like URLs
//! - **Signed tags**: pluggable [`TagSigner`](git::TagSigner) with a gpg implementation
//! - **Pure Rust**: git access through gix, no git CLI required
//!
//! ## Usage
//!
//! ```no_run
//! use kodegen_release_git::git::{GitOperations, RepositoryHandle, SigningContext};
//!
//! # fn main() -> kodegen_release_git::Result<()> {
//! let repo = RepositoryHandle::locate(".", true)?;
//! let origin = repo.resolve_origin()?;
//! println!("{} {}/{}", origin.kind, origin.owner, origin.name);
//!
//! if !repo.tag_exists("v1\\.0\\.0")? {
//!     repo.create_tag("v1.0.0", false, SigningContext::disabled())?;
//! }
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

// Core modules
pub mod cli;
pub mod error;
pub mod git;

// Re-export main types for public API
pub use cli::Args;
pub use error::{GitError, ReleaseError, Result, SigningError};
pub use git::{
    CommitInfo, GitConfig, GitOperations, GpgSigner, HostingKind, RemoteDescriptor,
    RepositoryHandle, SigningContext, TagRef, TagSigner,
};
