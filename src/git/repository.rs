//! GitOperations implementation backed by gix.
//!
//! A [`RepositoryHandle`] stores only where the repository lives. Every
//! operation opens the repository, does its work and drops it again, so no
//! state survives between calls and every call observes what is on disk.

use crate::error::{BoxError, GitError, GitResult};
use crate::git::remote::{ORIGIN, parse_remote_url};
use crate::git::{
    CommitInfo, GitOperations, REFS_TAGS, RemoteDescriptor, SigningContext, TagRef,
    extract_head_name, extract_tag_name,
};
use gix::bstr::{BStr, BString, ByteSlice};
use gix::objs::WriteTo;
use gix::refs::transaction::PreviousValue;
use regex::Regex;
use std::path::{Path, PathBuf};

const SHORT_HASH_LEN: usize = 7;
const FALLBACK_USER: &str = "release";
const FALLBACK_HOST: &str = "localhost";

/// Locator for a repository on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryHandle {
    basedir: PathBuf,
    search_upward: bool,
}

impl RepositoryHandle {
    /// Create a handle for `basedir`. Nothing is opened until an operation runs.
    pub fn new(basedir: impl Into<PathBuf>, search_upward: bool) -> Self {
        Self {
            basedir: basedir.into(),
            search_upward,
        }
    }

    /// Create a handle and verify that a repository can be opened through it
    pub fn locate(basedir: impl Into<PathBuf>, search_upward: bool) -> GitResult<Self> {
        let handle = Self::new(basedir, search_upward);
        handle.open()?;
        Ok(handle)
    }

    /// Open the repository.
    ///
    /// Without upward search exactly the base directory must hold a
    /// repository. With it, the base directory and then each parent is tried
    /// until one opens.
    pub fn open(&self) -> GitResult<gix::Repository> {
        let start = std::fs::canonicalize(&self.basedir).map_err(|e| GitError::NotARepository {
            path: self.basedir.clone(),
            source: Some(e.into()),
        })?;

        if !self.search_upward {
            return gix::open(&start).map_err(|e| GitError::NotARepository {
                path: self.basedir.clone(),
                source: Some(e.into()),
            });
        }

        let mut last_error: Option<BoxError> = None;
        for dir in start.ancestors() {
            match gix::open(dir) {
                Ok(repo) => {
                    log::debug!(
                        "Opened repository at {} (searched from {})",
                        dir.display(),
                        start.display()
                    );
                    return Ok(repo);
                }
                Err(gix::open::Error::NotARepository { .. }) => continue,
                Err(e) => {
                    last_error = Some(e.into());
                    break;
                }
            }
        }

        Err(GitError::NotARepository {
            path: self.basedir.clone(),
            source: last_error,
        })
    }

    /// Root of the opened repository: its working tree, or the git dir when bare
    pub fn root(&self) -> GitResult<PathBuf> {
        let repo = self.open()?;
        Ok(repo
            .workdir()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| repo.path().to_path_buf()))
    }
}

impl GitOperations for RepositoryHandle {
    fn resolve_origin(&self) -> GitResult<RemoteDescriptor> {
        let repo = self.open()?;

        let has_origin = repo.remote_names().iter().any(|candidate| {
            let candidate: &BStr = candidate.as_ref();
            candidate == ORIGIN.as_bytes().as_bstr()
        });
        if !has_origin {
            return Err(GitError::MissingRemote {
                remote: ORIGIN.to_string(),
            });
        }

        let config = repo.config_snapshot();
        let urls = config
            .plumbing()
            .strings("remote.origin.url")
            .unwrap_or_default();

        // first configured URL wins
        let Some(url) = urls.first() else {
            return Err(GitError::MalformedRemote {
                remote: ORIGIN.to_string(),
                reason: "'origin' remote does not have a configured URL".to_string(),
                source: None,
            });
        };

        let url = url.to_str().map_err(|e| GitError::RemoteQueryFailed {
            remote: ORIGIN.to_string(),
            source: e.into(),
        })?;
        parse_remote_url(ORIGIN, url)
    }

    fn current_head(&self) -> GitResult<CommitInfo> {
        let repo = self.open()?;
        let unresolvable = |source: BoxError| GitError::HeadUnresolvable { source };

        let commit = repo.head_commit().map_err(|e| unresolvable(e.into()))?;
        let hash = commit.id().to_string();
        let short_hash: String = hash.chars().take(SHORT_HASH_LEN).collect();

        let summary = commit
            .message()
            .map(|m| m.summary().to_string())
            .map_err(|e| unresolvable(e.into()))?;
        let committer = commit.committer().map_err(|e| unresolvable(e.into()))?;
        // Parse git time format: "<seconds> <timezone>"
        let timestamp = committer
            .time
            .split_whitespace()
            .next()
            .and_then(|s| s.parse::<i64>().ok())
            .and_then(|secs| chrono::DateTime::from_timestamp(secs, 0))
            .unwrap_or_default();

        let ref_name = repo
            .head_name()
            .map_err(|e| unresolvable(e.into()))?
            .map(|name| extract_head_name(&name.as_bstr().to_str_lossy()).to_string())
            .unwrap_or_default();

        Ok(CommitInfo {
            short_hash,
            hash,
            ref_name,
            summary,
            timestamp,
        })
    }

    fn list_tags(&self) -> GitResult<Vec<TagRef>> {
        let repo = self.open()?;
        let query_failed = |source: BoxError| GitError::TagQueryFailed {
            query: REFS_TAGS.to_string(),
            source,
        };

        let references = repo.references().map_err(|e| query_failed(e.into()))?;
        let mut tags = Vec::new();
        for reference in references.tags().map_err(|e| query_failed(e.into()))? {
            let reference = reference.map_err(|e| query_failed(e.into()))?;
            let full_name = reference.name().as_bstr().to_str_lossy().into_owned();
            let target = reference
                .try_id()
                .map(|id| id.to_string())
                .unwrap_or_default();
            tags.push(TagRef {
                name: extract_tag_name(&full_name).to_string(),
                full_name,
                target,
            });
        }

        tags.sort();
        Ok(tags)
    }

    fn tag_exists(&self, pattern: &str) -> GitResult<bool> {
        let matcher =
            Regex::new(&format!("^(?:{})$", pattern)).map_err(|e| GitError::TagQueryFailed {
                query: pattern.to_string(),
                source: e.into(),
            })?;

        let tags = self.list_tags().map_err(|e| match e {
            GitError::TagQueryFailed { source, .. } => GitError::TagQueryFailed {
                query: pattern.to_string(),
                source,
            },
            other => other,
        })?;

        Ok(tags.iter().any(|tag| matcher.is_match(&tag.name)))
    }

    fn create_tag_with_message(
        &self,
        name: &str,
        message: &str,
        force: bool,
        signing: SigningContext<'_>,
    ) -> GitResult<()> {
        let repo = self.open()?;
        let creation_failed = |source: BoxError| GitError::TagCreationFailed {
            tag: name.to_string(),
            source,
        };

        let full_name = format!("{}{}", REFS_TAGS, name);
        if !force
            && repo
                .try_find_reference(full_name.as_str())
                .map_err(|e| creation_failed(e.into()))?
                .is_some()
        {
            return Err(GitError::TagAlreadyExists {
                tag: name.to_string(),
            });
        }

        let target = repo
            .head_commit()
            .map_err(|e| creation_failed(e.into()))?
            .id()
            .to_string();
        let identity = Tagger::resolve(&repo).map_err(creation_failed)?;
        let tagger = identity.as_signature();

        let mut message = message.to_string();
        if !message.ends_with('\n') {
            message.push('\n');
        }

        if let Some(signature) = signing.sign(&unsigned_payload(&target, name, tagger, &message)?) {
            let signature = signature.map_err(|e| creation_failed(e.into()))?;
            message.push_str(&signature);
        }

        let tag = tag_object(&target, name, tagger, &message);
        let tag_id = repo
            .write_object(tag)
            .map_err(|e| creation_failed(e.into()))?
            .detach();

        let constraint = if force {
            PreviousValue::Any
        } else {
            PreviousValue::MustNotExist
        };
        repo.tag_reference(name, tag_id, constraint)
            .map_err(|e| creation_failed(e.into()))?;

        log::debug!(
            "Tagged {} as {} (object {}, signed: {})",
            target,
            full_name,
            tag_id,
            signing.is_enabled()
        );
        Ok(())
    }

    fn delete_tag(&self, name: &str) -> GitResult<()> {
        let repo = self.open()?;
        let deletion_failed = |source: BoxError| GitError::TagDeletionFailed {
            tag: name.to_string(),
            source,
        };

        let full_name = format!("{}{}", REFS_TAGS, name);
        let reference = repo
            .find_reference(full_name.as_str())
            .map_err(|e| deletion_failed(e.into()))?;
        reference.delete().map_err(|e| deletion_failed(e.into()))?;

        log::debug!("Deleted {}", full_name);
        Ok(())
    }
}

/// Identity recorded as the tagger of new tags
struct Tagger {
    name: BString,
    email: BString,
    time: String,
}

impl Tagger {
    /// The configured committer, or one derived from the login user and host.
    fn resolve(repo: &gix::Repository) -> Result<Self, BoxError> {
        if let Some(committer) = repo.committer() {
            let committer = committer?;
            return Ok(Self {
                name: committer.name.to_owned(),
                email: committer.email.to_owned(),
                time: committer.time.to_string(),
            });
        }

        let user = env_first(&["USER", "USERNAME", "LOGNAME"])
            .unwrap_or_else(|| FALLBACK_USER.to_string());
        let host = env_first(&["HOSTNAME", "COMPUTERNAME"])
            .unwrap_or_else(|| FALLBACK_HOST.to_string());
        log::debug!("No committer identity configured, tagging as {}@{}", user, host);

        Ok(Self {
            email: format!("{}@{}", user, host).into(),
            name: user.into(),
            time: format!("{} +0000", chrono::Utc::now().timestamp()),
        })
    }

    fn as_signature(&self) -> gix::actor::SignatureRef<'_> {
        gix::actor::SignatureRef {
            name: self.name.as_bstr(),
            email: self.email.as_bstr(),
            time: &self.time,
        }
    }
}

fn env_first(keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|key| std::env::var(key).ok())
        .find(|value| !value.trim().is_empty())
}

fn tag_object<'a>(
    target: &'a str,
    name: &'a str,
    tagger: gix::actor::SignatureRef<'a>,
    message: &'a str,
) -> gix::objs::TagRef<'a> {
    gix::objs::TagRef {
        target: target.as_bytes().as_bstr(),
        target_kind: gix::object::Kind::Commit,
        name: name.as_bytes().as_bstr(),
        tagger: Some(tagger),
        message: message.as_bytes().as_bstr(),
        pgp_signature: None,
    }
}

/// Serialized tag object without a signature, the bytes a signer must sign
fn unsigned_payload(
    target: &str,
    name: &str,
    tagger: gix::actor::SignatureRef<'_>,
    message: &str,
) -> GitResult<Vec<u8>> {
    let mut payload = Vec::new();
    tag_object(target, name, tagger, message)
        .write_to(&mut payload)
        .map_err(|e| GitError::TagCreationFailed {
            tag: name.to_string(),
            source: e.into(),
        })?;
    Ok(payload)
}
