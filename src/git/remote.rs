//! Remote URL resolution.
//!
//! Turns the URL of a remote into the hosting service it belongs to and the
//! owner/name pair releases are published under. Parsing is pure and never
//! touches the network or a repository.
//!
//! Supported URL shapes are whatever `gix::url` understands:
//! - HTTPS: `https://github.com/owner/repo.git`
//! - SSH: `ssh://git@github.com/owner/repo.git`
//! - SSH SCP-like: `git@github.com:owner/repo.git`
//! - Local paths and `file://` URLs (classified as [`HostingKind::Other`])

use crate::error::{GitError, GitResult};
use gix::bstr::ByteSlice;
use serde::Serialize;
use std::fmt;

/// Name of the remote releases are resolved against
pub const ORIGIN: &str = "origin";

/// Code-hosting provider a remote belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HostingKind {
    /// github.com
    GitHub,
    /// gitlab.com
    GitLab,
    /// codeberg.org
    Codeberg,
    /// Any other host, including self-hosted instances of the above
    Other,
}

impl HostingKind {
    /// Classify a hostname by exact match.
    pub fn from_host(host: &str) -> Self {
        match host {
            "github.com" => HostingKind::GitHub,
            "gitlab.com" => HostingKind::GitLab,
            "codeberg.org" => HostingKind::Codeberg,
            _ => HostingKind::Other,
        }
    }

    /// Upper-case identifier used in output
    pub fn as_str(&self) -> &'static str {
        match self {
            HostingKind::GitHub => "GITHUB",
            HostingKind::GitLab => "GITLAB",
            HostingKind::Codeberg => "CODEBERG",
            HostingKind::Other => "OTHER",
        }
    }
}

impl fmt::Display for HostingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identity of a remote repository
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RemoteDescriptor {
    /// Hosting provider
    pub kind: HostingKind,
    /// Owning user or organization
    pub owner: String,
    /// Repository name without any `.git`
    pub name: String,
    /// URL exactly as configured
    pub url: String,
}

/// Parse a remote URL into a [`RemoteDescriptor`].
///
/// `remote` only labels errors. The owner is the second-to-last path segment
/// and the name is the last one with every `.git` occurrence removed.
pub fn parse_remote_url(remote: &str, uri: &str) -> GitResult<RemoteDescriptor> {
    let url = gix::url::parse(uri.as_bytes().as_bstr()).map_err(|e| GitError::MalformedRemote {
        remote: remote.to_string(),
        reason: format!("unparseable URL '{}'", uri),
        source: Some(e.into()),
    })?;

    let kind = url
        .host()
        .map(HostingKind::from_host)
        .unwrap_or(HostingKind::Other);

    let path = url.path.to_str_lossy();
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    let [.., owner, name] = segments.as_slice() else {
        return Err(GitError::MalformedRemote {
            remote: remote.to_string(),
            reason: format!("path '{}' has no owner/name", path),
            source: None,
        });
    };

    Ok(RemoteDescriptor {
        kind,
        owner: owner.to_string(),
        name: name.replace(".git", ""),
        url: uri.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(uri: &str) -> RemoteDescriptor {
        parse_remote_url(ORIGIN, uri).expect("URL should parse")
    }

    #[test]
    fn test_url_shapes() {
        let cases = [
            ("https://github.com/acme/widget.git", HostingKind::GitHub),
            ("https://github.com/acme/widget", HostingKind::GitHub),
            ("ssh://git@gitlab.com/acme/widget.git", HostingKind::GitLab),
            ("git@codeberg.org:acme/widget.git", HostingKind::Codeberg),
            ("https://git.example.org/acme/widget.git", HostingKind::Other),
            ("git@github.example.com:acme/widget.git", HostingKind::Other),
        ];

        for (uri, kind) in cases {
            let remote = parse(uri);
            assert_eq!(remote.kind, kind, "{}", uri);
            assert_eq!(remote.owner, "acme", "{}", uri);
            assert_eq!(remote.name, "widget", "{}", uri);
            assert_eq!(remote.url, uri);
        }
    }

    #[test]
    fn test_nested_groups_use_last_two_segments() {
        let remote = parse("https://gitlab.com/group/subgroup/project.git");
        assert_eq!(remote.owner, "subgroup");
        assert_eq!(remote.name, "project");
    }

    #[test]
    fn test_git_literal_is_stripped_anywhere() {
        let remote = parse("https://github.com/acme/my.github.io.git");
        assert_eq!(remote.name, "myhub.io");
        assert!(!remote.name.contains(".git"));
    }

    #[test]
    fn test_trailing_slash_is_ignored() {
        let remote = parse("https://codeberg.org/acme/widget/");
        assert_eq!(remote.owner, "acme");
        assert_eq!(remote.name, "widget");
    }

    #[test]
    fn test_local_path_has_no_host() {
        let remote = parse("/srv/git/acme/widget.git");
        assert_eq!(remote.kind, HostingKind::Other);
        assert_eq!(remote.owner, "acme");
        assert_eq!(remote.name, "widget");
    }

    #[test]
    fn test_single_segment_is_malformed() {
        let err = parse_remote_url(ORIGIN, "https://github.com/widget.git").unwrap_err();
        assert!(matches!(err, GitError::MalformedRemote { .. }));
    }

    #[test]
    fn test_host_match_is_exact() {
        assert_eq!(HostingKind::from_host("github.com"), HostingKind::GitHub);
        assert_eq!(HostingKind::from_host("www.github.com"), HostingKind::Other);
        assert_eq!(HostingKind::from_host("gitlab.example.com"), HostingKind::Other);
        assert_eq!(HostingKind::Codeberg.to_string(), "CODEBERG");
    }
}
