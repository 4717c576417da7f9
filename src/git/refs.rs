//! Reference naming helpers.

/// Prefix of every tag reference
pub const REFS_TAGS: &str = "refs/tags/";

/// Prefix of every local branch reference
pub const REFS_HEADS: &str = "refs/heads/";

/// Strip [`REFS_TAGS`] from a full reference name.
///
/// Returns an empty string when the reference is not a tag.
pub fn extract_tag_name(full_name: &str) -> &str {
    full_name.strip_prefix(REFS_TAGS).unwrap_or("")
}

/// Strip [`REFS_HEADS`] from a full reference name.
///
/// Returns an empty string when the reference is not a local branch.
pub fn extract_head_name(full_name: &str) -> &str {
    full_name.strip_prefix(REFS_HEADS).unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_name_round_trips_through_prefix() {
        for name in ["v1.0.0", "release/2024-01", "nested/deep/tag"] {
            let full = format!("{}{}", REFS_TAGS, name);
            assert_eq!(extract_tag_name(&full), name);
        }
    }

    #[test]
    fn test_head_name_round_trips_through_prefix() {
        for name in ["main", "feature/login", "release-1.x"] {
            let full = format!("{}{}", REFS_HEADS, name);
            assert_eq!(extract_head_name(&full), name);
        }
    }

    #[test]
    fn test_foreign_refs_yield_empty_names() {
        assert_eq!(extract_tag_name("refs/heads/main"), "");
        assert_eq!(extract_tag_name("v1.0.0"), "");
        assert_eq!(extract_head_name("refs/tags/v1.0.0"), "");
        assert_eq!(extract_head_name("refs/remotes/origin/main"), "");
        assert_eq!(extract_head_name("HEAD"), "");
    }
}
