//! Reference decoding
//!
//! Turns the raw decoration tokens attached to a commit (`HEAD -> main`,
//! `tag: v1.0`, `origin/main`, `main`) into typed [`Reference`] records.
//!
//! ## Token rules
//!
//! Applied per token, first match wins:
//!
//! 1. contains `HEAD ->`: a `HEAD` reference plus a branch for the name after the arrow
//! 2. exactly `HEAD`: a `HEAD` reference
//! 3. `tag:` prefix (case-insensitive), optional whitespace, then the name: a tag
//! 4. contains `/`: a remote-tracking branch, id is the raw token
//! 5. anything else: a local branch
//!
//! When the decoder knows the repository's remote names, rule 4 only
//! applies to tokens whose first path segment is one of them, so local
//! branches like `release/v2` decode as branches.

use indexmap::IndexMap;

use crate::model::Reference;

const HEAD: &str = "HEAD";
const HEAD_ARROW: &str = "HEAD ->";
const TAG_PREFIX: &str = "tag:";

/// Decoder for decoration tokens
#[derive(Debug, Clone, Default)]
pub struct ReferenceDecoder {
    remotes: Vec<String>,
}

impl ReferenceDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict remote detection to tokens starting with one of `remotes`
    pub fn with_remotes<I, S>(mut self, remotes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.remotes = remotes.into_iter().map(Into::into).collect();
        self
    }

    /// Decode a commit's tokens, de-duplicated by id in first-occurrence order
    pub fn decode<S: AsRef<str>>(&self, tokens: &[S]) -> Vec<Reference> {
        let mut decoded: IndexMap<String, Reference> = IndexMap::new();

        for token in tokens {
            for reference in self.decode_token(token.as_ref()) {
                decoded.entry(reference.id.clone()).or_insert(reference);
            }
        }

        decoded.into_values().collect()
    }

    fn decode_token(&self, token: &str) -> Vec<Reference> {
        let token = token.trim();
        if token.is_empty() {
            return Vec::new();
        }

        if let Some(index) = token.find(HEAD_ARROW) {
            let target = token[index + HEAD_ARROW.len()..].trim();
            let mut references = vec![Reference::head()];
            if !target.is_empty() {
                references.push(Reference::branch(target));
            }
            return references;
        }

        if token == HEAD {
            return vec![Reference::head()];
        }

        if let Some(name) = strip_tag_prefix(token) {
            return vec![Reference::tag(name)];
        }

        if self.is_remote(token) {
            return vec![Reference::remote(token)];
        }

        vec![Reference::branch(token)]
    }

    fn is_remote(&self, token: &str) -> bool {
        let Some((remote, _)) = token.split_once('/') else {
            return false;
        };
        self.remotes.is_empty() || self.remotes.iter().any(|known| known == remote)
    }
}

/// Decode tokens with the default rules
pub fn decode_references<S: AsRef<str>>(tokens: &[S]) -> Vec<Reference> {
    ReferenceDecoder::new().decode(tokens)
}

/// Split a `%D` style decoration string (`HEAD -> main, origin/main, tag: v1`) into tokens
pub fn split_decorations(decorations: &str) -> Vec<String> {
    decorations
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

fn strip_tag_prefix(token: &str) -> Option<&str> {
    let prefix = token.get(..TAG_PREFIX.len())?;
    if !prefix.eq_ignore_ascii_case(TAG_PREFIX) {
        return None;
    }
    let name = token[TAG_PREFIX.len()..].trim_start();
    (!name.is_empty()).then_some(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RefCategory;
    use pretty_assertions::assert_eq;

    fn ids(references: &[Reference]) -> Vec<&str> {
        references.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn test_head_arrow_emits_head_and_branch() {
        let refs = decode_references(&["HEAD -> main"]);
        assert_eq!(ids(&refs), vec!["HEAD", "branch:main"]);
        assert!(refs[0].is_head());
        assert!(!refs[1].is_head());
        assert_eq!(refs[1].category, RefCategory::Branch);
        assert_eq!(refs[1].name, "main");
    }

    #[test]
    fn test_head_arrow_to_slashed_branch_is_local() {
        let refs = decode_references(&["HEAD -> feature/login"]);
        assert_eq!(ids(&refs), vec!["HEAD", "branch:feature/login"]);
    }

    #[test]
    fn test_detached_head() {
        let refs = decode_references(&["HEAD"]);
        assert_eq!(refs, vec![Reference::head()]);
    }

    #[test]
    fn test_tag_prefix_is_case_insensitive() {
        let refs = decode_references(&["tag: v1.0", "TAG:v2.0", "Tag:   v3"]);
        assert_eq!(ids(&refs), vec!["tag:v1.0", "tag:v2.0", "tag:v3"]);
        assert!(refs.iter().all(|r| r.category == RefCategory::Tag));
        assert_eq!(refs[1].name, "v2.0");
    }

    #[test]
    fn test_slash_token_is_remote() {
        let refs = decode_references(&["origin/main", "release/v2"]);
        assert_eq!(ids(&refs), vec!["origin/main", "release/v2"]);
        assert!(refs.iter().all(|r| r.category == RefCategory::Remote));
    }

    #[test]
    fn test_known_remotes_narrow_remote_detection() {
        let decoder = ReferenceDecoder::new().with_remotes(["origin"]);
        let refs = decoder.decode(&["HEAD -> main", "tag: v2.0", "origin/main", "release/v2"]);
        assert_eq!(
            ids(&refs),
            vec!["HEAD", "branch:main", "tag:v2.0", "origin/main", "branch:release/v2"]
        );
        assert_eq!(refs[3].category, RefCategory::Remote);
        assert_eq!(refs[4].category, RefCategory::Branch);
    }

    #[test]
    fn test_plain_token_is_branch() {
        let refs = decode_references(&["main"]);
        assert_eq!(refs, vec![Reference::branch("main")]);
    }

    #[test]
    fn test_deduplicates_keeping_first_occurrence() {
        let refs = decode_references(&["main", "HEAD -> main", "HEAD", "main"]);
        assert_eq!(ids(&refs), vec!["branch:main", "HEAD"]);
    }

    #[test]
    fn test_blank_tokens_are_ignored() {
        let refs = decode_references(&["", "   ", "tag:"]);
        // `tag:` with no name falls through to the branch rule
        assert_eq!(ids(&refs), vec!["branch:tag:"]);
    }

    #[test]
    fn test_split_decorations() {
        assert_eq!(
            split_decorations("HEAD -> main, origin/main, tag: v1.0"),
            vec!["HEAD -> main", "origin/main", "tag: v1.0"]
        );
        assert!(split_decorations("").is_empty());
        assert!(split_decorations(" , ").is_empty());
    }
}
