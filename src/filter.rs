//! Client-side search over a commit list
//!
//! Filtering happens before layout. Parents removed by the filter are not
//! re-linked to surviving ancestors, so laying out a filtered list leaves
//! their lanes dangling.

use crate::model::Commit;

/// Case-insensitive substring query
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilter {
    query: String,
}

impl SearchFilter {
    pub fn new(query: impl AsRef<str>) -> Self {
        Self {
            query: query.as_ref().trim().to_lowercase(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.query.is_empty()
    }

    /// Matches on subject, author, reference names, or an id prefix
    pub fn matches(&self, commit: &Commit) -> bool {
        if self.is_empty() {
            return true;
        }

        commit.id.to_lowercase().starts_with(&self.query)
            || commit.subject.to_lowercase().contains(&self.query)
            || commit.author.to_lowercase().contains(&self.query)
            || commit
                .references
                .iter()
                .any(|reference| reference.name.to_lowercase().contains(&self.query))
    }
}

/// Commits matching `filter`, in their original order
pub fn filter_commits(commits: &[Commit], filter: &SearchFilter) -> Vec<Commit> {
    commits
        .iter()
        .filter(|commit| filter.matches(commit))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Reference;

    fn history() -> Vec<Commit> {
        vec![
            Commit::new("abc123", ["def456"])
                .with_subject("Fix lane colors")
                .with_author("Ada"),
            Commit::new("def456", ["0a0b0c"])
                .with_subject("Add parser")
                .with_author("Grace")
                .with_references(vec![Reference::tag("v1.0")]),
            Commit::new("0a0b0c", Vec::<String>::new()).with_subject("Initial commit"),
        ]
    }

    fn ids(commits: &[Commit]) -> Vec<&str> {
        commits.iter().map(|c| c.id.as_str()).collect()
    }

    #[test]
    fn test_empty_query_matches_everything() {
        let filter = SearchFilter::new("   ");
        assert!(filter.is_empty());
        assert_eq!(filter_commits(&history(), &filter).len(), 3);
    }

    #[test]
    fn test_matches_fields_case_insensitively() {
        let commits = history();
        assert_eq!(ids(&filter_commits(&commits, &SearchFilter::new("LANE"))), vec!["abc123"]);
        assert_eq!(ids(&filter_commits(&commits, &SearchFilter::new("grace"))), vec!["def456"]);
        assert_eq!(ids(&filter_commits(&commits, &SearchFilter::new("v1."))), vec!["def456"]);
        assert_eq!(ids(&filter_commits(&commits, &SearchFilter::new("0A0B"))), vec!["0a0b0c"]);
    }

    #[test]
    fn test_id_matches_by_prefix_only() {
        let commits = history();
        assert!(filter_commits(&commits, &SearchFilter::new("123")).is_empty());
    }
}
