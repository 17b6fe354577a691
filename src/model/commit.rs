use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::reference::Reference;

/// A commit row as delivered by the surrounding application, before sanitization
///
/// Every field is lenient: a missing id marks the row as malformed, and the
/// timestamp is kept as text until [`crate::input::sanitize`] parses it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawCommit {
    pub id: Option<String>,
    pub parent_ids: Vec<String>,
    pub subject: String,
    pub author: String,
    pub timestamp: Option<String>,
    /// Raw decoration tokens such as `HEAD -> main` or `tag: v1.0`
    pub references: Vec<String>,
}

/// An immutable, validated commit record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Commit {
    /// Unique hash
    pub id: String,
    /// First entry is the continuation parent, the rest are merge sources
    pub parent_ids: Vec<String>,
    pub subject: String,
    pub author: String,
    pub timestamp: Option<DateTime<Utc>>,
    pub references: Vec<Reference>,
}

impl Commit {
    /// Create a commit with only topology; subject and author are left empty
    pub fn new<I, S>(id: impl Into<String>, parent_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: id.into(),
            parent_ids: parent_ids.into_iter().map(Into::into).collect(),
            subject: String::new(),
            author: String::new(),
            timestamp: None,
            references: Vec::new(),
        }
    }

    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = subject.into();
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    pub fn with_references(mut self, references: Vec<Reference>) -> Self {
        self.references = references;
        self
    }

    /// The continuation parent, if any
    pub fn first_parent(&self) -> Option<&str> {
        self.parent_ids.first().map(String::as_str)
    }

    /// Parents after the first, i.e. the branches being merged in
    pub fn merge_sources(&self) -> &[String] {
        self.parent_ids.get(1..).unwrap_or(&[])
    }

    pub fn is_merge(&self) -> bool {
        self.parent_ids.len() > 1
    }

    pub fn is_root(&self) -> bool {
        self.parent_ids.is_empty()
    }
}
