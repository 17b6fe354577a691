use serde::{Deserialize, Serialize};

/// Kind of symbolic name decorating a commit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RefCategory {
    Branch,
    Remote,
    Tag,
    Head,
    Other,
}

/// A decoded reference attached to a commit
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Reference {
    /// Namespaced identifier, unique across categories (`branch:main`, `tag:v1.0`, `HEAD`)
    pub id: String,
    /// Display name shown by the renderer
    pub name: String,
    /// Category of the reference
    pub category: RefCategory,
}

impl Reference {
    /// The symbolic `HEAD` pointer
    pub fn head() -> Self {
        Self {
            id: "HEAD".to_string(),
            name: "HEAD".to_string(),
            category: RefCategory::Head,
        }
    }

    /// A local branch, namespaced as `branch:<name>`
    pub fn branch(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id: format!("branch:{name}"),
            name,
            category: RefCategory::Branch,
        }
    }

    /// A tag, namespaced as `tag:<name>`
    pub fn tag(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id: format!("tag:{name}"),
            name,
            category: RefCategory::Tag,
        }
    }

    /// A remote-tracking branch; the compound `remote/branch` token is its own id
    pub fn remote(token: impl Into<String>) -> Self {
        let token = token.into();
        Self {
            id: token.clone(),
            name: token,
            category: RefCategory::Remote,
        }
    }

    pub fn is_head(&self) -> bool {
        self.category == RefCategory::Head
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_branch_and_tag_ids_do_not_collide() {
        let branch = Reference::branch("v1.0");
        let tag = Reference::tag("v1.0");
        assert_eq!(branch.name, tag.name);
        assert_ne!(branch.id, tag.id);
        assert_eq!(branch.id, "branch:v1.0");
        assert_eq!(tag.id, "tag:v1.0");
    }

    #[test]
    fn test_remote_keeps_compound_name() {
        let remote = Reference::remote("origin/main");
        assert_eq!(remote.id, "origin/main");
        assert_eq!(remote.category, RefCategory::Remote);
    }

    #[test]
    fn test_category_serializes_lowercase() {
        let json = serde_json::to_string(&RefCategory::Remote).unwrap();
        assert_eq!(json, "\"remote\"");
    }
}
