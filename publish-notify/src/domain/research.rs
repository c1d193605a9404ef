//! Research items and their update feed.

use serde::{Deserialize, Serialize};

use crate::utils::json::{null_as_default, nullable_string_list};

/// Publication state of a single research update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpdateStatus {
    Draft,
    Published,
    /// Missing or unrecognised value.
    #[default]
    #[serde(other)]
    Unknown,
}

impl UpdateStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Published => "published",
            Self::Unknown => "unknown",
        }
    }

    pub fn is_draft(&self) -> bool {
        matches!(self, Self::Draft)
    }
}

impl std::fmt::Display for UpdateStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One progress post inside a research item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResearchUpdate {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: UpdateStatus,
    #[serde(default)]
    pub title: Option<String>,
    /// Authors of the update. Expected to hold a single person.
    #[serde(default, deserialize_with = "nullable_string_list")]
    pub collaborators: Option<Vec<String>>,
}

impl ResearchUpdate {
    pub fn new(id: impl Into<String>, status: UpdateStatus) -> Self {
        Self {
            id: Some(id.into()),
            status,
            title: None,
            collaborators: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_collaborators<I, S>(mut self, collaborators: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.collaborators = Some(collaborators.into_iter().map(Into::into).collect());
        self
    }

    /// First named collaborator, treated as the sole author.
    pub fn author(&self) -> Option<&str> {
        self.collaborators
            .as_deref()?
            .first()
            .map(String::as_str)
            .filter(|name| !name.is_empty())
    }
}

/// A research item. The last entry of `updates` is the most recent one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResearchItem {
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub updates: Vec<ResearchUpdate>,
}

impl ResearchItem {
    pub fn new(slug: impl Into<String>, updates: Vec<ResearchUpdate>) -> Self {
        Self {
            slug: Some(slug.into()),
            updates,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_author_uses_first_collaborator() {
        let update = ResearchUpdate::new("u1", UpdateStatus::Published)
            .with_collaborators(["alice", "bob"]);
        assert_eq!(update.author(), Some("alice"));
    }

    #[test]
    fn test_author_missing() {
        let update = ResearchUpdate::new("u1", UpdateStatus::Published);
        assert_eq!(update.author(), None);

        let update = update.with_collaborators(Vec::<String>::new());
        assert_eq!(update.author(), None);

        let update = ResearchUpdate::new("u1", UpdateStatus::Published).with_collaborators([""]);
        assert_eq!(update.author(), None);
    }

    #[test]
    fn test_deserialize_research_document() {
        let item: ResearchItem = serde_json::from_str(
            r#"{
                "slug": "bottle-bricks",
                "updates": [
                    {"_id": "a", "status": "published", "title": "Intro", "collaborators": ["alice"]},
                    {"_id": "b", "status": "draft", "title": "Next", "collaborators": null}
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(item.slug.as_deref(), Some("bottle-bricks"));
        assert_eq!(item.updates.len(), 2);
        assert_eq!(item.updates[1].status, UpdateStatus::Draft);
        assert_eq!(item.updates[1].author(), None);
    }

    #[test]
    fn test_null_fields_degrade() {
        let item: ResearchItem = serde_json::from_str(
            r#"{
                "slug": "r",
                "updates": [
                    {"_id": "a", "status": null, "title": "Intro", "collaborators": [null, "bob"]}
                ]
            }"#,
        )
        .unwrap();
        let update = &item.updates[0];
        assert_eq!(update.status, UpdateStatus::Unknown);
        assert_eq!(update.author(), None);

        let item: ResearchItem = serde_json::from_str(r#"{"slug":"r","updates":null}"#).unwrap();
        assert!(item.updates.is_empty());
    }

    #[test]
    fn test_missing_updates_is_empty() {
        let item: ResearchItem = serde_json::from_str(r#"{"slug":"x"}"#).unwrap();
        assert!(item.updates.is_empty());
    }
}
