//! Map pins and library items.

use serde::{Deserialize, Serialize};

use super::{ModerationStatus, Moderated};
use crate::utils::json::null_as_default;

/// A point of interest on the community map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapPin {
    /// Pin id; for profile pins this is the owner's username.
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    /// Profile type of the pin owner (workspace, member, ...).
    #[serde(rename = "type", default)]
    pub pin_type: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub moderation: ModerationStatus,
}

impl MapPin {
    pub fn new(id: impl Into<String>, pin_type: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            pin_type: Some(pin_type.into()),
            moderation: ModerationStatus::default(),
        }
    }

    pub fn with_moderation(mut self, moderation: ModerationStatus) -> Self {
        self.moderation = moderation;
        self
    }
}

impl Moderated for MapPin {
    fn moderation_status(&self) -> ModerationStatus {
        self.moderation
    }
}

/// A project in the library (how-to).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibraryItem {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    /// Username of the author.
    #[serde(rename = "_createdBy", default)]
    pub created_by: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub moderation: ModerationStatus,
}

impl LibraryItem {
    pub fn new(
        title: impl Into<String>,
        created_by: impl Into<String>,
        slug: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            created_by: Some(created_by.into()),
            title: Some(title.into()),
            slug: Some(slug.into()),
            moderation: ModerationStatus::default(),
        }
    }

    pub fn with_moderation(mut self, moderation: ModerationStatus) -> Self {
        self.moderation = moderation;
        self
    }
}

impl Moderated for LibraryItem {
    fn moderation_status(&self) -> ModerationStatus {
        self.moderation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_map_pin_document() {
        let pin: MapPin = serde_json::from_str(
            r#"{"_id":"plastic-hub","type":"workspace","moderation":"accepted","location":{"lat":1.0}}"#,
        )
        .unwrap();
        assert_eq!(pin.id.as_deref(), Some("plastic-hub"));
        assert_eq!(pin.pin_type.as_deref(), Some("workspace"));
        assert_eq!(pin.moderation_status(), ModerationStatus::Accepted);
    }

    #[test]
    fn test_deserialize_partial_library_item() {
        let item: LibraryItem = serde_json::from_str(r#"{"title":"Shredder"}"#).unwrap();
        assert_eq!(item.title.as_deref(), Some("Shredder"));
        assert!(item.created_by.is_none());
        assert!(item.slug.is_none());
        assert_eq!(item.moderation, ModerationStatus::Unknown);
    }

    #[test]
    fn test_null_moderation_is_unknown() {
        let pin: MapPin =
            serde_json::from_str(r#"{"_id":"p","type":"member","moderation":null}"#).unwrap();
        assert_eq!(pin.moderation_status(), ModerationStatus::Unknown);

        let item: LibraryItem =
            serde_json::from_str(r#"{"title":"T","moderation":null,"slug":null}"#).unwrap();
        assert_eq!(item.moderation_status(), ModerationStatus::Unknown);
        assert!(item.slug.is_none());
    }
}
