//! Announcement text for each kind of publication.

use serde::{Deserialize, Serialize};

use crate::domain::{LibraryItem, MapPin, ResearchItem, ResearchUpdate, UNKNOWN};
use crate::utils::url::site_link;

/// A publication worth announcing, with every field already resolved.
///
/// Missing source fields are replaced by [`UNKNOWN`] when the message is built,
/// so rendering never fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotificationMessage {
    /// A map pin was accepted.
    PinPublished { pin_id: String, pin_type: String },
    /// A library project was accepted.
    LibraryItemPublished {
        title: String,
        created_by: String,
        slug: String,
    },
    /// A research item received a published update.
    ResearchUpdatePublished {
        author: String,
        title: String,
        slug: String,
        update_id: String,
    },
}

fn or_unknown(value: Option<&str>) -> String {
    value.unwrap_or(UNKNOWN).to_string()
}

impl NotificationMessage {
    pub fn pin_published(pin: &MapPin) -> Self {
        Self::PinPublished {
            pin_id: or_unknown(pin.id.as_deref()),
            pin_type: or_unknown(pin.pin_type.as_deref()),
        }
    }

    pub fn library_item_published(item: &LibraryItem) -> Self {
        Self::LibraryItemPublished {
            title: or_unknown(item.title.as_deref()),
            created_by: or_unknown(item.created_by.as_deref()),
            slug: or_unknown(item.slug.as_deref()),
        }
    }

    pub fn research_update_published(research: &ResearchItem, update: &ResearchUpdate) -> Self {
        Self::ResearchUpdatePublished {
            author: or_unknown(update.author()),
            title: or_unknown(update.title.as_deref()),
            slug: or_unknown(research.slug.as_deref()),
            update_id: or_unknown(update.id.as_deref()),
        }
    }

    /// Get the event type string used in logs.
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::PinPublished { .. } => "pin_published",
            Self::LibraryItemPublished { .. } => "library_item_published",
            Self::ResearchUpdatePublished { .. } => "research_update_published",
        }
    }

    /// Link to the published content on the site.
    pub fn link(&self, site_url: &str) -> String {
        match self {
            Self::PinPublished { pin_id, .. } => site_link(site_url, &format!("map/#{}", pin_id)),
            Self::LibraryItemPublished { slug, .. } => {
                site_link(site_url, &format!("library/{}", slug))
            }
            Self::ResearchUpdatePublished {
                slug, update_id, ..
            } => site_link(
                site_url,
                &format!("research/{}#update_{}", slug, update_id),
            ),
        }
    }

    /// Render the message text posted to the webhook.
    pub fn render(&self, site_url: &str) -> String {
        let link = self.link(site_url);
        match self {
            Self::PinPublished { pin_id, pin_type } => {
                format!("📍 *New {}* pin from {}. Location here <{}>", pin_type, pin_id, link)
            }
            Self::LibraryItemPublished {
                title, created_by, ..
            } => format!(
                "📓 New library project {} by {}, check it out: <{}>",
                title, created_by, link
            ),
            Self::ResearchUpdatePublished { author, title, .. } => format!(
                "📝 New update from {} in their research: {}\nLearn about it here: <{}>",
                author, title, link
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::UpdateStatus;

    #[test]
    fn test_library_item_message() {
        let item = LibraryItem::new("T", "Author", "s");
        let text = NotificationMessage::library_item_published(&item).render("https://x");

        assert!(text.contains("T"));
        assert!(text.contains("Author"));
        assert!(text.contains("https://x/library/s"));
        assert_eq!(
            text,
            "📓 New library project T by Author, check it out: <https://x/library/s>"
        );
    }

    #[test]
    fn test_pin_message() {
        let pin = MapPin::new("plastic-hub", "workspace");
        let text = NotificationMessage::pin_published(&pin).render("https://x/");
        assert_eq!(
            text,
            "📍 *New workspace* pin from plastic-hub. Location here <https://x/map/#plastic-hub>"
        );
    }

    #[test]
    fn test_research_update_message() {
        let research = ResearchItem::new("bottle-bricks", Vec::new());
        let update = ResearchUpdate::new("u42", UpdateStatus::Published)
            .with_title("First bricks")
            .with_collaborators(["alice", "bob"]);

        let text =
            NotificationMessage::research_update_published(&research, &update).render("https://x");
        assert_eq!(
            text,
            "📝 New update from alice in their research: First bricks\n\
             Learn about it here: <https://x/research/bottle-bricks#update_u42>"
        );
    }

    #[test]
    fn test_missing_fields_use_unknown() {
        let research = ResearchItem::default();
        let update = ResearchUpdate::default();
        let message = NotificationMessage::research_update_published(&research, &update);

        assert_eq!(
            message,
            NotificationMessage::ResearchUpdatePublished {
                author: "unknown".to_string(),
                title: "unknown".to_string(),
                slug: "unknown".to_string(),
                update_id: "unknown".to_string(),
            }
        );
        assert!(message.render("https://x").contains("New update from unknown"));

        let text = NotificationMessage::pin_published(&MapPin::default()).render("https://x");
        assert!(text.contains("*New unknown* pin from unknown"));

        let text =
            NotificationMessage::library_item_published(&LibraryItem::default()).render("https://x");
        assert!(text.contains("by unknown"));
    }

    #[test]
    fn test_event_type() {
        let message = NotificationMessage::pin_published(&MapPin::default());
        assert_eq!(message.event_type(), "pin_published");
    }
}
