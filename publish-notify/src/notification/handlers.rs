//! Per-collection entry points invoked for each document write.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::detector::is_newly_accepted;
use super::differ::diff_last_update;
use super::dispatcher::{DispatchOutcome, NotificationDispatcher};
use super::message::NotificationMessage;
use super::transport::WebhookResponse;
use crate::Result;
use crate::config::NotifyConfig;
use crate::domain::{Change, LibraryItem, MapPin, ResearchItem};

/// A document write tagged with the collection it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "collection", rename_all = "snake_case")]
pub enum ChangeEvent {
    MapPin(Change<MapPin>),
    LibraryItem(Change<LibraryItem>),
    Research(Change<ResearchItem>),
}

impl ChangeEvent {
    pub fn collection(&self) -> &'static str {
        match self {
            Self::MapPin(_) => "map_pin",
            Self::LibraryItem(_) => "library_item",
            Self::Research(_) => "research",
        }
    }
}

/// What happened to one document write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandleOutcome {
    /// The write did not publish anything new.
    NotEligible,
    /// Eligible, but no webhook is configured.
    Skipped,
    /// Eligible and announced.
    Sent(WebhookResponse),
}

impl From<DispatchOutcome> for HandleOutcome {
    fn from(outcome: DispatchOutcome) -> Self {
        match outcome {
            DispatchOutcome::Skipped => Self::Skipped,
            DispatchOutcome::Sent(response) => Self::Sent(response),
        }
    }
}

/// Announces first publications of pins, library items and research updates.
///
/// Every call looks only at the snapshot pair it is given. Redelivered or
/// reordered writes are not deduplicated.
#[derive(Clone)]
pub struct PublishNotifier {
    config: NotifyConfig,
    dispatcher: NotificationDispatcher,
}

impl PublishNotifier {
    pub fn new(config: NotifyConfig, dispatcher: NotificationDispatcher) -> Self {
        Self { config, dispatcher }
    }

    pub fn config(&self) -> &NotifyConfig {
        &self.config
    }

    /// Route a tagged change to its collection handler.
    pub async fn handle(&self, event: &ChangeEvent) -> Result<HandleOutcome> {
        match event {
            ChangeEvent::MapPin(change) => self.on_map_pin_changed(change).await,
            ChangeEvent::LibraryItem(change) => self.on_library_item_changed(change).await,
            ChangeEvent::Research(change) => self.on_research_changed(change).await,
        }
    }

    pub async fn on_map_pin_changed(&self, change: &Change<MapPin>) -> Result<HandleOutcome> {
        let Some(pin) = change.after.as_ref() else {
            debug!("Map pin deleted, nothing to announce");
            return Ok(HandleOutcome::NotEligible);
        };

        if !is_newly_accepted(change.before.as_ref(), pin) {
            debug!(
                pin_id = pin.id.as_deref().unwrap_or_default(),
                moderation = %pin.moderation,
                "Map pin not newly accepted"
            );
            return Ok(HandleOutcome::NotEligible);
        }

        self.announce(NotificationMessage::pin_published(pin)).await
    }

    pub async fn on_library_item_changed(
        &self,
        change: &Change<LibraryItem>,
    ) -> Result<HandleOutcome> {
        let Some(item) = change.after.as_ref() else {
            debug!("Library item deleted, nothing to announce");
            return Ok(HandleOutcome::NotEligible);
        };

        if !is_newly_accepted(change.before.as_ref(), item) {
            debug!(
                slug = item.slug.as_deref().unwrap_or_default(),
                moderation = %item.moderation,
                "Library item not newly accepted"
            );
            return Ok(HandleOutcome::NotEligible);
        }

        self.announce(NotificationMessage::library_item_published(item))
            .await
    }

    pub async fn on_research_changed(
        &self,
        change: &Change<ResearchItem>,
    ) -> Result<HandleOutcome> {
        let Some(research) = change.after.as_ref() else {
            debug!("Research deleted, nothing to announce");
            return Ok(HandleOutcome::NotEligible);
        };

        let previous_updates = change
            .before
            .as_ref()
            .map(|before| before.updates.as_slice())
            .unwrap_or_default();

        let diff = diff_last_update(previous_updates, &research.updates);
        let Some(update) = diff.published() else {
            debug!(
                slug = research.slug.as_deref().unwrap_or_default(),
                previous = previous_updates.len(),
                current = research.updates.len(),
                reason = diff.reason(),
                "No newly published research update"
            );
            return Ok(HandleOutcome::NotEligible);
        };

        let message = NotificationMessage::research_update_published(research, update);
        self.announce(message).await
    }

    async fn announce(&self, message: NotificationMessage) -> Result<HandleOutcome> {
        info!(event_type = message.event_type(), "Announcing publication");
        let text = message.render(&self.config.site_url);
        let outcome = self
            .dispatcher
            .dispatch(self.config.webhook_url.as_deref(), &text)
            .await?;
        Ok(outcome.into())
    }
}
