//! Publication notifications.
//!
//! A document write flows through three stages:
//!
//! 1. an eligibility check, [`detector`] for moderated records and
//!    [`differ`] for research update feeds;
//! 2. [`message`] renders the announcement text;
//! 3. [`NotificationDispatcher`] posts it once through a
//!    [`WebhookTransport`].
//!
//! [`PublishNotifier`] wires the stages together per collection.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use publish_notify::NotifyConfig;
//! use publish_notify::domain::{Change, MapPin, ModerationStatus};
//! use publish_notify::notification::{NotificationDispatcher, PublishNotifier, ReqwestTransport};
//!
//! let config = NotifyConfig::new("https://community.example.org")
//!     .with_webhook_url("https://discord.com/api/webhooks/...");
//! let transport = ReqwestTransport::new(config.request_timeout());
//! let notifier = PublishNotifier::new(config, NotificationDispatcher::new(Arc::new(transport)));
//!
//! let pin = MapPin::new("plastic-hub", "workspace").with_moderation(ModerationStatus::Accepted);
//! notifier.on_map_pin_changed(&Change::created(pin)).await?;
//! ```

pub mod detector;
pub mod differ;
pub mod dispatcher;
pub mod handlers;
pub mod message;
pub mod transport;

pub use detector::is_newly_accepted;
pub use differ::{
    LastUpdateDiff, diff_last_update, is_newly_published_last_update, newly_published_update,
};
pub use dispatcher::{DispatchOutcome, NotificationDispatcher};
pub use handlers::{ChangeEvent, HandleOutcome, PublishNotifier};
pub use message::NotificationMessage;
pub use transport::{ReqwestTransport, WebhookPayload, WebhookResponse, WebhookTransport};
