//! publish-notify library crate.
//!
//! Watches before/after snapshots of community content (map pins, library
//! projects and research items) and posts a single Discord message when a
//! record becomes publicly visible for the first time.
//!
//! The eligibility checks in [`notification::detector`] and
//! [`notification::differ`] and the text builders in
//! [`notification::message`] are pure. The only side effect lives behind
//! [`notification::WebhookTransport`].

pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod notification;
pub mod utils;

pub use config::NotifyConfig;
pub use error::{Error, Result};
