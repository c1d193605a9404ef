//! Content records as they appear in a single document snapshot.
//!
//! Records are read-only views. Optional fields stay `Option` so that a
//! partially written document still deserializes; consumers substitute
//! [`UNKNOWN`] where a value is needed.

mod change;
mod content;
mod moderation;
mod research;

pub use change::Change;
pub use content::{LibraryItem, MapPin};
pub use moderation::{ModerationStatus, Moderated};
pub use research::{ResearchItem, ResearchUpdate, UpdateStatus};

/// Sentinel used in place of a missing field.
pub const UNKNOWN: &str = "unknown";
