//! Moderation transition check for pins and library items.

use crate::domain::Moderated;

/// Check if `curr` is the first accepted snapshot of a record.
///
/// A record created already accepted (`prev` is `None`) counts as newly
/// accepted. Re-saving an accepted record does not.
pub fn is_newly_accepted<R: Moderated>(prev: Option<&R>, curr: &R) -> bool {
    let previously_accepted = prev.is_some_and(|p| p.moderation_status().is_accepted());
    curr.moderation_status().is_accepted() && !previously_accepted
}
