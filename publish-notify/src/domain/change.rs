//! Before/after snapshot pair delivered per document write.

use serde::{Deserialize, Serialize};

/// One document write as seen by the trigger.
///
/// `before` is missing for a create and `after` is missing for a delete.
/// Pairs arrive at least once and in no particular order relative to other
/// writes of the same document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Change<T> {
    pub before: Option<T>,
    pub after: Option<T>,
}

impl<T> Change<T> {
    pub fn new(before: Option<T>, after: Option<T>) -> Self {
        Self { before, after }
    }

    pub fn created(after: T) -> Self {
        Self {
            before: None,
            after: Some(after),
        }
    }

    pub fn updated(before: T, after: T) -> Self {
        Self {
            before: Some(before),
            after: Some(after),
        }
    }

    /// Check if the document no longer exists after this write.
    pub fn is_deletion(&self) -> bool {
        self.after.is_none()
    }
}
