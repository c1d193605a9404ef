//! Last-update diff for research update feeds.
//!
//! Only the tail of the feed is inspected: the length of both sequences and
//! the status of their last entries. Edits to earlier entries, reordering and
//! deletions are not tracked, so a deletion followed by an append in one
//! write can go unnoticed.

use crate::domain::ResearchUpdate;

/// Outcome of comparing two update feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LastUpdateDiff<'a> {
    /// The current feed has no updates.
    EmptyFeed,
    /// The feed did not grow and its last status is unchanged.
    NoNewUpdate,
    /// The last update is still a draft.
    Draft,
    /// The last update was newly published.
    Published(&'a ResearchUpdate),
}

impl<'a> LastUpdateDiff<'a> {
    /// The update to announce, if any.
    pub fn published(self) -> Option<&'a ResearchUpdate> {
        match self {
            Self::Published(update) => Some(update),
            _ => None,
        }
    }

    /// Short reason used in logs.
    pub fn reason(&self) -> &'static str {
        match self {
            Self::EmptyFeed => "no updates",
            Self::NoNewUpdate => "no new update",
            Self::Draft => "update is a draft",
            Self::Published(_) => "update published",
        }
    }
}

/// Compare the previous and current update feeds.
///
/// Rules, first match wins:
/// 1. an empty current feed has nothing to announce;
/// 2. if the feed did not grow and the last status is unchanged, nothing new happened;
/// 3. a draft last update is not announced;
/// 4. otherwise the current last update is announced.
pub fn diff_last_update<'a>(
    prev: &[ResearchUpdate],
    curr: &'a [ResearchUpdate],
) -> LastUpdateDiff<'a> {
    let Some(curr_last) = curr.last() else {
        return LastUpdateDiff::EmptyFeed;
    };
    let prev_last = prev.last();

    let same_status = prev_last.is_some_and(|p| p.status == curr_last.status);
    if prev.len() >= curr.len() && same_status {
        return LastUpdateDiff::NoNewUpdate;
    }

    if curr_last.status.is_draft() {
        return LastUpdateDiff::Draft;
    }

    LastUpdateDiff::Published(curr_last)
}

/// Return the update to announce, if this write published a new last update.
pub fn newly_published_update<'a>(
    prev: &[ResearchUpdate],
    curr: &'a [ResearchUpdate],
) -> Option<&'a ResearchUpdate> {
    diff_last_update(prev, curr).published()
}

/// Check if this write published a new last update.
pub fn is_newly_published_last_update(prev: &[ResearchUpdate], curr: &[ResearchUpdate]) -> bool {
    newly_published_update(prev, curr).is_some()
}
