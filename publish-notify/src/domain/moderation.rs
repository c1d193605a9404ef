//! Moderation lifecycle of user-submitted content.

use serde::{Deserialize, Serialize};

/// Moderation state of a pin or library item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ModerationStatus {
    /// Still being written by its author.
    Draft,
    /// Submitted and waiting for a moderator.
    #[serde(alias = "pending")]
    AwaitingModeration,
    /// Sent back to the author with change requests.
    ImprovementsNeeded,
    /// Declined by a moderator.
    Rejected,
    /// Approved and publicly visible.
    Accepted,
    /// Missing or unrecognised value.
    #[default]
    #[serde(other)]
    Unknown,
}

impl ModerationStatus {
    /// Convert to the stored string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::AwaitingModeration => "awaiting-moderation",
            Self::ImprovementsNeeded => "improvements-needed",
            Self::Rejected => "rejected",
            Self::Accepted => "accepted",
            Self::Unknown => "unknown",
        }
    }

    /// Parse from the stored string representation.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "draft" => Some(Self::Draft),
            "awaiting-moderation" | "pending" => Some(Self::AwaitingModeration),
            "improvements-needed" => Some(Self::ImprovementsNeeded),
            "rejected" => Some(Self::Rejected),
            "accepted" => Some(Self::Accepted),
            _ => None,
        }
    }

    /// Check if a record in this state is publicly visible.
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }
}

impl std::fmt::Display for ModerationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A record that goes through moderation.
pub trait Moderated {
    fn moderation_status(&self) -> ModerationStatus;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_roundtrip() {
        for status in [
            ModerationStatus::Draft,
            ModerationStatus::AwaitingModeration,
            ModerationStatus::ImprovementsNeeded,
            ModerationStatus::Rejected,
            ModerationStatus::Accepted,
        ] {
            assert_eq!(ModerationStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(ModerationStatus::parse("published"), None);
    }

    #[test]
    fn test_deserialize_unknown_and_alias() {
        let status: ModerationStatus = serde_json::from_str("\"pending\"").unwrap();
        assert_eq!(status, ModerationStatus::AwaitingModeration);

        let status: ModerationStatus = serde_json::from_str("\"archived\"").unwrap();
        assert_eq!(status, ModerationStatus::Unknown);
        assert!(!status.is_accepted());
    }
}
