use serde::{Deserialize, Serialize};
use std::fmt;

/// Group-buy lifecycle status as reported by the backend.
///
/// Every consumer (resolver, countdown, access gate) matches on this enum
/// instead of comparing raw strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum GroupBuyStatus {
    Recruiting,
    Bidding,
    FinalSelectionBuyers,
    FinalSelectionSeller,
    Confirmed,
    InProgress,
    Completed,
    Cancelled,
    Expired,
    /// Wire value we don't recognize. Keeps the original text.
    Unknown(String),
}

impl GroupBuyStatus {
    /// Wire literal for this status.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Recruiting => "recruiting",
            Self::Bidding => "bidding",
            Self::FinalSelectionBuyers => "final_selection_buyers",
            Self::FinalSelectionSeller => "final_selection_seller",
            Self::Confirmed => "confirmed",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
            Self::Expired => "expired",
            Self::Unknown(raw) => raw,
        }
    }

    /// Locked states that display-time derivation never overrides.
    pub fn is_locked(&self) -> bool {
        matches!(self, Self::Completed | Self::Confirmed)
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown(_))
    }
}

impl From<&str> for GroupBuyStatus {
    fn from(raw: &str) -> Self {
        match raw.trim() {
            "recruiting" => Self::Recruiting,
            "bidding" => Self::Bidding,
            "final_selection_buyers" => Self::FinalSelectionBuyers,
            "final_selection_seller" => Self::FinalSelectionSeller,
            "confirmed" => Self::Confirmed,
            "in_progress" => Self::InProgress,
            "completed" => Self::Completed,
            "cancelled" => Self::Cancelled,
            "expired" => Self::Expired,
            other => Self::Unknown(other.to_string()),
        }
    }
}

impl From<String> for GroupBuyStatus {
    fn from(raw: String) -> Self {
        Self::from(raw.as_str())
    }
}

impl From<GroupBuyStatus> for String {
    fn from(status: GroupBuyStatus) -> Self {
        match status {
            GroupBuyStatus::Unknown(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for GroupBuyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
