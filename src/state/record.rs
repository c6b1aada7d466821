use chrono::{DateTime, Utc};

use super::{Boundary, GroupBuyStatus};

/// Group-buy record in canonical shape. Built once at the API boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupBuyRecord {
    pub id: u64,
    pub title: Option<String>,
    /// Status as persisted by the backend
    pub status: GroupBuyStatus,
    /// Recruiting/bidding window
    pub start_time: Boundary,
    pub end_time: Boundary,
    /// Buyer final-selection deadline
    pub final_selection_end: Boundary,
    /// Seller final-selection deadline
    pub seller_selection_end: Boundary,
}

impl GroupBuyRecord {
    pub fn new(id: u64, status: GroupBuyStatus) -> Self {
        Self {
            id,
            title: None,
            status,
            start_time: Boundary::Absent,
            end_time: Boundary::Absent,
            final_selection_end: Boundary::Absent,
            seller_selection_end: Boundary::Absent,
        }
    }

    /// Status to display at `now`.
    pub fn effective_status(&self, now: DateTime<Utc>) -> GroupBuyStatus {
        crate::lifecycle::derive_status(&self.status, &self.end_time, now)
    }

    /// Label for logs: title if present, otherwise `#id`.
    pub fn display_name(&self) -> String {
        match &self.title {
            Some(title) => title.clone(),
            None => format!("#{}", self.id),
        }
    }
}
