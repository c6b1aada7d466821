use chrono::{DateTime, Utc};

use crate::state::{Boundary, GroupBuyStatus};

/// Derive the display status from the persisted one.
///
/// A `recruiting` record whose deadline has passed shows as `expired`.
/// `completed` and `confirmed` are never overridden.
///
/// Deadline handling:
/// - malformed `end_time` counts as passed (recruiting → expired)
/// - absent `end_time` leaves the status as-is
pub fn derive_status(
    status: &GroupBuyStatus,
    end_time: &Boundary,
    now: DateTime<Utc>,
) -> GroupBuyStatus {
    if status.is_locked() {
        return status.clone();
    }

    match status {
        GroupBuyStatus::Recruiting if end_time.has_passed(now) => GroupBuyStatus::Expired,
        _ => status.clone(),
    }
}
