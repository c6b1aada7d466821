mod countdown;
mod gate;
mod resolver;

pub use countdown::{
    compute_countdown, format_remaining, record_countdown, Countdown, CountdownPhase,
    CountdownState, ENDED_LABEL,
};
pub use gate::{can_view, is_ended_phase, AccessDecision, DenyReason};
pub use resolver::derive_status;

use crate::state::{GroupBuyRecord, GroupBuyStatus};
use chrono::{DateTime, Utc};

/// Everything a detail view needs for one record at one instant.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordView {
    pub status: GroupBuyStatus,
    pub countdown: Option<CountdownState>,
    pub access: AccessDecision,
}

/// Viewer's relationship to a record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Viewer {
    pub authenticated: bool,
    pub participant: bool,
}

/// Main entry point.
///
/// Resolves effective status, then countdown and access for that status.
pub fn evaluate(record: &GroupBuyRecord, viewer: Viewer, now: DateTime<Utc>) -> RecordView {
    let status = record.effective_status(now);
    let countdown = record_countdown(record, now);
    let access = can_view(&status, viewer.authenticated, viewer.participant);

    RecordView {
        status,
        countdown,
        access,
    }
}
