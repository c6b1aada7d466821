use chrono::{DateTime, Utc};

use super::derive_status;
use crate::state::{Boundary, GroupBuyRecord, GroupBuyStatus};

const MS_PER_SEC: u64 = 1000;
const SECS_PER_MIN: u64 = 60;
const SECS_PER_HOUR: u64 = 3600;
const SECS_PER_DAY: u64 = 86_400;

/// Shown once the target has passed.
pub const ENDED_LABEL: &str = "마감";

/// Remaining time toward one deadline.
#[derive(Debug, Clone, PartialEq)]
pub struct Countdown {
    /// Milliseconds until target, 0 once passed
    pub remaining_ms: u64,
    /// Remaining share of the window, 0-100
    pub progress_percent: f64,
    pub formatted: String,
}

impl Countdown {
    /// Countdown for a deadline that already passed (or can't be read).
    pub fn ended() -> Self {
        Self {
            remaining_ms: 0,
            progress_percent: 0.0,
            formatted: ENDED_LABEL.to_string(),
        }
    }

    pub fn is_ended(&self) -> bool {
        self.remaining_ms == 0
    }
}

/// Compute remaining time toward `target` within the `start..target` window.
///
/// A degenerate window (`target <= start`) reports 0% progress.
pub fn compute_countdown(
    target: DateTime<Utc>,
    start: DateTime<Utc>,
    now: DateTime<Utc>,
) -> Countdown {
    let remaining_ms = (target - now).num_milliseconds().max(0) as u64;
    let total_ms = (target - start).num_milliseconds();

    Countdown {
        remaining_ms,
        progress_percent: progress(remaining_ms, total_ms),
        formatted: format_remaining(remaining_ms),
    }
}

fn progress(remaining_ms: u64, total_ms: i64) -> f64 {
    if total_ms <= 0 {
        return 0.0;
    }
    (remaining_ms as f64 / total_ms as f64 * 100.0).clamp(0.0, 100.0)
}

/// Korean remaining-time label.
///
/// | Remaining   | Format          |
/// |-------------|-----------------|
/// | >= 1 day    | `{d}일 {h}시간`   |
/// | >= 1 hour   | `{h}시간 {m}분`   |
/// | >= 1 minute | `{m}분 {s}초`     |
/// | > 0         | `{s}초`          |
/// | 0           | `마감`           |
pub fn format_remaining(remaining_ms: u64) -> String {
    if remaining_ms == 0 {
        return ENDED_LABEL.to_string();
    }

    let secs = remaining_ms / MS_PER_SEC;
    let days = secs / SECS_PER_DAY;
    let hours = (secs % SECS_PER_DAY) / SECS_PER_HOUR;
    let minutes = (secs % SECS_PER_HOUR) / SECS_PER_MIN;
    let seconds = secs % SECS_PER_MIN;

    if days > 0 {
        format!("{}일 {}시간", days, hours)
    } else if hours > 0 {
        format!("{}시간 {}분", hours, minutes)
    } else if minutes > 0 {
        format!("{}분 {}초", minutes, seconds)
    } else {
        format!("{}초", seconds)
    }
}

/// Which deadline a countdown tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownPhase {
    Recruiting,
    Bidding,
    BuyerSelection,
    SellerSelection,
}

impl CountdownPhase {
    /// Phase for an effective status. `None` means no countdown is shown.
    pub fn for_status(status: &GroupBuyStatus) -> Option<Self> {
        match status {
            GroupBuyStatus::Recruiting => Some(Self::Recruiting),
            GroupBuyStatus::Bidding => Some(Self::Bidding),
            GroupBuyStatus::FinalSelectionBuyers => Some(Self::BuyerSelection),
            GroupBuyStatus::FinalSelectionSeller => Some(Self::SellerSelection),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Recruiting => "모집 마감까지",
            Self::Bidding => "입찰 마감까지",
            Self::BuyerSelection => "구매자 최종선택 마감까지",
            Self::SellerSelection => "판매자 최종선택 마감까지",
        }
    }

    /// Deadline this phase counts down to.
    pub fn target<'a>(&self, record: &'a GroupBuyRecord) -> &'a Boundary {
        match self {
            Self::Recruiting | Self::Bidding => &record.end_time,
            Self::BuyerSelection => &record.final_selection_end,
            Self::SellerSelection => &record.seller_selection_end,
        }
    }

    /// Start of the window used for progress.
    pub fn window_start<'a>(&self, record: &'a GroupBuyRecord) -> &'a Boundary {
        match self {
            Self::Recruiting | Self::Bidding => &record.start_time,
            Self::BuyerSelection => &record.end_time,
            Self::SellerSelection => &record.final_selection_end,
        }
    }
}

/// Countdown for a record at a given instant.
#[derive(Debug, Clone, PartialEq)]
pub struct CountdownState {
    pub phase: CountdownPhase,
    pub countdown: Countdown,
}

impl CountdownState {
    pub fn label(&self) -> &'static str {
        self.phase.label()
    }

    pub fn is_ended(&self) -> bool {
        self.countdown.is_ended()
    }
}

/// Countdown for the record's current phase, if it has one.
///
/// Returns `None` when the effective status has no deadline or the
/// deadline field is absent. A malformed deadline yields an ended countdown.
pub fn record_countdown(record: &GroupBuyRecord, now: DateTime<Utc>) -> Option<CountdownState> {
    let status = derive_status(&record.status, &record.end_time, now);
    let phase = CountdownPhase::for_status(&status)?;

    let countdown = match phase.target(record) {
        Boundary::Absent => return None,
        Boundary::Malformed(_) => Countdown::ended(),
        Boundary::At(target) => {
            // unknown start → degenerate window → 0%
            let start = phase.window_start(record).instant().unwrap_or(*target);
            compute_countdown(*target, start, now)
        }
    };

    Some(CountdownState { phase, countdown })
}
