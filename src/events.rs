use crate::lifecycle::CountdownState;
use crate::state::GroupBuyStatus;

/// Messages flowing into the watcher's event loop.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Ticker re-evaluated a record.
    /// `state` is None when the current phase has no countdown.
    Countdown {
        id: u64,
        status: GroupBuyStatus,
        state: Option<CountdownState>,
    },

    // Ctrl+C
    Shutdown,
}

impl Event {
    /// Whether this evaluation shows the watched deadline as passed.
    ///
    /// A recruiting record flips to `expired` the moment its deadline
    /// passes, so the zero-remaining tick may never be observed.
    pub fn is_deadline_reached(&self) -> bool {
        match self {
            Self::Countdown {
                state: Some(state), ..
            } => state.is_ended(),
            Self::Countdown { status, .. } => *status == GroupBuyStatus::Expired,
            Self::Shutdown => false,
        }
    }
}
