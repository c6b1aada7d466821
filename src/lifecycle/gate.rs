use crate::state::GroupBuyStatus;

/// Why a viewer was turned away.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenyReason {
    /// Not logged in. Caller shows a login prompt.
    Auth,
    /// Logged in but didn't take part. Caller shows "participants only".
    NotParticipant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessDecision {
    pub allowed: bool,
    pub reason: Option<DenyReason>,
}

impl AccessDecision {
    pub fn allow() -> Self {
        Self {
            allowed: true,
            reason: None,
        }
    }

    pub fn deny(reason: DenyReason) -> Self {
        Self {
            allowed: false,
            reason: Some(reason),
        }
    }
}

/// Phases where detail is restricted to participants.
///
/// Unrecognized statuses are treated as restricted.
pub fn is_ended_phase(status: &GroupBuyStatus) -> bool {
    match status {
        GroupBuyStatus::FinalSelectionBuyers
        | GroupBuyStatus::FinalSelectionSeller
        | GroupBuyStatus::InProgress
        | GroupBuyStatus::Completed
        | GroupBuyStatus::Cancelled
        | GroupBuyStatus::Unknown(_) => true,
        GroupBuyStatus::Recruiting
        | GroupBuyStatus::Bidding
        | GroupBuyStatus::Confirmed
        | GroupBuyStatus::Expired => false,
    }
}

/// Decide whether a viewer may see full record detail.
pub fn can_view(
    status: &GroupBuyStatus,
    is_authenticated: bool,
    is_participant: bool,
) -> AccessDecision {
    if !is_ended_phase(status) {
        return AccessDecision::allow();
    }
    if !is_authenticated {
        return AccessDecision::deny(DenyReason::Auth);
    }
    if !is_participant {
        return AccessDecision::deny(DenyReason::NotParticipant);
    }
    AccessDecision::allow()
}
