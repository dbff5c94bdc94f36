use serde::{Deserialize, Serialize};

/// Closed set of timecard statuses. Status is never stored on the aggregate;
/// it is always derived from the transition ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimecardStatus {
    Draft,
    Submitted,
    Approved,
    Rejected,
    Cancelled,
    Deleted,
}

impl TimecardStatus {
    /// Approved and Deleted permit no further transitions.
    pub fn is_terminal(&self) -> bool {
        matches!(self, TimecardStatus::Approved | TimecardStatus::Deleted)
    }
}
