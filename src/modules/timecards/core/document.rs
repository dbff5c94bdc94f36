use serde::{Deserialize, Serialize};

use crate::modules::timecards::core::status::TimecardStatus;
use crate::shared::core::primitives::PersonId;

/// Causal document behind a transition. Each variant carries the acting
/// person and pairs with exactly one resulting status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum TransitionDocument {
    Entered { person: PersonId },
    Submittal { person: PersonId },
    Approval { approver: PersonId },
    Rejection { person: PersonId },
    Returned { person: PersonId },
    Cancellation { person: PersonId },
    Deletion { person: PersonId },
}

impl TransitionDocument {
    /// Status the aggregate ends up in once this document is recorded.
    pub fn transitions_to(&self) -> TimecardStatus {
        match self {
            TransitionDocument::Entered { .. } => TimecardStatus::Draft,
            TransitionDocument::Submittal { .. } => TimecardStatus::Submitted,
            TransitionDocument::Approval { .. } => TimecardStatus::Approved,
            TransitionDocument::Rejection { .. } => TimecardStatus::Rejected,
            TransitionDocument::Returned { .. } => TimecardStatus::Draft,
            TransitionDocument::Cancellation { .. } => TimecardStatus::Cancelled,
            TransitionDocument::Deletion { .. } => TimecardStatus::Deleted,
        }
    }

    pub fn person(&self) -> PersonId {
        match self {
            TransitionDocument::Entered { person }
            | TransitionDocument::Submittal { person }
            | TransitionDocument::Rejection { person }
            | TransitionDocument::Returned { person }
            | TransitionDocument::Cancellation { person }
            | TransitionDocument::Deletion { person } => *person,
            TransitionDocument::Approval { approver } => *approver,
        }
    }
}
