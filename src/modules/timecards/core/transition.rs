use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::modules::timecards::core::document::TransitionDocument;
use crate::modules::timecards::core::status::TimecardStatus;

/// One immutable, timestamped record of a status change plus its causing
/// document. `occurred_at` is assigned here, never by callers, so the ledger
/// order reflects real operation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Transition {
    pub document: TransitionDocument,
    pub transitioned_to: TimecardStatus,
    pub occurred_at: DateTime<Utc>,
}

impl Transition {
    pub fn record(document: TransitionDocument) -> Self {
        Self {
            transitioned_to: document.transitions_to(),
            document,
            occurred_at: Utc::now(),
        }
    }
}
