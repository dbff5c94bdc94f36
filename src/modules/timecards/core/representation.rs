use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::modules::timecards::core::affordances::{
    ActionLink, DocumentLink, actions_for, documents_for,
};
use crate::modules::timecards::core::status::TimecardStatus;
use crate::modules::timecards::core::timecard::Timecard;
use crate::shared::core::primitives::PersonId;

pub const SCHEMA_VERSION: &str = "timecard-0.1";

/// API-facing shape of a timecard, recomputed on every read: derived status
/// plus the affordances valid right now.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimecardRepr {
    #[serde(rename = "_self")]
    pub self_ref: String,
    pub id: Uuid,
    pub employee: PersonId,
    pub opened: DateTime<Utc>,
    pub status: TimecardStatus,
    pub actions: Vec<ActionLink>,
    #[serde(rename = "documentation")]
    pub documents: Vec<DocumentLink>,
    pub version: String,
}

impl From<&Timecard> for TimecardRepr {
    fn from(timecard: &Timecard) -> Self {
        let status = timecard.status();
        Self {
            self_ref: format!("/timesheets/{}", timecard.id()),
            id: timecard.id(),
            employee: timecard.employee(),
            opened: timecard.opened(),
            status,
            actions: actions_for(timecard.id(), status),
            documents: documents_for(timecard.id(), status, timecard.lines().count()),
            version: SCHEMA_VERSION.to_string(),
        }
    }
}
