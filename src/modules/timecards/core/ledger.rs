use serde::Serialize;

use crate::modules::timecards::core::status::TimecardStatus;
use crate::modules::timecards::core::transition::Transition;

/// Append-only ordered log of transitions. Entries are never reordered,
/// edited, or removed; current status is a query over the log.
///
/// The ledger can only be constructed around an opening transition, so it is
/// never empty and status derivation never has to handle the empty case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TransitionLedger {
    entries: Vec<Transition>,
}

impl TransitionLedger {
    pub fn opened_with(initial: Transition) -> Self {
        Self {
            entries: vec![initial],
        }
    }

    /// Appends without validation; legality checks belong to the aggregate.
    pub fn append(&mut self, transition: Transition) {
        self.entries.push(transition);
    }

    /// Status of the entry with the greatest `occurred_at`. On equal
    /// timestamps the entry appended last wins; the physical sequence order
    /// is authoritative, not the clock.
    pub fn current_status(&self) -> TimecardStatus {
        self.entries
            .iter()
            .max_by_key(|t| t.occurred_at)
            .map(|t| t.transitioned_to)
            .expect("ledger holds at least the opening transition")
    }

    /// Most recent transition into `status`, with the same tie-break as
    /// `current_status`.
    pub fn latest_of(&self, status: TimecardStatus) -> Option<&Transition> {
        self.entries
            .iter()
            .filter(|t| t.transitioned_to == status)
            .max_by_key(|t| t.occurred_at)
    }

    /// Full history in append order (equivalently `occurred_at` ascending).
    pub fn all(&self) -> &[Transition] {
        &self.entries
    }

    pub fn count(&self) -> usize {
        self.entries.len()
    }
}
