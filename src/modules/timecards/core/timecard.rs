use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::modules::timecards::core::document::TransitionDocument;
use crate::modules::timecards::core::errors::DomainError;
use crate::modules::timecards::core::ledger::TransitionLedger;
use crate::modules::timecards::core::line::{LineDocument, LineSet, TimecardLine};
use crate::modules::timecards::core::status::TimecardStatus;
use crate::modules::timecards::core::transition::Transition;
use crate::shared::core::primitives::PersonId;

/// The unit-of-work record for one employee's period of logged work.
///
/// Owns its lines and its transition ledger exclusively. Every operation
/// validates against the derived status before touching state; status
/// precondition checks run before per-operation checks.
#[derive(Debug, Clone, PartialEq)]
pub struct Timecard {
    id: Uuid,
    employee: PersonId,
    opened: DateTime<Utc>,
    lines: LineSet,
    transitions: TransitionLedger,
}

impl Timecard {
    /// Opens a fresh timecard in Draft by recording the Entered transition.
    pub fn open(employee: PersonId) -> Self {
        Self {
            id: Uuid::now_v7(),
            employee,
            opened: Utc::now(),
            lines: LineSet::default(),
            transitions: TransitionLedger::opened_with(Transition::record(
                TransitionDocument::Entered { person: employee },
            )),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn employee(&self) -> PersonId {
        self.employee
    }

    pub fn opened(&self) -> DateTime<Utc> {
        self.opened
    }

    pub fn status(&self) -> TimecardStatus {
        self.transitions.current_status()
    }

    pub fn lines(&self) -> &LineSet {
        &self.lines
    }

    pub fn transitions(&self) -> &TransitionLedger {
        &self.transitions
    }

    pub fn can_be_deleted(&self) -> bool {
        matches!(
            self.status(),
            TimecardStatus::Draft | TimecardStatus::Cancelled
        )
    }

    pub fn add_line(&mut self, document: LineDocument) -> Result<TimecardLine, DomainError> {
        self.require(&[TimecardStatus::Draft])?;
        Ok(self.lines.add(document))
    }

    /// Removes the line and records a new one under a fresh id.
    pub fn replace_line(
        &mut self,
        line_id: Uuid,
        document: LineDocument,
    ) -> Result<TimecardLine, DomainError> {
        self.require(&[TimecardStatus::Draft])?;
        if !self.lines.contains(line_id) {
            return Err(DomainError::LineNotFound);
        }
        Ok(self.lines.replace(line_id, document))
    }

    /// Swaps the line's payload while keeping its id.
    pub fn update_line(
        &mut self,
        line_id: Uuid,
        document: LineDocument,
    ) -> Result<TimecardLine, DomainError> {
        self.require(&[TimecardStatus::Draft])?;
        self.lines
            .update(line_id, document)
            .ok_or(DomainError::LineNotFound)
    }

    pub fn submit(&mut self, person: PersonId) -> Result<Transition, DomainError> {
        self.require(&[TimecardStatus::Draft])?;
        if self.lines.count() == 0 {
            return Err(DomainError::EmptyTimecard);
        }
        Ok(self.record(TransitionDocument::Submittal { person }))
    }

    pub fn return_to_draft(&mut self, person: PersonId) -> Result<Transition, DomainError> {
        self.require(&[TimecardStatus::Submitted])?;
        Ok(self.record(TransitionDocument::Returned { person }))
    }

    pub fn approve(&mut self, approver: PersonId) -> Result<Transition, DomainError> {
        self.require(&[TimecardStatus::Submitted])?;
        if approver == self.employee {
            return Err(DomainError::InvalidSubmitter);
        }
        Ok(self.record(TransitionDocument::Approval { approver }))
    }

    pub fn reject(&mut self, person: PersonId) -> Result<Transition, DomainError> {
        self.require(&[TimecardStatus::Submitted])?;
        Ok(self.record(TransitionDocument::Rejection { person }))
    }

    pub fn cancel(&mut self, person: PersonId) -> Result<Transition, DomainError> {
        self.require(&[TimecardStatus::Draft, TimecardStatus::Submitted])?;
        Ok(self.record(TransitionDocument::Cancellation { person }))
    }

    /// Terminal and irreversible. The ledger keeps the full history; removal
    /// from the active catalog is the repository projection's concern.
    pub fn delete(&mut self, person: PersonId) -> Result<Transition, DomainError> {
        self.require(&[TimecardStatus::Draft, TimecardStatus::Cancelled])?;
        Ok(self.record(TransitionDocument::Deletion { person }))
    }

    /// Latest transition into `status`, available only while the timecard is
    /// currently in that status.
    pub fn transition_into(&self, status: TimecardStatus) -> Result<&Transition, DomainError> {
        if self.status() != status {
            return Err(DomainError::MissingTransition);
        }
        self.transitions
            .latest_of(status)
            .ok_or(DomainError::MissingTransition)
    }

    fn require(&self, allowed: &[TimecardStatus]) -> Result<(), DomainError> {
        if allowed.contains(&self.status()) {
            Ok(())
        } else {
            Err(DomainError::InvalidState)
        }
    }

    fn record(&mut self, document: TransitionDocument) -> Transition {
        let transition = Transition::record(document);
        self.transitions.append(transition.clone());
        transition
    }
}
