use std::sync::Arc;

use uuid::Uuid;

use crate::modules::timecards::core::ports::TimecardRepository;
use crate::modules::timecards::core::timecard::Timecard;
use crate::modules::timecards::use_cases::errors::ApplicationError;
use crate::shared::core::primitives::PersonId;

pub struct DeleteTimecardHandler {
    repository: Arc<dyn TimecardRepository>,
}

impl DeleteTimecardHandler {
    pub fn new(repository: Arc<dyn TimecardRepository>) -> Self {
        Self { repository }
    }

    /// Terminal disposal. The tombstone transition is persisted rather than
    /// the record erased, so the history stays retrievable for audit; the
    /// listing projection drops Deleted timecards.
    pub async fn handle(&self, id: Uuid, person: PersonId) -> Result<Timecard, ApplicationError> {
        let mut timecard = self
            .repository
            .find(id)
            .await?
            .ok_or(ApplicationError::NotFound(id))?;
        timecard.delete(person)?;
        tracing::info!(%id, person, "adding deletion transition");
        self.repository.update(timecard.clone()).await?;
        Ok(timecard)
    }
}
