use std::sync::Arc;

use uuid::Uuid;

use crate::modules::timecards::core::ports::TimecardRepository;
use crate::modules::timecards::core::status::TimecardStatus;
use crate::modules::timecards::core::transition::Transition;
use crate::modules::timecards::use_cases::errors::ApplicationError;
use crate::shared::core::primitives::PersonId;

pub struct SubmitTimecardHandler {
    repository: Arc<dyn TimecardRepository>,
}

impl SubmitTimecardHandler {
    pub fn new(repository: Arc<dyn TimecardRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, id: Uuid, person: PersonId) -> Result<Transition, ApplicationError> {
        let mut timecard = self
            .repository
            .find(id)
            .await?
            .ok_or(ApplicationError::NotFound(id))?;
        let transition = timecard.submit(person)?;
        tracing::info!(%id, person, "adding submittal transition");
        self.repository.update(timecard).await?;
        Ok(transition)
    }

    /// The submittal that put the timecard into its current Submitted status.
    pub async fn latest(&self, id: Uuid) -> Result<Transition, ApplicationError> {
        let timecard = self
            .repository
            .find(id)
            .await?
            .ok_or(ApplicationError::NotFound(id))?;
        let transition = timecard.transition_into(TimecardStatus::Submitted)?;
        Ok(transition.clone())
    }
}
