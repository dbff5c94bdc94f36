use std::sync::Arc;

use uuid::Uuid;

use crate::modules::timecards::core::ports::TimecardRepository;
use crate::modules::timecards::core::status::TimecardStatus;
use crate::modules::timecards::core::transition::Transition;
use crate::modules::timecards::use_cases::errors::ApplicationError;
use crate::shared::core::primitives::PersonId;

pub struct ApproveTimecardHandler {
    repository: Arc<dyn TimecardRepository>,
}

impl ApproveTimecardHandler {
    pub fn new(repository: Arc<dyn TimecardRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        id: Uuid,
        approver: PersonId,
    ) -> Result<Transition, ApplicationError> {
        let mut timecard = self
            .repository
            .find(id)
            .await?
            .ok_or(ApplicationError::NotFound(id))?;
        let transition = timecard.approve(approver)?;
        tracing::info!(%id, approver, "adding approval transition");
        self.repository.update(timecard).await?;
        Ok(transition)
    }

    pub async fn latest(&self, id: Uuid) -> Result<Transition, ApplicationError> {
        let timecard = self
            .repository
            .find(id)
            .await?
            .ok_or(ApplicationError::NotFound(id))?;
        let transition = timecard.transition_into(TimecardStatus::Approved)?;
        Ok(transition.clone())
    }
}
