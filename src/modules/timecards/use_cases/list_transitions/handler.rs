use std::sync::Arc;

use uuid::Uuid;

use crate::modules::timecards::core::ports::TimecardRepository;
use crate::modules::timecards::core::transition::Transition;
use crate::modules::timecards::use_cases::errors::ApplicationError;

pub struct ListTransitionsHandler {
    repository: Arc<dyn TimecardRepository>,
}

impl ListTransitionsHandler {
    pub fn new(repository: Arc<dyn TimecardRepository>) -> Self {
        Self { repository }
    }

    /// Full audit history in append order, deleted timecards included.
    pub async fn handle(&self, id: Uuid) -> Result<Vec<Transition>, ApplicationError> {
        let timecard = self
            .repository
            .find(id)
            .await?
            .ok_or(ApplicationError::NotFound(id))?;
        Ok(timecard.transitions().all().to_vec())
    }
}
