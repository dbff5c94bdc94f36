use std::sync::Arc;

use uuid::Uuid;

use crate::modules::timecards::core::ports::TimecardRepository;
use crate::modules::timecards::core::timecard::Timecard;
use crate::modules::timecards::use_cases::errors::ApplicationError;

pub struct GetTimecardHandler {
    repository: Arc<dyn TimecardRepository>,
}

impl GetTimecardHandler {
    pub fn new(repository: Arc<dyn TimecardRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, id: Uuid) -> Result<Timecard, ApplicationError> {
        tracing::info!(%id, "looking for timesheet");
        self.repository
            .find(id)
            .await?
            .ok_or(ApplicationError::NotFound(id))
    }
}
