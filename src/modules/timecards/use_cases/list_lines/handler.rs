use std::sync::Arc;

use uuid::Uuid;

use crate::modules::timecards::core::line::TimecardLine;
use crate::modules::timecards::core::ports::TimecardRepository;
use crate::modules::timecards::use_cases::errors::ApplicationError;

pub struct ListLinesHandler {
    repository: Arc<dyn TimecardRepository>,
}

impl ListLinesHandler {
    pub fn new(repository: Arc<dyn TimecardRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, id: Uuid) -> Result<Vec<TimecardLine>, ApplicationError> {
        let timecard = self
            .repository
            .find(id)
            .await?
            .ok_or(ApplicationError::NotFound(id))?;
        Ok(timecard.lines().ordered())
    }
}
