use std::sync::Arc;

use crate::modules::timecards::core::ports::TimecardRepository;
use crate::modules::timecards::core::timecard::Timecard;
use crate::modules::timecards::use_cases::errors::ApplicationError;
use crate::shared::core::primitives::PersonId;

pub struct CreateTimecardHandler {
    repository: Arc<dyn TimecardRepository>,
}

impl CreateTimecardHandler {
    pub fn new(repository: Arc<dyn TimecardRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, person: PersonId) -> Result<Timecard, ApplicationError> {
        let timecard = Timecard::open(person);
        tracing::info!(employee = person, id = %timecard.id(), "creating timesheet");
        self.repository.add(timecard.clone()).await?;
        Ok(timecard)
    }
}
