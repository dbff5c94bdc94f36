use std::sync::Arc;

use uuid::Uuid;

use crate::modules::timecards::core::line::{LineDocument, TimecardLine};
use crate::modules::timecards::core::ports::TimecardRepository;
use crate::modules::timecards::use_cases::errors::ApplicationError;

pub struct RecordLineHandler {
    repository: Arc<dyn TimecardRepository>,
}

impl RecordLineHandler {
    pub fn new(repository: Arc<dyn TimecardRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        id: Uuid,
        document: LineDocument,
    ) -> Result<TimecardLine, ApplicationError> {
        let mut timecard = self
            .repository
            .find(id)
            .await?
            .ok_or(ApplicationError::NotFound(id))?;
        let line = timecard.add_line(document)?;
        tracing::info!(%id, line = %line.id, "recorded line");
        self.repository.update(timecard).await?;
        Ok(line)
    }
}
