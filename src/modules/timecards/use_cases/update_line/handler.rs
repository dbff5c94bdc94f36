use std::sync::Arc;

use uuid::Uuid;

use crate::modules::timecards::core::line::{LineDocument, TimecardLine};
use crate::modules::timecards::core::ports::TimecardRepository;
use crate::modules::timecards::use_cases::errors::ApplicationError;

pub struct UpdateLineHandler {
    repository: Arc<dyn TimecardRepository>,
}

impl UpdateLineHandler {
    pub fn new(repository: Arc<dyn TimecardRepository>) -> Self {
        Self { repository }
    }

    /// In-place edit: the line keeps the id it was recorded under.
    pub async fn handle(
        &self,
        id: Uuid,
        line_id: Uuid,
        document: LineDocument,
    ) -> Result<TimecardLine, ApplicationError> {
        let mut timecard = self
            .repository
            .find(id)
            .await?
            .ok_or(ApplicationError::NotFound(id))?;
        let line = timecard.update_line(line_id, document)?;
        tracing::info!(%id, line = %line_id, "updated line");
        self.repository.update(timecard).await?;
        Ok(line)
    }
}
