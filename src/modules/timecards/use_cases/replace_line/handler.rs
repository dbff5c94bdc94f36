use std::sync::Arc;

use uuid::Uuid;

use crate::modules::timecards::core::line::{LineDocument, TimecardLine};
use crate::modules::timecards::core::ports::TimecardRepository;
use crate::modules::timecards::use_cases::errors::ApplicationError;

pub struct ReplaceLineHandler {
    repository: Arc<dyn TimecardRepository>,
}

impl ReplaceLineHandler {
    pub fn new(repository: Arc<dyn TimecardRepository>) -> Self {
        Self { repository }
    }

    /// The replacement is a new line: callers get back a fresh line id.
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
        let line = timecard.replace_line(line_id, document)?;
        tracing::info!(%id, old = %line_id, new = %line.id, "replaced line");
        self.repository.update(timecard).await?;
        Ok(line)
    }
}
