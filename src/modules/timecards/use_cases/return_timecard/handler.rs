use std::sync::Arc;

use uuid::Uuid;

use crate::modules::timecards::core::ports::TimecardRepository;
use crate::modules::timecards::core::transition::Transition;
use crate::modules::timecards::use_cases::errors::ApplicationError;
use crate::shared::core::primitives::PersonId;

pub struct ReturnTimecardHandler {
    repository: Arc<dyn TimecardRepository>,
}

impl ReturnTimecardHandler {
    pub fn new(repository: Arc<dyn TimecardRepository>) -> Self {
        Self { repository }
    }

    /// Sends a submitted timecard back to Draft for rework.
    pub async fn handle(&self, id: Uuid, person: PersonId) -> Result<Transition, ApplicationError> {
        let mut timecard = self
            .repository
            .find(id)
            .await?
            .ok_or(ApplicationError::NotFound(id))?;
        let transition = timecard.return_to_draft(person)?;
        tracing::info!(%id, person, "adding returned transition");
        self.repository.update(timecard).await?;
        Ok(transition)
    }
}

#[cfg(test)]
mod return_timecard_handler_tests {
    use super::*;
    use crate::modules::timecards::adapters::outbound::repository_in_memory::InMemoryTimecardRepository;
    use crate::modules::timecards::core::errors::DomainError;
    use crate::modules::timecards::core::status::TimecardStatus;
    use crate::modules::timecards::core::timecard::Timecard;
    use crate::tests::fixtures::line_document::LineDocumentBuilder;
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn it_should_send_a_submitted_timecard_back_to_draft() {
        let repository = Arc::new(InMemoryTimecardRepository::new());
        let mut timecard = Timecard::open(42);
        timecard
            .add_line(LineDocumentBuilder::new().build())
            .unwrap();
        timecard.submit(42).unwrap();
        let id = timecard.id();
        repository.add(timecard).await.unwrap();

        let handler = ReturnTimecardHandler::new(repository.clone());
        handler.handle(id, 99).await.expect("return failed");

        let stored = repository.find(id).await.unwrap().unwrap();
        assert_eq!(stored.status(), TimecardStatus::Draft);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_refuse_to_return_a_draft() {
        let repository = Arc::new(InMemoryTimecardRepository::new());
        let timecard = Timecard::open(42);
        let id = timecard.id();
        repository.add(timecard).await.unwrap();

        let handler = ReturnTimecardHandler::new(repository);
        let result = handler.handle(id, 99).await;
        assert!(matches!(
            result,
            Err(ApplicationError::Domain(DomainError::InvalidState))
        ));
    }
}
