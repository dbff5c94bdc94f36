use std::sync::Arc;

use crate::modules::timecards::core::ports::TimecardRepository;
use crate::modules::timecards::core::status::TimecardStatus;
use crate::modules::timecards::core::timecard::Timecard;
use crate::modules::timecards::use_cases::errors::ApplicationError;

pub struct ListTimecardsHandler {
    repository: Arc<dyn TimecardRepository>,
}

impl ListTimecardsHandler {
    pub fn new(repository: Arc<dyn TimecardRepository>) -> Self {
        Self { repository }
    }

    /// Active catalog: deleted timecards keep their history in storage but
    /// drop out of the listing.
    pub async fn handle(&self) -> Result<Vec<Timecard>, ApplicationError> {
        let mut timecards: Vec<Timecard> = self
            .repository
            .all()
            .await?
            .into_iter()
            .filter(|t| t.status() != TimecardStatus::Deleted)
            .collect();
        timecards.sort_by_key(|t| t.opened());
        Ok(timecards)
    }
}

#[cfg(test)]
mod list_timecards_handler_tests {
    use super::*;
    use crate::modules::timecards::adapters::outbound::repository_in_memory::InMemoryTimecardRepository;
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn it_should_order_by_opened_instant() {
        let repository = Arc::new(InMemoryTimecardRepository::new());
        let first = Timecard::open(1);
        let second = Timecard::open(2);
        // insertion order deliberately reversed
        repository.add(second.clone()).await.unwrap();
        repository.add(first.clone()).await.unwrap();

        let handler = ListTimecardsHandler::new(repository);
        let listed = handler.handle().await.unwrap();
        assert_eq!(listed.len(), 2);
        assert!(listed[0].opened() <= listed[1].opened());
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_exclude_deleted_timecards() {
        let repository = Arc::new(InMemoryTimecardRepository::new());
        let kept = Timecard::open(1);
        let mut deleted = Timecard::open(2);
        deleted.delete(2).unwrap();
        repository.add(kept.clone()).await.unwrap();
        repository.add(deleted).await.unwrap();

        let handler = ListTimecardsHandler::new(repository);
        let listed = handler.handle().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id(), kept.id());
    }
}
