// In memory implementation of the TimecardRepository port.
//
// Purpose
// - Support handler tests and local development without a database.
//
// Responsibilities
// - Store whole aggregates keyed by id.
// - Serialize access with an async RwLock; the core itself performs no
//   locking and assumes exclusive access per operation.

use std::collections::HashMap;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::modules::timecards::core::ports::{RepositoryError, TimecardRepository};
use crate::modules::timecards::core::timecard::Timecard;

#[derive(Default)]
pub struct InMemoryTimecardRepository {
    inner: RwLock<HashMap<Uuid, Timecard>>,
    offline: bool,
}

impl InMemoryTimecardRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every call fail with a backend error, for failure-path tests.
    pub fn toggle_offline(&mut self) {
        self.offline = !self.offline;
    }

    fn check_online(&self) -> Result<(), RepositoryError> {
        if self.offline {
            return Err(RepositoryError::Backend("Repository offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl TimecardRepository for InMemoryTimecardRepository {
    async fn find(&self, id: Uuid) -> Result<Option<Timecard>, RepositoryError> {
        self.check_online()?;
        Ok(self.inner.read().await.get(&id).cloned())
    }

    async fn add(&self, timecard: Timecard) -> Result<(), RepositoryError> {
        self.check_online()?;
        let mut guard = self.inner.write().await;
        if guard.contains_key(&timecard.id()) {
            return Err(RepositoryError::Duplicate(timecard.id()));
        }
        guard.insert(timecard.id(), timecard);
        Ok(())
    }

    async fn update(&self, timecard: Timecard) -> Result<(), RepositoryError> {
        self.check_online()?;
        self.inner.write().await.insert(timecard.id(), timecard);
        Ok(())
    }

    async fn remove(&self, id: Uuid) -> Result<(), RepositoryError> {
        self.check_online()?;
        self.inner.write().await.remove(&id);
        Ok(())
    }

    async fn all(&self) -> Result<Vec<Timecard>, RepositoryError> {
        self.check_online()?;
        Ok(self.inner.read().await.values().cloned().collect())
    }
}
