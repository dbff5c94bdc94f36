// Ports define what the timecards module needs from the outside world,
// without implementing it.
//
// Responsibilities
// - Keep the core independent of any database by coding against traits.
//
// Boundaries
// - No concrete storage here; adapters implement these traits.
// - No business logic behind the port: find/add/update/remove only.

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::modules::timecards::core::timecard::Timecard;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("duplicate timecard id: {0}")]
    Duplicate(Uuid),

    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait TimecardRepository: Send + Sync {
    async fn find(&self, id: Uuid) -> Result<Option<Timecard>, RepositoryError>;
    async fn add(&self, timecard: Timecard) -> Result<(), RepositoryError>;
    async fn update(&self, timecard: Timecard) -> Result<(), RepositoryError>;
    async fn remove(&self, id: Uuid) -> Result<(), RepositoryError>;
    async fn all(&self) -> Result<Vec<Timecard>, RepositoryError>;
}
