// Driven port - Event repository (output port)

use async_trait::async_trait;
use crate::application::ports::RepositoryError;
use crate::domain::{Event, EventId, UserId};

/// Listing operations return events in insertion order; callers sort.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EventRepository: Send + Sync {
    /// Fails with `MissingReference` when the creator does not exist.
    async fn insert(&self, event: &Event) -> Result<(), RepositoryError>;
    async fn find_by_id(&self, id: &EventId) -> Result<Option<Event>, RepositoryError>;
    async fn list_all(&self) -> Result<Vec<Event>, RepositoryError>;
    async fn list_by_creator(&self, user_id: &UserId) -> Result<Vec<Event>, RepositoryError>;
}
