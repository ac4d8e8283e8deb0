// Driven port - Registration repository (output port)

use async_trait::async_trait;
use crate::application::ports::RepositoryError;
use crate::domain::{EventId, Registration};

/// The store itself guarantees at most one registration per (event, email);
/// `insert` reports a duplicate as `UniqueViolation` even when callers raced
/// past `exists_for_email`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RegistrationRepository: Send + Sync {
    /// Fails with `UniqueViolation` on a duplicate pair and with
    /// `MissingReference` when the event does not exist.
    async fn insert(&self, registration: &Registration) -> Result<(), RepositoryError>;
    async fn exists_for_email(&self, event_id: &EventId, email: &str) -> Result<bool, RepositoryError>;
    async fn list_for_event(&self, event_id: &EventId) -> Result<Vec<Registration>, RepositoryError>;
    async fn list_for_events(&self, event_ids: &[EventId]) -> Result<Vec<Registration>, RepositoryError>;
}
