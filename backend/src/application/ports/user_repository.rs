// Driven port - User repository (output port)

use async_trait::async_trait;
use crate::application::ports::RepositoryError;
use crate::domain::User;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Exact, case-sensitive match on the stored address.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError>;

    /// Fails with `UniqueViolation` when the email is already taken.
    async fn insert(&self, user: &User) -> Result<(), RepositoryError>;
}
