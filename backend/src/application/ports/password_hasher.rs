// Driven port - one-way credential hashing

use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    /// Salted one-way hash; the salt is embedded in the returned string.
    async fn hash(&self, plaintext: &str) -> anyhow::Result<String>;

    /// `false` for a wrong password and for any malformed stored value.
    async fn verify(&self, plaintext: &str, stored: &str) -> bool;
}
