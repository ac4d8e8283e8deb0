// Driven port - bearer token issuance

use chrono::{DateTime, Utc};
use crate::domain::UserId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

/// Binds the principal's identity into a signed, expiring credential.
/// Verification belongs to the transport layer, not to this port.
#[cfg_attr(test, mockall::automock)]
pub trait TokenIssuer: Send + Sync {
    fn issue(&self, user_id: &UserId, name: &str, email: &str) -> anyhow::Result<IssuedToken>;
}
