use serde::{Deserialize, Serialize};
use std::fmt;

/// Email address, compared and stored exactly as given (no case folding).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Email(String);

impl Email {
    pub const MAX_LEN: usize = 200;

    pub fn new(email: String) -> Result<Self, String> {
        if !Self::is_well_formed(&email) {
            return Err("Email must be a valid email address.".to_string());
        }
        if email.chars().count() > Self::MAX_LEN {
            return Err(format!("Email must not exceed {} characters.", Self::MAX_LEN));
        }
        Ok(Self(email))
    }

    /// Rebuilds an address read back from storage without re-validating it.
    pub fn from_persistence(email: String) -> Self {
        Self(email)
    }

    /// One `@`, non-empty local part and domain, no whitespace, and a domain
    /// that neither starts nor ends with a dot.
    pub fn is_well_formed(candidate: &str) -> bool {
        if candidate.chars().any(char::is_whitespace) {
            return false;
        }
        let mut parts = candidate.split('@');
        let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
            return false;
        };
        !local.is_empty()
            && !domain.is_empty()
            && !domain.starts_with('.')
            && !domain.ends_with('.')
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
