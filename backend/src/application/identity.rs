use crate::application::error::AppError;
use crate::domain::UserId;

/// The principal behind the current request.
///
/// Built once per request by the transport layer from verified token claims
/// and handed to handlers by reference; handlers never mutate it. Every field
/// is `None` for anonymous requests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdentityContext {
    user_id: Option<UserId>,
    name: Option<String>,
    email: Option<String>,
}

impl IdentityContext {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn authenticated(user_id: UserId, name: String, email: String) -> Self {
        Self {
            user_id: Some(user_id),
            name: Some(name),
            email: Some(email),
        }
    }

    pub fn user_id(&self) -> Option<&UserId> {
        self.user_id.as_ref()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user_id.is_some()
    }

    /// Returns the principal's id, or `Unauthorized` carrying `message`.
    pub fn require_user(&self, message: &str) -> Result<UserId, AppError> {
        self.user_id
            .ok_or_else(|| AppError::Unauthorized(message.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anonymous_has_no_principal() {
        let identity = IdentityContext::anonymous();
        assert!(!identity.is_authenticated());
        assert!(identity.user_id().is_none());
        assert!(identity.name().is_none());
        assert!(identity.email().is_none());
        assert!(matches!(
            identity.require_user("login first"),
            Err(AppError::Unauthorized(m)) if m == "login first"
        ));
    }

    #[test]
    fn test_authenticated_exposes_claims() {
        let id = UserId::new();
        let identity = IdentityContext::authenticated(id, "Ann".to_string(), "a@x.com".to_string());
        assert!(identity.is_authenticated());
        assert_eq!(identity.name(), Some("Ann"));
        assert_eq!(identity.email(), Some("a@x.com"));
        assert_eq!(identity.require_user("unused").unwrap(), id);
    }
}
