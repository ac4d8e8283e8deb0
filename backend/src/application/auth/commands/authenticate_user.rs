use chrono::{DateTime, Utc};
use tracing::{info, warn};
use crate::application::error::AppError;
use crate::application::ports::{IssuedToken, PasswordHasher, TokenIssuer, UserRepository};
use crate::application::validation::{Validate, Violations};

/// Same text for an unknown email and a wrong password.
pub const INVALID_CREDENTIALS: &str = "Invalid email or password.";

/// Well-formed hash matching no password. Checked against when the email is
/// unknown so both rejection paths cost one key derivation.
const UNKNOWN_USER_HASH: &str =
    "AAAAAAAAAAAAAAAAAAAAAA==:AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA=";

#[derive(Debug, Clone)]
pub struct AuthenticateUserCommand {
    pub email: String,
    pub password: String,
}

impl Validate for AuthenticateUserCommand {
    fn validate(&self, _now: DateTime<Utc>) -> Result<(), AppError> {
        let mut v = Violations::new();
        v.required("email", &self.email, "Email is required.");
        v.required("password", &self.password, "Password is required.");
        v.finish()
    }
}

pub async fn execute<U, H, T>(
    users: &U,
    hasher: &H,
    tokens: &T,
    cmd: AuthenticateUserCommand,
) -> Result<IssuedToken, AppError>
where
    U: UserRepository + ?Sized,
    H: PasswordHasher + ?Sized,
    T: TokenIssuer + ?Sized,
{
    let Some(user) = users.find_by_email(&cmd.email).await? else {
        let _ = hasher.verify(&cmd.password, UNKNOWN_USER_HASH).await;
        warn!("login rejected");
        return Err(AppError::Unauthorized(INVALID_CREDENTIALS.to_string()));
    };

    if !hasher.verify(&cmd.password, user.password_hash()).await {
        warn!(user_id = %user.id(), "login rejected");
        return Err(AppError::Unauthorized(INVALID_CREDENTIALS.to_string()));
    }

    let issued = tokens
        .issue(user.id(), user.name(), user.email().as_str())
        .map_err(AppError::unexpected)?;

    info!(user_id = %user.id(), expires_at = %issued.expires_at, "user logged in");
    Ok(issued)
}
