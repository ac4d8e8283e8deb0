use chrono::{DateTime, Utc};
use tracing::{info, warn};
use crate::application::error::AppError;
use crate::application::ports::{PasswordHasher, RepositoryError, UserRepository};
use crate::application::validation::{Validate, Violations};
use crate::application::views::UserSummary;
use crate::domain::{Email, User};

pub const EMAIL_TAKEN: &str = "A user with this email already exists.";

#[derive(Debug, Clone)]
pub struct RegisterUserCommand {
    pub email: String,
    pub name: String,
    pub password: String,
}

impl Validate for RegisterUserCommand {
    fn validate(&self, _now: DateTime<Utc>) -> Result<(), AppError> {
        let mut v = Violations::new();
        v.email("email", &self.email, "Email is required.");
        if v.required("name", &self.name, "Name is required.") {
            v.max_len("name", &self.name, 150, "Name must not exceed 150 characters.");
        }
        if v.required("password", &self.password, "Password is required.") {
            v.min_len("password", &self.password, 6, "Password must be at least 6 characters long.");
        }
        v.finish()
    }
}

pub async fn execute<U, H>(
    users: &U,
    hasher: &H,
    cmd: RegisterUserCommand,
) -> Result<UserSummary, AppError>
where
    U: UserRepository + ?Sized,
    H: PasswordHasher + ?Sized,
{
    let email = Email::new(cmd.email).map_err(|m| AppError::field("email", m))?;

    if users.find_by_email(email.as_str()).await?.is_some() {
        warn!("registration rejected: email already in use");
        return Err(AppError::Conflict(EMAIL_TAKEN.to_string()));
    }

    let password_hash = hasher.hash(&cmd.password).await.map_err(AppError::unexpected)?;
    let user = User::new(email, cmd.name, password_hash);

    // A concurrent sign-up with the same email can pass the lookup above;
    // the store's unique index decides.
    match users.insert(&user).await {
        Ok(()) => {}
        Err(RepositoryError::UniqueViolation(_)) => {
            warn!("registration rejected: email claimed concurrently");
            return Err(AppError::Conflict(EMAIL_TAKEN.to_string()));
        }
        Err(e) => return Err(e.into()),
    }

    info!(user_id = %user.id(), "user registered");
    Ok(UserSummary::from(&user))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{MockPasswordHasher, MockUserRepository};
    use crate::application::test_support::{fast_hasher, seed_user};
    use crate::application::validation::violated_fields;
    use crate::infrastructure::driven::persistence::InMemoryStore;

    fn command(email: &str) -> RegisterUserCommand {
        RegisterUserCommand {
            email: email.to_string(),
            name: "Ann".to_string(),
            password: "pw123456".to_string(),
        }
    }

    #[test]
    fn test_validation_reports_every_field() {
        let cmd = RegisterUserCommand {
            email: "not-an-email".to_string(),
            name: String::new(),
            password: "123".to_string(),
        };
        assert_eq!(violated_fields(cmd.validate(Utc::now())), vec!["email", "name", "password"]);
    }

    #[test]
    fn test_validation_bounds_name_length() {
        let mut cmd = command("a@x.com");
        cmd.name = "n".repeat(151);
        assert_eq!(violated_fields(cmd.validate(Utc::now())), vec!["name"]);
        cmd.name = "n".repeat(150);
        assert!(cmd.validate(Utc::now()).is_ok());
    }

    #[tokio::test]
    async fn test_register_persists_user_with_hashed_password() {
        let store = InMemoryStore::new();
        let hasher = fast_hasher();

        let summary = execute(&store, &hasher, command("a@x.com")).await.unwrap();

        assert_eq!(summary.email, "a@x.com");
        assert_eq!(summary.name, "Ann");
        let stored = store.find_by_email("a@x.com").await.unwrap().unwrap();
        assert_eq!(*stored.id(), summary.user_id);
        assert_ne!(stored.password_hash(), "pw123456");
        assert!(hasher.verify("pw123456", stored.password_hash()).await);
    }

    #[tokio::test]
    async fn test_register_existing_email_conflicts() {
        let store = InMemoryStore::new();
        seed_user(&store, "a@x.com").await;

        let err = execute(&store, &fast_hasher(), command("a@x.com")).await.unwrap_err();

        assert!(matches!(err, AppError::Conflict(m) if m == EMAIL_TAKEN));
    }

    #[tokio::test]
    async fn test_email_match_is_case_sensitive() {
        let store = InMemoryStore::new();
        seed_user(&store, "a@x.com").await;

        assert!(execute(&store, &fast_hasher(), command("A@x.com")).await.is_ok());
    }

    #[tokio::test]
    async fn test_unique_violation_on_insert_is_conflict() {
        let mut users = MockUserRepository::new();
        users.expect_find_by_email().returning(|_| Ok(None));
        users
            .expect_insert()
            .times(1)
            .returning(|_| Err(RepositoryError::UniqueViolation("ix_users_email".to_string())));
        let mut hasher = MockPasswordHasher::new();
        hasher.expect_hash().returning(|_| Ok("salt:key".to_string()));

        let err = execute(&users, &hasher, command("a@x.com")).await.unwrap_err();

        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_malformed_email_never_reaches_storage() {
        let mut users = MockUserRepository::new();
        users.expect_find_by_email().never();
        users.expect_insert().never();
        let mut hasher = MockPasswordHasher::new();
        hasher.expect_hash().never();

        let err = execute(&users, &hasher, command("not-an-email")).await.unwrap_err();

        assert_eq!(violated_fields(Err(err)), vec!["email"]);
    }

    #[tokio::test]
    async fn test_lookup_failure_skips_hashing() {
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_email()
            .returning(|_| Err(RepositoryError::Unavailable("down".to_string())));
        users.expect_insert().never();
        let mut hasher = MockPasswordHasher::new();
        hasher.expect_hash().never();

        let err = execute(&users, &hasher, command("a@x.com")).await.unwrap_err();

        assert!(matches!(err, AppError::Unexpected(_)));
    }
}
