// Persistence gateways: Postgres for deployments, in-memory for dev and tests

mod db_types;
pub mod event_repository;
pub mod in_memory_store;
pub mod registration_repository;
pub mod user_repository;

use std::time::Duration;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use crate::application::ports::RepositoryError;
use crate::infrastructure::config::DatabaseSettings;

pub use event_repository::PostgresEventRepository;
pub use in_memory_store::InMemoryStore;
pub use registration_repository::PostgresRegistrationRepository;
pub use user_repository::PostgresUserRepository;

pub async fn connect(url: &str, settings: &DatabaseSettings) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .acquire_timeout(Duration::from_secs(settings.acquire_timeout_secs))
        .connect(url)
        .await
}

pub async fn migrate(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

/// Classifies driver errors into the gateway's failure kinds.
pub(crate) fn map_db_error(e: sqlx::Error) -> RepositoryError {
    if let sqlx::Error::Database(db_err) = &e {
        let constraint = db_err.constraint().unwrap_or_default().to_string();
        if db_err.is_unique_violation() {
            return RepositoryError::UniqueViolation(constraint);
        }
        if db_err.is_foreign_key_violation() {
            return RepositoryError::MissingReference(constraint);
        }
    }
    RepositoryError::Unavailable(e.to_string())
}
