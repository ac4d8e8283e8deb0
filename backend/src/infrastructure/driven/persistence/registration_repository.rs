use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;
use crate::application::ports::{RegistrationRepository, RepositoryError};
use crate::domain::{EventId, Registration};
use super::db_types::DbRegistration;
use super::map_db_error;

const REGISTRATION_COLUMNS: &str = "id, event_id, name, phone_number, email, created_at";

/// Duplicate (event, email) pairs are rejected by `ix_registrations_event_email`.
pub struct PostgresRegistrationRepository {
    pool: PgPool,
}

impl PostgresRegistrationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RegistrationRepository for PostgresRegistrationRepository {
    async fn insert(&self, registration: &Registration) -> Result<(), RepositoryError> {
        sqlx::query(
            "INSERT INTO registrations (id, event_id, name, phone_number, email, created_at)
             VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(registration.id.as_uuid())
        .bind(registration.event_id.as_uuid())
        .bind(&registration.name)
        .bind(&registration.phone_number)
        .bind(registration.email.as_str())
        .bind(registration.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    async fn exists_for_email(&self, event_id: &EventId, email: &str) -> Result<bool, RepositoryError> {
        let (exists,): (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM registrations WHERE event_id = $1 AND email = $2)",
        )
        .bind(event_id.as_uuid())
        .bind(email)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(exists)
    }

    async fn list_for_event(&self, event_id: &EventId) -> Result<Vec<Registration>, RepositoryError> {
        let rows: Vec<DbRegistration> = sqlx::query_as(&format!(
            "SELECT {REGISTRATION_COLUMNS} FROM registrations WHERE event_id = $1 ORDER BY position"
        ))
        .bind(event_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Registration::from).collect())
    }

    async fn list_for_events(&self, event_ids: &[EventId]) -> Result<Vec<Registration>, RepositoryError> {
        if event_ids.is_empty() {
            return Ok(Vec::new());
        }
        let ids: Vec<Uuid> = event_ids.iter().map(|id| *id.as_uuid()).collect();
        let rows: Vec<DbRegistration> = sqlx::query_as(&format!(
            "SELECT {REGISTRATION_COLUMNS} FROM registrations WHERE event_id = ANY($1) ORDER BY position"
        ))
        .bind(ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Registration::from).collect())
    }
}
