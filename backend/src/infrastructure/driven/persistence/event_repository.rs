use async_trait::async_trait;
use sqlx::PgPool;
use crate::application::ports::{EventRepository, RepositoryError};
use crate::domain::{Event, EventId, UserId};
use super::db_types::DbEvent;
use super::map_db_error;

const EVENT_COLUMNS: &str =
    "id, name, description, location, start_time, end_time, created_by, created_at";

pub struct PostgresEventRepository {
    pool: PgPool,
}

impl PostgresEventRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EventRepository for PostgresEventRepository {
    async fn insert(&self, event: &Event) -> Result<(), RepositoryError> {
        sqlx::query(
            "INSERT INTO events (id, name, description, location, start_time, end_time, created_by, created_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)",
        )
        .bind(event.id.as_uuid())
        .bind(&event.name)
        .bind(&event.description)
        .bind(&event.location)
        .bind(event.start_time)
        .bind(event.end_time)
        .bind(event.created_by.as_uuid())
        .bind(event.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    async fn find_by_id(&self, id: &EventId) -> Result<Option<Event>, RepositoryError> {
        let row: Option<DbEvent> =
            sqlx::query_as(&format!("SELECT {EVENT_COLUMNS} FROM events WHERE id = $1"))
                .bind(id.as_uuid())
                .fetch_optional(&self.pool)
                .await
                .map_err(map_db_error)?;

        Ok(row.map(Event::from))
    }

    async fn list_all(&self) -> Result<Vec<Event>, RepositoryError> {
        let rows: Vec<DbEvent> =
            sqlx::query_as(&format!("SELECT {EVENT_COLUMNS} FROM events ORDER BY position"))
                .fetch_all(&self.pool)
                .await
                .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Event::from).collect())
    }

    async fn list_by_creator(&self, creator: &UserId) -> Result<Vec<Event>, RepositoryError> {
        let rows: Vec<DbEvent> = sqlx::query_as(&format!(
            "SELECT {EVENT_COLUMNS} FROM events WHERE created_by = $1 ORDER BY position"
        ))
        .bind(creator.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Event::from).collect())
    }
}
