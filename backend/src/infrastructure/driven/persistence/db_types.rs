use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;
use crate::domain::{Email, Event, EventId, Registration, RegistrationId, User, UserId};

#[derive(FromRow)]
pub struct DbUser {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl From<DbUser> for User {
    fn from(row: DbUser) -> Self {
        User::from_persistence(
            UserId::from_uuid(row.id),
            Email::from_persistence(row.email),
            row.name,
            row.password_hash,
            row.created_at,
        )
    }
}

#[derive(FromRow)]
pub struct DbEvent {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub location: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub created_by: Uuid,
    pub created_at: DateTime<Utc>,
}

impl From<DbEvent> for Event {
    fn from(row: DbEvent) -> Self {
        Event {
            id: EventId::from_uuid(row.id),
            name: row.name,
            description: row.description,
            location: row.location,
            start_time: row.start_time,
            end_time: row.end_time,
            created_by: UserId::from_uuid(row.created_by),
            created_at: row.created_at,
        }
    }
}

#[derive(FromRow)]
pub struct DbRegistration {
    pub id: Uuid,
    pub event_id: Uuid,
    pub name: String,
    pub phone_number: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<DbRegistration> for Registration {
    fn from(row: DbRegistration) -> Self {
        Registration {
            id: RegistrationId::from_uuid(row.id),
            event_id: EventId::from_uuid(row.event_id),
            name: row.name,
            phone_number: row.phone_number,
            email: Email::from_persistence(row.email),
            created_at: row.created_at,
        }
    }
}
