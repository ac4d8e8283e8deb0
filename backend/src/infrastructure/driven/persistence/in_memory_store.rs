use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use async_trait::async_trait;
use crate::application::ports::{
    EventRepository, RegistrationRepository, RepositoryError, UserRepository,
};
use crate::domain::{Event, EventId, Registration, User, UserId};

#[derive(Default)]
struct Tables {
    users: Vec<User>,
    events: Vec<Event>,
    registrations: Vec<Registration>,
}

/// Single-process store backing all three gateways.
///
/// Rows are kept in insertion order. Uniqueness and reference checks happen
/// under the same write lock as the insert, so concurrent writers cannot
/// both pass them.
pub struct InMemoryStore {
    tables: RwLock<Tables>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            tables: RwLock::new(Tables::default()),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Tables>, RepositoryError> {
        self.tables
            .read()
            .map_err(|_| RepositoryError::Unavailable("in-memory store lock poisoned".to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Tables>, RepositoryError> {
        self.tables
            .write()
            .map_err(|_| RepositoryError::Unavailable("in-memory store lock poisoned".to_string()))
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError> {
        Ok(self.read()?.users.iter().find(|u| u.email().as_str() == email).cloned())
    }

    async fn insert(&self, user: &User) -> Result<(), RepositoryError> {
        let mut tables = self.write()?;
        if tables.users.iter().any(|u| u.email() == user.email()) {
            return Err(RepositoryError::UniqueViolation("ix_users_email".to_string()));
        }
        tables.users.push(user.clone());
        Ok(())
    }
}

#[async_trait]
impl EventRepository for InMemoryStore {
    async fn insert(&self, event: &Event) -> Result<(), RepositoryError> {
        let mut tables = self.write()?;
        if !tables.users.iter().any(|u| *u.id() == event.created_by) {
            return Err(RepositoryError::MissingReference("fk_events_created_by".to_string()));
        }
        tables.events.push(event.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &EventId) -> Result<Option<Event>, RepositoryError> {
        Ok(self.read()?.events.iter().find(|e| e.id == *id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Event>, RepositoryError> {
        Ok(self.read()?.events.clone())
    }

    async fn list_by_creator(&self, creator: &UserId) -> Result<Vec<Event>, RepositoryError> {
        Ok(self
            .read()?
            .events
            .iter()
            .filter(|e| e.created_by == *creator)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl RegistrationRepository for InMemoryStore {
    async fn insert(&self, registration: &Registration) -> Result<(), RepositoryError> {
        let mut tables = self.write()?;
        if !tables.events.iter().any(|e| e.id == registration.event_id) {
            return Err(RepositoryError::MissingReference("fk_registrations_event".to_string()));
        }
        if tables
            .registrations
            .iter()
            .any(|r| r.event_id == registration.event_id && r.email == registration.email)
        {
            return Err(RepositoryError::UniqueViolation("ix_registrations_event_email".to_string()));
        }
        tables.registrations.push(registration.clone());
        Ok(())
    }

    async fn exists_for_email(&self, event_id: &EventId, email: &str) -> Result<bool, RepositoryError> {
        Ok(self
            .read()?
            .registrations
            .iter()
            .any(|r| r.event_id == *event_id && r.email.as_str() == email))
    }

    async fn list_for_event(&self, event_id: &EventId) -> Result<Vec<Registration>, RepositoryError> {
        Ok(self
            .read()?
            .registrations
            .iter()
            .filter(|r| r.event_id == *event_id)
            .cloned()
            .collect())
    }

    async fn list_for_events(&self, event_ids: &[EventId]) -> Result<Vec<Registration>, RepositoryError> {
        Ok(self
            .read()?
            .registrations
            .iter()
            .filter(|r| event_ids.contains(&r.event_id))
            .cloned()
            .collect())
    }
}
