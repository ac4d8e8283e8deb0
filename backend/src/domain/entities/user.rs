use crate::domain::value_objects::*;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct User {
    id: UserId,
    email: Email,
    name: String,
    password_hash: String,
    created_at: DateTime<Utc>,
}

impl User {
    pub fn new(email: Email, name: String, password_hash: String) -> Self {
        Self {
            id: UserId::new(),
            email,
            name,
            password_hash,
            created_at: Utc::now(),
        }
    }

    pub fn from_persistence(
        id: UserId,
        email: Email,
        name: String,
        password_hash: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            email,
            name,
            password_hash,
            created_at,
        }
    }

    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Salted credential hash; never leaves the application layer.
    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
