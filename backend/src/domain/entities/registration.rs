use crate::domain::value_objects::*;
use chrono::{DateTime, Utc};

/// One participant's sign-up for an event. At most one per (event, email).
#[derive(Debug, Clone, PartialEq)]
pub struct Registration {
    pub id: RegistrationId,
    pub event_id: EventId,
    pub name: String,
    pub phone_number: String,
    pub email: Email,
    pub created_at: DateTime<Utc>,
}

impl Registration {
    pub fn new(event_id: EventId, name: String, phone_number: String, email: Email) -> Self {
        Self {
            id: RegistrationId::new(),
            event_id,
            name,
            phone_number,
            email,
            created_at: Utc::now(),
        }
    }
}
