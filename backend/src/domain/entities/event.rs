use crate::domain::value_objects::*;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub id: EventId,
    pub name: String,
    pub description: String,
    pub location: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub created_by: UserId,
    pub created_at: DateTime<Utc>,
}

impl Event {
    pub fn new(
        name: String,
        description: String,
        location: String,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
        created_by: UserId,
    ) -> Self {
        Self {
            id: EventId::new(),
            name,
            description,
            location,
            start_time,
            end_time,
            created_by,
            created_at: Utc::now(),
        }
    }

    pub fn is_owned_by(&self, user_id: &UserId) -> bool {
        self.created_by == *user_id
    }
}
