// Projections returned by handlers - output-shaped, never carry credentials

use crate::domain::{Event, EventId, Registration, RegistrationId, User, UserId};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq)]
pub struct UserSummary {
    pub user_id: UserId,
    pub name: String,
    pub email: String,
}

impl From<&User> for UserSummary {
    fn from(user: &User) -> Self {
        Self {
            user_id: *user.id(),
            name: user.name().to_string(),
            email: user.email().as_str().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EventView {
    pub id: EventId,
    pub name: String,
    pub description: String,
    pub location: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub created_by_user_id: UserId,
}

impl From<Event> for EventView {
    fn from(event: Event) -> Self {
        Self {
            id: event.id,
            name: event.name,
            description: event.description,
            location: event.location,
            start_time: event.start_time,
            end_time: event.end_time,
            created_by_user_id: event.created_by,
        }
    }
}

/// An owned event with its registrants
#[derive(Debug, Clone, PartialEq)]
pub struct EventWithRegistrations {
    pub id: EventId,
    pub name: String,
    pub description: String,
    pub location: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub registrations: Vec<RegistrationView>,
}

impl EventWithRegistrations {
    pub fn new(event: Event, registrations: Vec<RegistrationView>) -> Self {
        Self {
            id: event.id,
            name: event.name,
            description: event.description,
            location: event.location,
            start_time: event.start_time,
            end_time: event.end_time,
            registrations,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RegistrationView {
    pub id: RegistrationId,
    pub event_id: EventId,
    pub name: String,
    pub phone_number: String,
    pub email: String,
}

impl From<Registration> for RegistrationView {
    fn from(registration: Registration) -> Self {
        Self {
            id: registration.id,
            event_id: registration.event_id,
            name: registration.name,
            phone_number: registration.phone_number,
            email: registration.email.as_str().to_string(),
        }
    }
}

/// Stable sort by registrant name, ignoring case. Names differing only in
/// case fall back to byte order; identical names keep storage order.
pub(crate) fn sort_by_name(registrations: &mut [Registration]) {
    registrations.sort_by_cached_key(|r| (r.name.to_lowercase(), r.name.clone()));
}

/// Stable sort by start time; equal start times keep insertion order.
pub(crate) fn sort_by_start_time(events: &mut [Event]) {
    events.sort_by_key(|e| e.start_time);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Email;

    fn registration(name: &str, email: &str) -> Registration {
        Registration::new(
            EventId::new(),
            name.to_string(),
            "+1".to_string(),
            Email::new(email.to_string()).unwrap(),
        )
    }

    #[test]
    fn test_names_sort_case_insensitively() {
        let mut regs = vec![
            registration("Zoe", "z@x.com"),
            registration("bob", "b@x.com"),
            registration("Alice", "a@x.com"),
        ];

        sort_by_name(&mut regs);

        let names: Vec<_> = regs.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Alice", "bob", "Zoe"]);
    }

    #[test]
    fn test_case_variants_are_ordered_and_duplicates_stay_stable() {
        let first = registration("bob", "one@x.com");
        let second = registration("bob", "two@x.com");
        let mut regs = vec![first.clone(), registration("Bob", "upper@x.com"), second.clone()];

        sort_by_name(&mut regs);

        let names: Vec<_> = regs.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Bob", "bob", "bob"]);
        assert_eq!(regs[1].id, first.id);
        assert_eq!(regs[2].id, second.id);
    }
}
