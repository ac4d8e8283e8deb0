use chrono::{DateTime, Utc};
use tracing::{info, warn};
use crate::application::error::AppError;
use crate::application::ports::{EventRepository, RegistrationRepository, RepositoryError};
use crate::application::validation::{Validate, Violations};
use crate::application::views::RegistrationView;
use crate::domain::{Email, EventId, Registration};

#[derive(Debug, Clone)]
pub struct RegisterForEventCommand {
    pub event_id: EventId,
    pub name: String,
    pub phone_number: String,
    pub email: String,
}

impl Validate for RegisterForEventCommand {
    fn validate(&self, _now: DateTime<Utc>) -> Result<(), AppError> {
        let mut v = Violations::new();
        if v.required("name", &self.name, "Name is required.") {
            v.max_len("name", &self.name, 150, "Name must not exceed 150 characters.");
        }
        if v.required("phoneNumber", &self.phone_number, "Phone number is required.") {
            v.max_len(
                "phoneNumber",
                &self.phone_number,
                20,
                "Phone number must not exceed 20 characters.",
            );
        }
        v.email("email", &self.email, "Email is required.");
        v.finish()
    }
}

fn event_not_found(id: &EventId) -> AppError {
    AppError::NotFound(format!("Event with ID {id} not found."))
}

fn already_registered(email: &Email) -> AppError {
    AppError::Conflict(format!("Email {email} is already registered for this event."))
}

/// Public sign-up; no principal required.
pub async fn execute<E, R>(
    events: &E,
    registrations: &R,
    cmd: RegisterForEventCommand,
) -> Result<RegistrationView, AppError>
where
    E: EventRepository + ?Sized,
    R: RegistrationRepository + ?Sized,
{
    if events.find_by_id(&cmd.event_id).await?.is_none() {
        return Err(event_not_found(&cmd.event_id));
    }

    let email = Email::new(cmd.email).map_err(|m| AppError::field("email", m))?;

    // Friendly early answer only; the store's (event_id, email) index is
    // what actually rules out duplicates.
    if registrations.exists_for_email(&cmd.event_id, email.as_str()).await? {
        warn!(event_id = %cmd.event_id, "duplicate registration rejected");
        return Err(already_registered(&email));
    }

    let registration = Registration::new(cmd.event_id, cmd.name, cmd.phone_number, email);
    match registrations.insert(&registration).await {
        Ok(()) => {}
        Err(RepositoryError::UniqueViolation(_)) => {
            warn!(event_id = %cmd.event_id, "concurrent duplicate registration rejected");
            return Err(already_registered(&registration.email));
        }
        Err(RepositoryError::MissingReference(_)) => return Err(event_not_found(&cmd.event_id)),
        Err(e) => return Err(e.into()),
    }

    info!(event_id = %registration.event_id, registration_id = %registration.id, "registered for event");
    Ok(registration.into())
}
