use chrono::{DateTime, Utc};
use tracing::info;
use crate::application::error::AppError;
use crate::application::identity::IdentityContext;
use crate::application::ports::{EventRepository, RepositoryError};
use crate::application::validation::{Validate, Violations};
use crate::application::views::EventView;
use crate::domain::Event;

pub const LOGIN_REQUIRED: &str = "User must be authenticated to create events.";

#[derive(Debug, Clone)]
pub struct CreateEventCommand {
    pub name: String,
    pub description: String,
    pub location: String,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
}

impl CreateEventCommand {
    fn schedule(&self) -> Result<(DateTime<Utc>, DateTime<Utc>), AppError> {
        let start = self
            .start_time
            .ok_or_else(|| AppError::field("startTime", "Start time is required."))?;
        let end = self
            .end_time
            .ok_or_else(|| AppError::field("endTime", "End time is required."))?;
        Ok((start, end))
    }
}

impl Validate for CreateEventCommand {
    fn validate(&self, now: DateTime<Utc>) -> Result<(), AppError> {
        let mut v = Violations::new();
        if v.required("name", &self.name, "Name is required.") {
            v.max_len("name", &self.name, 200, "Name must not exceed 200 characters.");
        }
        v.required("description", &self.description, "Description is required.");
        v.required("location", &self.location, "Location is required.");

        match self.start_time {
            None => v.push("startTime", "Start time is required."),
            Some(start) if start <= now => v.push("startTime", "Start time must be in the future."),
            Some(_) => {}
        }
        match (self.start_time, self.end_time) {
            (_, None) => v.push("endTime", "End time is required."),
            (Some(start), Some(end)) if end <= start => {
                v.push("endTime", "End time must be after start time.")
            }
            _ => {}
        }
        v.finish()
    }
}

pub async fn execute<E: EventRepository + ?Sized>(
    events: &E,
    identity: &IdentityContext,
    cmd: CreateEventCommand,
) -> Result<EventView, AppError> {
    let owner = identity.require_user(LOGIN_REQUIRED)?;
    let (start_time, end_time) = cmd.schedule()?;

    let event = Event::new(cmd.name, cmd.description, cmd.location, start_time, end_time, owner);

    match events.insert(&event).await {
        Ok(()) => {}
        // The token outlived its user
        Err(RepositoryError::MissingReference(_)) => {
            return Err(AppError::Unauthorized(LOGIN_REQUIRED.to_string()))
        }
        Err(e) => return Err(e.into()),
    }

    info!(event_id = %event.id, user_id = %owner, "event created");
    Ok(event.into())
}
