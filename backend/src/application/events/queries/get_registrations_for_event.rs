use tracing::warn;
use crate::application::error::AppError;
use crate::application::identity::IdentityContext;
use crate::application::ports::{EventRepository, RegistrationRepository};
use crate::application::views::{sort_by_name, RegistrationView};
use crate::domain::EventId;

pub const LOGIN_REQUIRED: &str = "User must be authenticated to view registrations.";
pub const NOT_OWNER: &str = "You can only view registrations for events you created.";

/// Registrants of an event, ordered by name. Only the event's creator may
/// look; anyone else gets `Unauthorized`, same kind as an anonymous caller.
pub async fn execute<E, R>(
    events: &E,
    registrations: &R,
    identity: &IdentityContext,
    event_id: &EventId,
) -> Result<Vec<RegistrationView>, AppError>
where
    E: EventRepository + ?Sized,
    R: RegistrationRepository + ?Sized,
{
    let caller = identity.require_user(LOGIN_REQUIRED)?;

    let event = events
        .find_by_id(event_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Event with ID {event_id} not found.")))?;

    if !event.is_owned_by(&caller) {
        warn!(event_id = %event_id, user_id = %caller, "registrant list denied to non-owner");
        return Err(AppError::Unauthorized(NOT_OWNER.to_string()));
    }

    let mut registrants = registrations.list_for_event(event_id).await?;
    sort_by_name(&mut registrants);
    Ok(registrants.into_iter().map(RegistrationView::from).collect())
}
