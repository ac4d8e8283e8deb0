use std::collections::HashMap;
use crate::application::error::AppError;
use crate::application::identity::IdentityContext;
use crate::application::ports::{EventRepository, RegistrationRepository};
use crate::application::views::{sort_by_name, sort_by_start_time, EventWithRegistrations, RegistrationView};
use crate::domain::{EventId, Registration};

pub const LOGIN_REQUIRED: &str = "User must be authenticated to view their events.";

/// The caller's own events, earliest first, each with its registrants
/// ordered by name.
pub async fn execute<E, R>(
    events: &E,
    registrations: &R,
    identity: &IdentityContext,
) -> Result<Vec<EventWithRegistrations>, AppError>
where
    E: EventRepository + ?Sized,
    R: RegistrationRepository + ?Sized,
{
    let owner = identity.require_user(LOGIN_REQUIRED)?;

    let mut owned = events.list_by_creator(&owner).await?;
    sort_by_start_time(&mut owned);
    if owned.is_empty() {
        return Ok(Vec::new());
    }

    let ids: Vec<EventId> = owned.iter().map(|e| e.id).collect();
    let mut by_event: HashMap<EventId, Vec<Registration>> = HashMap::new();
    for registration in registrations.list_for_events(&ids).await? {
        by_event.entry(registration.event_id).or_default().push(registration);
    }

    Ok(owned
        .into_iter()
        .map(|event| {
            let mut registrants = by_event.remove(&event.id).unwrap_or_default();
            sort_by_name(&mut registrants);
            let registrants = registrants.into_iter().map(RegistrationView::from).collect();
            EventWithRegistrations::new(event, registrants)
        })
        .collect())
}
