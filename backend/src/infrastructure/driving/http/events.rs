use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use chrono::Utc;
use shared::{
    CreateEventRequest, DetailedEventResponse, EventResponse, RegisterForEventRequest,
    RegistrationResponse,
};
use uuid::Uuid;
use crate::application::events::commands::create_event::{self, CreateEventCommand};
use crate::application::events::commands::register_for_event::{self, RegisterForEventCommand};
use crate::application::events::queries::{
    get_all_events, get_event_by_id, get_events_created_by_user, get_registrations_for_event,
};
use crate::application::views::{EventView, EventWithRegistrations, RegistrationView};
use crate::application::{AppError, IdentityContext, Validate};
use crate::domain::EventId;
use crate::infrastructure::AppState;

pub fn events_routes() -> Router<AppState> {
    Router::new()
        .route("/api/events", get(list_events).post(create))
        .route("/api/events/creator", get(list_my_events))
        .route("/api/events/:id", get(get_event))
        .route("/api/events/:id/register", post(register))
        .route("/api/events/:id/registrations", get(list_registrations))
}

/// Ids that do not parse cannot name an event.
fn event_id(raw: &str) -> Result<EventId, AppError> {
    Uuid::parse_str(raw)
        .map(EventId::from_uuid)
        .map_err(|_| AppError::NotFound(format!("Event with ID {raw} not found.")))
}

async fn list_events(State(state): State<AppState>) -> Result<Json<Vec<EventResponse>>, AppError> {
    let events = get_all_events::execute(&*state.events).await?;
    Ok(Json(events.into_iter().map(EventResponse::from).collect()))
}

async fn get_event(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<EventResponse>, AppError> {
    let id = event_id(&raw_id)?;
    get_event_by_id::execute(&*state.events, &id)
        .await?
        .map(|event| Json(EventResponse::from(event)))
        .ok_or_else(|| AppError::NotFound(format!("Event with ID {id} not found.")))
}

async fn create(
    State(state): State<AppState>,
    identity: IdentityContext,
    payload: Result<Json<CreateEventRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    identity.require_user(create_event::LOGIN_REQUIRED)?;
    let Json(req) = payload?;
    let cmd = CreateEventCommand {
        name: req.name,
        description: req.description,
        location: req.location,
        start_time: req.start_time,
        end_time: req.end_time,
    };
    cmd.validate(Utc::now())?;

    let event = create_event::execute(&*state.events, &identity, cmd).await?;

    let location = format!("/api/events/{}", event.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(EventResponse::from(event)),
    ))
}

async fn list_my_events(
    State(state): State<AppState>,
    identity: IdentityContext,
) -> Result<Json<Vec<DetailedEventResponse>>, AppError> {
    let events =
        get_events_created_by_user::execute(&*state.events, &*state.registrations, &identity).await?;
    Ok(Json(events.into_iter().map(DetailedEventResponse::from).collect()))
}

async fn register(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    payload: Result<Json<RegisterForEventRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let event_id = event_id(&raw_id)?;
    let Json(req) = payload?;
    let cmd = RegisterForEventCommand {
        event_id,
        name: req.name,
        phone_number: req.phone_number,
        email: req.email,
    };
    cmd.validate(Utc::now())?;

    let registration =
        register_for_event::execute(&*state.events, &*state.registrations, cmd).await?;

    Ok((StatusCode::CREATED, Json(RegistrationResponse::from(registration))))
}

async fn list_registrations(
    State(state): State<AppState>,
    identity: IdentityContext,
    Path(raw_id): Path<String>,
) -> Result<Json<Vec<RegistrationResponse>>, AppError> {
    identity.require_user(get_registrations_for_event::LOGIN_REQUIRED)?;
    let event_id = event_id(&raw_id)?;
    let registrations = get_registrations_for_event::execute(
        &*state.events,
        &*state.registrations,
        &identity,
        &event_id,
    )
    .await?;
    Ok(Json(registrations.into_iter().map(RegistrationResponse::from).collect()))
}

impl From<EventView> for EventResponse {
    fn from(view: EventView) -> Self {
        Self {
            id: *view.id.as_uuid(),
            name: view.name,
            description: view.description,
            location: view.location,
            start_time: view.start_time,
            end_time: view.end_time,
            created_by_user_id: *view.created_by_user_id.as_uuid(),
        }
    }
}

impl From<EventWithRegistrations> for DetailedEventResponse {
    fn from(view: EventWithRegistrations) -> Self {
        Self {
            id: *view.id.as_uuid(),
            name: view.name,
            description: view.description,
            location: view.location,
            start_time: view.start_time,
            end_time: view.end_time,
            registrations: view.registrations.into_iter().map(RegistrationResponse::from).collect(),
        }
    }
}

impl From<RegistrationView> for RegistrationResponse {
    fn from(view: RegistrationView) -> Self {
        Self {
            id: *view.id.as_uuid(),
            event_id: *view.event_id.as_uuid(),
            name: view.name,
            phone_number: view.phone_number,
            email: view.email,
        }
    }
}
