// Event queries

pub mod get_all_events;
pub mod get_event_by_id;
pub mod get_events_created_by_user;
pub mod get_registrations_for_event;
