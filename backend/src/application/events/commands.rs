// Event commands

pub mod create_event;
pub mod register_for_event;
