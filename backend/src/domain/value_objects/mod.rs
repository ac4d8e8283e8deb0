pub mod user_id;
pub mod event_id;
pub mod registration_id;
pub mod email;

pub use user_id::UserId;
pub use event_id::EventId;
pub use registration_id::RegistrationId;
pub use email::Email;
