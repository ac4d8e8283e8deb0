pub mod user;
pub mod event;
pub mod registration;

pub use user::User;
pub use event::Event;
pub use registration::Registration;
