// Application ports - Driven ports (output ports implemented by infrastructure)

pub mod error;
pub mod user_repository;
pub mod event_repository;
pub mod registration_repository;
pub mod password_hasher;
pub mod token_issuer;

pub use error::RepositoryError;
pub use user_repository::UserRepository;
pub use event_repository::EventRepository;
pub use registration_repository::RegistrationRepository;
pub use password_hasher::PasswordHasher;
pub use token_issuer::{IssuedToken, TokenIssuer};

#[cfg(test)]
pub use user_repository::MockUserRepository;
#[cfg(test)]
pub use event_repository::MockEventRepository;
#[cfg(test)]
pub use registration_repository::MockRegistrationRepository;
#[cfg(test)]
pub use password_hasher::MockPasswordHasher;
#[cfg(test)]
pub use token_issuer::MockTokenIssuer;
