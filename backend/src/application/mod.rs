// Application layer - use cases grouped by area
// Orchestrates domain logic, depends on domain layer and ports only

pub mod error;
pub mod identity;
pub mod validation;
pub mod views;
pub mod ports;
pub mod auth;
pub mod events;

#[cfg(test)]
pub(crate) mod test_support;

pub use error::{AppError, FieldError};
pub use identity::IdentityContext;
pub use validation::Validate;
