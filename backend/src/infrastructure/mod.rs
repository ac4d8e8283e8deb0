// Infrastructure layer - external concerns (database, HTTP, crypto, config)
// Implements interfaces defined in application layer

use std::sync::Arc;
use crate::application::ports::{
    EventRepository, PasswordHasher, RegistrationRepository, TokenIssuer, UserRepository,
};
use crate::infrastructure::config::SecuritySettings;
use crate::infrastructure::driven::jwt_token_issuer::JwtTokenIssuer;
use crate::infrastructure::driving::http::middleware::auth::JwtVerifier;

pub mod config;
pub mod telemetry;
pub mod driven;    // Output adapters (repositories, hashing, token signing)
pub mod driving;   // Input adapters (HTTP)

#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub events: Arc<dyn EventRepository>,
    pub registrations: Arc<dyn RegistrationRepository>,
    pub password_hasher: Arc<dyn PasswordHasher>,
    pub token_issuer: Arc<dyn TokenIssuer>,
    pub token_verifier: Arc<JwtVerifier>,
}

impl AppState {
    pub fn new(
        users: Arc<dyn UserRepository>,
        events: Arc<dyn EventRepository>,
        registrations: Arc<dyn RegistrationRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        security: &SecuritySettings,
    ) -> Self {
        Self {
            users,
            events,
            registrations,
            password_hasher,
            token_issuer: Arc::new(JwtTokenIssuer::new(security)),
            token_verifier: Arc::new(JwtVerifier::new(security)),
        }
    }
}
