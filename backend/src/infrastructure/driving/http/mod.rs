pub mod auth;
pub mod error;
pub mod events;
pub mod health;
pub mod middleware;

use std::time::Duration;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use crate::infrastructure::AppState;

pub use auth::auth_routes;
pub use events::events_routes;
pub use health::health_routes;

pub fn router(state: AppState, request_timeout: Duration) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(auth_routes())
        .merge(events_routes())
        .merge(health_routes())
        .layer(cors)
        .layer(TimeoutLayer::new(request_timeout))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
