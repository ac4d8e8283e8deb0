use axum::{response::Json, routing::get, Router};
use serde_json::{json, Value};
use crate::infrastructure::AppState;

pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health))
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
