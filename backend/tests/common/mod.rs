use std::sync::Arc;
use std::time::Duration;
use axum::{
    body::{to_bytes, Body},
    http::{header, HeaderMap, Method, Request, StatusCode},
    Router,
};
use events_server::infrastructure::config::SecuritySettings;
use events_server::infrastructure::driven::persistence::InMemoryStore;
use events_server::infrastructure::driven::Pbkdf2PasswordHasher;
use events_server::infrastructure::driving::router;
use events_server::infrastructure::AppState;
use secrecy::SecretString;
use serde_json::{json, Value};
use tower::ServiceExt;

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

/// Full router over a fresh in-memory store.
pub struct TestApp {
    router: Router,
}

impl TestApp {
    pub fn new() -> Self {
        let store = Arc::new(InMemoryStore::new());
        let security = SecuritySettings {
            jwt_key: SecretString::new("integration-signing-key-0123456789abcdef".to_string()),
            jwt_issuer: "events-test".to_string(),
            jwt_audience: "events-test-clients".to_string(),
            jwt_expiry_minutes: 60,
        };
        let state = AppState::new(
            store.clone(),
            store.clone(),
            store,
            Arc::new(Pbkdf2PasswordHasher::with_iterations(1_000)),
            &security,
        );
        Self {
            router: router(state, Duration::from_secs(5)),
        }
    }

    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        TestResponse { status, headers, body }
    }

    pub async fn get(&self, uri: &str, token: Option<&str>) -> TestResponse {
        self.send(Method::GET, uri, token, None).await
    }

    pub async fn post(&self, uri: &str, token: Option<&str>, body: Value) -> TestResponse {
        self.send(Method::POST, uri, token, Some(body)).await
    }

    /// Registers and logs in, returning the bearer token.
    pub async fn sign_up(&self, email: &str, password: &str) -> String {
        let registered = self
            .post(
                "/api/auth/register",
                None,
                json!({ "email": email, "name": "Ann", "password": password }),
            )
            .await;
        assert_eq!(registered.status, StatusCode::OK, "{}", registered.body);

        let login = self
            .post("/api/auth/login", None, json!({ "email": email, "password": password }))
            .await;
        assert_eq!(login.status, StatusCode::OK, "{}", login.body);
        login.body["token"].as_str().unwrap().to_string()
    }
}

pub fn event_body(name: &str, start: chrono::DateTime<chrono::Utc>) -> Value {
    json!({
        "name": name,
        "description": "desc",
        "location": "Loc",
        "startTime": start.to_rfc3339(),
        "endTime": (start + chrono::Duration::days(1)).to_rfc3339(),
    })
}
