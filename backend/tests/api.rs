mod common;

use axum::http::{header, StatusCode};
use chrono::{DateTime, Duration, Utc};
use serde_json::json;
use common::{event_body, TestApp};

#[tokio::test]
async fn test_register_login_create_and_sign_up_for_event() {
    let app = TestApp::new();
    let token = app.sign_up("a@x.com", "pw123456").await;
    let start = Utc::now() + Duration::days(1);

    let created = app.post("/api/events", Some(&token), event_body("Conf", start)).await;
    assert_eq!(created.status, StatusCode::CREATED, "{}", created.body);
    let id = created.body["id"].as_str().unwrap().to_string();
    assert_eq!(
        created.headers.get(header::LOCATION).unwrap(),
        format!("/api/events/{id}").as_str()
    );

    let listed = app.get("/api/events", None).await;
    assert_eq!(listed.status, StatusCode::OK);
    let event = &listed.body[0];
    assert_eq!(event["id"], id.as_str());
    assert_eq!(event["name"], "Conf");
    assert_eq!(event["description"], "desc");
    assert_eq!(event["location"], "Loc");
    assert_eq!(event["createdByUserId"], created.body["createdByUserId"]);
    let listed_start: DateTime<Utc> = event["startTime"].as_str().unwrap().parse().unwrap();
    assert_eq!(listed_start, start);

    let fetched = app.get(&format!("/api/events/{id}"), None).await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.body, created.body);

    let sign_up = json!({ "name": "Bob", "phoneNumber": "+1", "email": "bob@x.com" });
    let first = app.post(&format!("/api/events/{id}/register"), None, sign_up.clone()).await;
    assert_eq!(first.status, StatusCode::CREATED, "{}", first.body);
    assert_eq!(first.body["eventId"], id.as_str());

    let again = app.post(&format!("/api/events/{id}/register"), None, sign_up).await;
    assert_eq!(again.status, StatusCode::CONFLICT);
    assert_eq!(again.body["status"], 409);

    let registrants = app.get(&format!("/api/events/{id}/registrations"), Some(&token)).await;
    assert_eq!(registrants.status, StatusCode::OK);
    assert_eq!(registrants.body.as_array().unwrap().len(), 1);
    assert_eq!(registrants.body[0]["phoneNumber"], "+1");

    let mine = app.get("/api/events/creator", Some(&token)).await;
    assert_eq!(mine.status, StatusCode::OK);
    assert_eq!(mine.body[0]["id"], id.as_str());
    assert_eq!(mine.body[0]["registrations"][0]["name"], "Bob");
}

#[tokio::test]
async fn test_anonymous_or_forged_caller_cannot_create_events() {
    let app = TestApp::new();
    let body = event_body("Conf", Utc::now() + Duration::days(1));

    let anonymous = app.post("/api/events", None, body.clone()).await;
    let forged = app.post("/api/events", Some("not-a-token"), body).await;

    assert_eq!(anonymous.status, StatusCode::UNAUTHORIZED);
    assert_eq!(forged.status, StatusCode::UNAUTHORIZED);
    assert_eq!(app.get("/api/events", None).await.body, json!([]));
}

#[tokio::test]
async fn test_invalid_registration_lists_every_field_and_persists_nothing() {
    let app = TestApp::new();

    let rejected = app
        .post(
            "/api/auth/register",
            None,
            json!({ "email": "nope", "name": "", "password": "123" }),
        )
        .await;

    assert_eq!(rejected.status, StatusCode::BAD_REQUEST);
    let fields: Vec<_> = rejected.body["errors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["field"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(fields, vec!["email", "name", "password"]);

    let login = app
        .post("/api/auth/login", None, json!({ "email": "nope", "password": "123" }))
        .await;
    assert_eq!(login.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_duplicate_account_conflicts_and_bad_password_is_generic() {
    let app = TestApp::new();
    app.sign_up("a@x.com", "pw123456").await;

    let duplicate = app
        .post(
            "/api/auth/register",
            None,
            json!({ "email": "a@x.com", "name": "Other", "password": "pw654321" }),
        )
        .await;
    assert_eq!(duplicate.status, StatusCode::CONFLICT);

    let wrong = app
        .post("/api/auth/login", None, json!({ "email": "a@x.com", "password": "wrong-pw" }))
        .await;
    let unknown = app
        .post("/api/auth/login", None, json!({ "email": "z@x.com", "password": "pw123456" }))
        .await;
    assert_eq!(wrong.status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong.body["detail"], "Invalid email or password.");
    assert_eq!(wrong.body["detail"], unknown.body["detail"]);
}

#[tokio::test]
async fn test_event_schedule_is_validated() {
    let app = TestApp::new();
    let token = app.sign_up("a@x.com", "pw123456").await;
    let start = Utc::now() + Duration::days(1);

    let past = app.post("/api/events", Some(&token), event_body("Old", Utc::now() - Duration::days(1))).await;
    let backwards = app
        .post(
            "/api/events",
            Some(&token),
            json!({
                "name": "Conf",
                "description": "desc",
                "location": "Loc",
                "startTime": start.to_rfc3339(),
                "endTime": start.to_rfc3339(),
            }),
        )
        .await;

    assert_eq!(past.status, StatusCode::BAD_REQUEST);
    assert_eq!(past.body["errors"][0]["field"], "startTime");
    assert_eq!(backwards.status, StatusCode::BAD_REQUEST);
    assert_eq!(backwards.body["errors"][0]["field"], "endTime");
}

#[tokio::test]
async fn test_events_are_listed_by_start_time_with_ties_in_creation_order() {
    let app = TestApp::new();
    let token = app.sign_up("a@x.com", "pw123456").await;
    let soon = Utc::now() + Duration::days(1);
    let later = Utc::now() + Duration::days(3);

    for (name, start) in [("Late", later), ("TieA", soon), ("TieB", soon)] {
        let created = app.post("/api/events", Some(&token), event_body(name, start)).await;
        assert_eq!(created.status, StatusCode::CREATED);
    }

    let listed = app.get("/api/events", None).await;
    let names: Vec<_> = listed
        .body
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["TieA", "TieB", "Late"]);
}

#[tokio::test]
async fn test_unknown_and_malformed_event_ids_are_not_found() {
    let app = TestApp::new();
    let unknown = uuid::Uuid::new_v4();

    assert_eq!(app.get(&format!("/api/events/{unknown}"), None).await.status, StatusCode::NOT_FOUND);
    assert_eq!(app.get("/api/events/not-a-uuid", None).await.status, StatusCode::NOT_FOUND);

    let sign_up = app
        .post(
            &format!("/api/events/{unknown}/register"),
            None,
            json!({ "name": "Bob", "phoneNumber": "+1", "email": "bob@x.com" }),
        )
        .await;
    assert_eq!(sign_up.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_registrants_are_visible_to_the_creator_only() {
    let app = TestApp::new();
    let owner = app.sign_up("a@x.com", "pw123456").await;
    let stranger = app.sign_up("c@x.com", "pw123456").await;
    let created = app
        .post("/api/events", Some(&owner), event_body("Conf", Utc::now() + Duration::days(1)))
        .await;
    let id = created.body["id"].as_str().unwrap().to_string();
    for (name, email) in [("Zoe", "zoe@x.com"), ("Bob", "bob@x.com")] {
        let registered = app
            .post(
                &format!("/api/events/{id}/register"),
                None,
                json!({ "name": name, "phoneNumber": "+1", "email": email }),
            )
            .await;
        assert_eq!(registered.status, StatusCode::CREATED);
    }

    let uri = format!("/api/events/{id}/registrations");
    assert_eq!(app.get(&uri, None).await.status, StatusCode::UNAUTHORIZED);
    assert_eq!(app.get(&uri, Some(&stranger)).await.status, StatusCode::UNAUTHORIZED);
    assert_eq!(app.get("/api/events/creator", None).await.status, StatusCode::UNAUTHORIZED);

    let theirs = app.get("/api/events/creator", Some(&stranger)).await;
    assert_eq!(theirs.body, json!([]));

    let listed = app.get(&uri, Some(&owner)).await;
    let names: Vec<_> = listed
        .body
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["Bob", "Zoe"]);
}

#[tokio::test]
async fn test_same_email_may_register_for_two_events() {
    let app = TestApp::new();
    let token = app.sign_up("a@x.com", "pw123456").await;
    let sign_up = json!({ "name": "Bob", "phoneNumber": "+1", "email": "bob@x.com" });

    for days in [1, 2] {
        let created = app
            .post("/api/events", Some(&token), event_body("Conf", Utc::now() + Duration::days(days)))
            .await;
        let id = created.body["id"].as_str().unwrap();
        let registered = app.post(&format!("/api/events/{id}/register"), None, sign_up.clone()).await;
        assert_eq!(registered.status, StatusCode::CREATED);
    }
}

#[tokio::test]
async fn test_health_and_malformed_body() {
    let app = TestApp::new();

    let health = app.get("/health", None).await;
    assert_eq!(health.status, StatusCode::OK);
    assert_eq!(health.body, json!({ "status": "ok" }));

    let garbage = app
        .send(axum::http::Method::POST, "/api/auth/login", None, Some(json!("just a string")))
        .await;
    assert_eq!(garbage.status, StatusCode::BAD_REQUEST);
    assert_eq!(garbage.body["errors"][0]["field"], "body");
}
