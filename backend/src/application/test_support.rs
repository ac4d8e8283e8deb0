// Fixtures shared by the handler tests

use chrono::{DateTime, Duration, Utc};
use secrecy::SecretString;
use crate::application::identity::IdentityContext;
use crate::application::ports::{EventRepository, RegistrationRepository, UserRepository};
use crate::domain::{Email, Event, Registration, User};
use crate::infrastructure::config::SecuritySettings;
use crate::infrastructure::driven::password_hasher::Pbkdf2PasswordHasher;
use crate::infrastructure::driven::persistence::InMemoryStore;

pub(crate) fn fast_hasher() -> Pbkdf2PasswordHasher {
    Pbkdf2PasswordHasher::with_iterations(1_000)
}

pub(crate) fn security_settings() -> SecuritySettings {
    SecuritySettings {
        jwt_key: SecretString::new("test-signing-key-0123456789abcdef0123".to_string()),
        jwt_issuer: "events-test".to_string(),
        jwt_audience: "events-test-clients".to_string(),
        jwt_expiry_minutes: 60,
    }
}

pub(crate) async fn seed_user(store: &InMemoryStore, email: &str) -> User {
    let email = Email::new(email.to_string()).unwrap();
    let user = User::new(email, "Seeded".to_string(), "unused:hash".to_string());
    UserRepository::insert(store, &user).await.unwrap();
    user
}

pub(crate) fn event_at(owner: &User, start: DateTime<Utc>) -> Event {
    Event::new(
        "Conf".to_string(),
        "desc".to_string(),
        "Loc".to_string(),
        start,
        start + Duration::hours(2),
        *owner.id(),
    )
}

pub(crate) async fn seed_event(store: &InMemoryStore, owner: &User, hours_from_now: i64) -> Event {
    let event = event_at(owner, Utc::now() + Duration::hours(hours_from_now));
    EventRepository::insert(store, &event).await.unwrap();
    event
}

pub(crate) async fn seed_registration(
    store: &InMemoryStore,
    event: &Event,
    name: &str,
    email: &str,
) -> Registration {
    let email = Email::new(email.to_string()).unwrap();
    let registration = Registration::new(event.id, name.to_string(), "+1".to_string(), email);
    RegistrationRepository::insert(store, &registration).await.unwrap();
    registration
}

pub(crate) fn identity_for(user: &User) -> IdentityContext {
    IdentityContext::authenticated(
        *user.id(),
        user.name().to_string(),
        user.email().as_str().to_string(),
    )
}
