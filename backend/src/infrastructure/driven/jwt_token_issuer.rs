use chrono::{Duration, Utc};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use crate::application::ports::{IssuedToken, TokenIssuer};
use crate::domain::UserId;
use crate::infrastructure::config::SecuritySettings;

/// Claims carried by every bearer token. `sub` is the user id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub name: String,
    pub email: String,
    pub iss: String,
    pub aud: String,
    pub iat: i64,
    pub exp: i64,
}

/// HS256 signer. Pairs with `JwtVerifier` built from the same settings.
pub struct JwtTokenIssuer {
    encoding_key: EncodingKey,
    issuer: String,
    audience: String,
    lifetime: Duration,
}

impl JwtTokenIssuer {
    pub fn new(settings: &SecuritySettings) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(settings.jwt_key.expose_secret().as_bytes()),
            issuer: settings.jwt_issuer.clone(),
            audience: settings.jwt_audience.clone(),
            lifetime: Duration::minutes(i64::from(settings.jwt_expiry_minutes)),
        }
    }
}

impl TokenIssuer for JwtTokenIssuer {
    fn issue(&self, user_id: &UserId, name: &str, email: &str) -> anyhow::Result<IssuedToken> {
        let issued_at = Utc::now();
        let expires_at = issued_at + self.lifetime;
        let claims = Claims {
            sub: user_id.to_string(),
            name: name.to_string(),
            email: email.to_string(),
            iss: self.issuer.clone(),
            aud: self.audience.clone(),
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)?;
        Ok(IssuedToken { token, expires_at })
    }
}
