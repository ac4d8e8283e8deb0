use std::convert::Infallible;
use axum::{async_trait, extract::FromRequestParts, http::request::Parts, RequestPartsExt};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use jsonwebtoken::errors::{Error as JwtError, ErrorKind};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use secrecy::ExposeSecret;
use tracing::debug;
use uuid::Uuid;
use crate::application::IdentityContext;
use crate::domain::UserId;
use crate::infrastructure::config::SecuritySettings;
use crate::infrastructure::driven::jwt_token_issuer::Claims;
use crate::infrastructure::AppState;

/// Checks signature, issuer, audience and expiry of HS256 bearer tokens.
pub struct JwtVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtVerifier {
    pub fn new(settings: &SecuritySettings) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[settings.jwt_issuer.as_str()]);
        validation.set_audience(&[settings.jwt_audience.as_str()]);
        validation.set_required_spec_claims(&["exp", "iss", "aud", "sub"]);

        Self {
            decoding_key: DecodingKey::from_secret(settings.jwt_key.expose_secret().as_bytes()),
            validation,
        }
    }

    pub fn verify(&self, token: &str) -> Result<IdentityContext, JwtError> {
        let claims = decode::<Claims>(token, &self.decoding_key, &self.validation)?.claims;
        let user_id = Uuid::parse_str(&claims.sub).map_err(|_| JwtError::from(ErrorKind::InvalidSubject))?;

        Ok(IdentityContext::authenticated(
            UserId::from_uuid(user_id),
            claims.name,
            claims.email,
        ))
    }
}

/// Never rejects: a missing or unverifiable token yields an anonymous
/// identity, and handlers that need a principal answer 401 themselves.
#[async_trait]
impl FromRequestParts<AppState> for IdentityContext {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let Ok(TypedHeader(Authorization(bearer))) =
            parts.extract::<TypedHeader<Authorization<Bearer>>>().await
        else {
            return Ok(IdentityContext::anonymous());
        };

        match state.token_verifier.verify(bearer.token()) {
            Ok(identity) => Ok(identity),
            Err(e) => {
                debug!(error = %e, "bearer token rejected, continuing anonymously");
                Ok(IdentityContext::anonymous())
            }
        }
    }
}
