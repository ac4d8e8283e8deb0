pub mod jwt_token_issuer;
pub mod password_hasher;
pub mod persistence;

pub use jwt_token_issuer::JwtTokenIssuer;
pub use password_hasher::Pbkdf2PasswordHasher;
