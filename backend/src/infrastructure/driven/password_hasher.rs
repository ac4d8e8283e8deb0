use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine};
use pbkdf2::pbkdf2_hmac;
use rand::RngCore;
use sha2::Sha256;
use subtle::ConstantTimeEq;
use tracing::error;
use crate::application::ports::PasswordHasher;

pub const DEFAULT_ITERATIONS: u32 = 100_000;
const SALT_LEN: usize = 16;
const KEY_LEN: usize = 32;

/// PBKDF2-HMAC-SHA256 with a random per-password salt.
///
/// Stored form is `base64(salt):base64(key)`. Key derivation is CPU-bound and
/// runs on the blocking pool so it never stalls the async workers.
#[derive(Debug, Clone)]
pub struct Pbkdf2PasswordHasher {
    iterations: u32,
}

impl Pbkdf2PasswordHasher {
    pub fn new() -> Self {
        Self::with_iterations(DEFAULT_ITERATIONS)
    }

    pub fn with_iterations(iterations: u32) -> Self {
        Self { iterations }
    }
}

impl Default for Pbkdf2PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PasswordHasher for Pbkdf2PasswordHasher {
    async fn hash(&self, plaintext: &str) -> anyhow::Result<String> {
        let plaintext = plaintext.to_owned();
        let iterations = self.iterations;
        Ok(tokio::task::spawn_blocking(move || hash_password(&plaintext, iterations)).await?)
    }

    async fn verify(&self, plaintext: &str, stored: &str) -> bool {
        let plaintext = plaintext.to_owned();
        let stored = stored.to_owned();
        let iterations = self.iterations;
        match tokio::task::spawn_blocking(move || verify_password(&plaintext, &stored, iterations)).await {
            Ok(matches) => matches,
            Err(e) => {
                error!(error = %e, "password verification task failed");
                false
            }
        }
    }
}

pub fn hash_password(plaintext: &str, iterations: u32) -> String {
    let mut salt = [0u8; SALT_LEN];
    rand::thread_rng().fill_bytes(&mut salt);
    let key = derive_key(plaintext, &salt, iterations);
    format!("{}:{}", STANDARD.encode(salt), STANDARD.encode(key))
}

/// `false` for anything that is not a well-formed `salt:key` pair.
pub fn verify_password(plaintext: &str, stored: &str, iterations: u32) -> bool {
    let Some((salt, key)) = stored.split_once(':') else {
        return false;
    };
    let (Ok(salt), Ok(expected)) = (STANDARD.decode(salt), STANDARD.decode(key)) else {
        return false;
    };
    if expected.len() != KEY_LEN {
        return false;
    }

    let actual = derive_key(plaintext, &salt, iterations);
    actual[..].ct_eq(&expected[..]).into()
}

fn derive_key(plaintext: &str, salt: &[u8], iterations: u32) -> [u8; KEY_LEN] {
    let mut key = [0u8; KEY_LEN];
    pbkdf2_hmac::<Sha256>(plaintext.as_bytes(), salt, iterations, &mut key);
    key
}
