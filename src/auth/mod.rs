use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config;

/// Fixed client-name claim embedded in every issued token.
pub const CLIENT_NAME: &str = "FMUClient";

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub name: String,
    pub exp: i64,
    pub iat: i64,
}

impl Claims {
    pub fn new(name: String) -> Self {
        let now = Utc::now();
        let ttl = config::config().security.token_ttl_secs;
        let exp = (now + Duration::seconds(ttl as i64)).timestamp();

        Self {
            name,
            exp,
            iat: now.timestamp(),
        }
    }
}

#[derive(Debug, Error)]
pub enum JwtError {
    #[error("JWT generation error: {0}")]
    TokenGeneration(String),

    #[error("JWT secret not configured")]
    InvalidSecret,
}

/// Sign a token for the given claims with the configured secret.
pub fn generate_jwt(claims: &Claims) -> Result<String, JwtError> {
    let secret = &config::config().security.jwt_secret;

    if secret.is_empty() {
        return Err(JwtError::InvalidSecret);
    }

    let encoding_key = EncodingKey::from_secret(secret.as_bytes());
    let header = Header::default();

    encode(&header, claims, &encoding_key).map_err(|e| JwtError::TokenGeneration(e.to_string()))
}

/// Validate a bearer token and extract its claims. Expiry is checked by the
/// default validation; any failure (bad signature, malformed, expired,
/// missing secret) collapses into a single error string for logging.
pub fn validate_jwt(token: &str) -> Result<Claims, String> {
    let secret = &config::config().security.jwt_secret;

    if secret.is_empty() {
        return Err("JWT secret not configured".to_string());
    }

    let decoding_key = DecodingKey::from_secret(secret.as_bytes());
    let validation = Validation::default();

    let token_data = decode::<Claims>(token, &decoding_key, &validation)
        .map_err(|e| format!("Invalid JWT token: {}", e))?;

    Ok(token_data.claims)
}
