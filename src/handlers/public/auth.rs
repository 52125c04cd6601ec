// handlers/public/auth.rs - POST /auth/token handler

use axum::response::Json;

use crate::auth::{self, Claims};
use crate::config;
use crate::error::ApiError;
use crate::types::{TokenRequest, TokenResponse};

/// POST /auth/token - Simplified OAuth2-style token issuance
///
/// Succeeds only on an exact match of both configured client credentials and
/// returns a signed 1-hour bearer token. Any mismatch gets the same generic
/// 401, with no hint of which credential was wrong.
pub async fn token_post(
    Json(payload): Json<TokenRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    let security = &config::config().security;

    if payload.client_id != security.client_id || payload.client_secret != security.client_secret {
        return Err(ApiError::unauthorized("Invalid credentials"));
    }

    let claims = Claims::new(auth::CLIENT_NAME.to_string());
    let access_token = auth::generate_jwt(&claims).map_err(|e| {
        tracing::error!("Token signing failed: {}", e);
        ApiError::internal_server_error("Unable to issue token")
    })?;

    Ok(Json(TokenResponse {
        access_token,
        token_type: "Bearer".to_string(),
        expires_in: security.token_ttl_secs,
    }))
}
