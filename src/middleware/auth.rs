use axum::{
    extract::Request,
    http::HeaderMap,
    middleware::Next,
    response::Response,
};

use crate::auth::Claims;
use crate::error::ApiError;

/// Authenticated client context extracted from a verified bearer token.
/// Unused by the current handlers but attached for downstream access.
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub name: String,
}

impl From<Claims> for AuthUser {
    fn from(claims: Claims) -> Self {
        Self { name: claims.name }
    }
}

/// Bearer-token middleware for protected routes.
///
/// An absent token is a bare 401; a token that is present but fails
/// verification (malformed, bad signature, expired) is a bare 403.
pub async fn jwt_auth_middleware(
    headers: HeaderMap,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_bearer_token(&headers).ok_or(ApiError::MissingToken)?;

    let claims = crate::auth::validate_jwt(&token).map_err(|e| {
        tracing::error!("JWT Error: {}", e);
        ApiError::InvalidToken
    })?;

    request.extensions_mut().insert(AuthUser::from(claims));

    Ok(next.run(request).await)
}

/// The token is the second whitespace-separated part of the Authorization
/// header; a header without one counts as no credentials at all.
fn extract_bearer_token(headers: &HeaderMap) -> Option<String> {
    let auth_str = headers.get("authorization")?.to_str().ok()?;
    let token = auth_str.split_whitespace().nth(1)?;
    Some(token.to_string())
}
