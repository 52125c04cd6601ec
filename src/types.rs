//! Wire types for the gateway's two endpoints

use serde::{Deserialize, Serialize};

use crate::dataset::Record;

/// POST /auth/token request body
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenRequest {
    pub client_id: String,
    pub client_secret: String,
}

/// POST /auth/token success body
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: u64,
}

/// GET /api/offers response body
#[derive(Debug, Serialize)]
pub struct OffersResponse {
    pub total: usize,
    pub data: Vec<Record>,
}
