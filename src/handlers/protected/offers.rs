// handlers/protected/offers.rs - GET /api/offers handler

use axum::{
    extract::RawQuery,
    response::Json,
    Extension,
};

use crate::dataset;
use crate::filter;
use crate::middleware::AuthUser;
use crate::types::OffersResponse;

/// GET /api/offers - filtered view of the offers dataset
///
/// Reloads the dataset from disk on every request (no cache by design) and
/// applies the `filter[field]=value` query constraints. A dataset that fails
/// to load is indistinguishable from an empty one.
pub async fn offers_get(
    Extension(_user): Extension<AuthUser>,
    RawQuery(raw): RawQuery,
) -> Json<OffersResponse> {
    let records = dataset::load().await;

    let spec = filter::parse_filter_spec(raw.as_deref().unwrap_or(""));
    let data = filter::apply(records, &spec);

    Json(OffersResponse {
        total: data.len(),
        data,
    })
}
