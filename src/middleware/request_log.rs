use axum::{extract::Request, middleware::Next, response::Response};

use crate::filter;

/// Request logger: one line per request with method and path, plus the raw
/// query string and parsed filter keys when a query is present. Runs before
/// authentication so rejected requests are still recorded.
pub async fn request_log_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();

    tracing::info!("{} {}", method, uri.path());

    if let Some(query) = uri.query() {
        let spec = filter::parse_filter_spec(query);
        tracing::info!(
            "Query String: {} | Filter Keys: {:?}",
            query,
            spec.keys().collect::<Vec<_>>()
        );
    }

    next.run(request).await
}
