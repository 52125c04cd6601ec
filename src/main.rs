use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use serde_json::{json, Value};
use tower_http::cors::CorsLayer;

use offers_gateway::{config, handlers, middleware as mw};

#[tokio::main]
async fn main() {
    // Load .env if present so cargo run picks up DATA_FILE, JWT_SECRET, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    // Initialize configuration (this loads the config singleton)
    let config = config::config();
    tracing::info!("Starting Offers Gateway (data file: {})", config.data.file);

    let app = app();

    let bind_addr = format!("0.0.0.0:{}", config.server.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {}", bind_addr, e));

    println!("Server running on http://{}", bind_addr);

    axum::serve(listener, app).await.expect("server");
}

fn app() -> Router {
    Router::new()
        // Public
        .route("/", get(root))
        .route("/health", get(health))
        .merge(auth_routes())
        // Protected API
        .merge(offers_routes())
        // Global middleware
        .layer(CorsLayer::permissive())
        .layer(middleware::from_fn(mw::request_log_middleware))
}

fn auth_routes() -> Router {
    use handlers::public::auth;

    Router::new().route("/auth/token", post(auth::token_post))
}

fn offers_routes() -> Router {
    use handlers::protected::offers;

    Router::new()
        .route("/api/offers", get(offers::offers_get))
        .layer(middleware::from_fn(mw::jwt_auth_middleware))
}

async fn root() -> axum::response::Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    axum::response::Json(json!({
        "name": "Offers Gateway",
        "version": version,
        "description": "Bearer-token gateway over a static offers dataset",
        "endpoints": {
            "health": "/health (public)",
            "token": "/auth/token (public - token acquisition)",
            "offers": "/api/offers?filter[field]=value (protected)",
        }
    }))
}

async fn health() -> axum::response::Json<Value> {
    axum::response::Json(json!({
        "status": "ok",
        "timestamp": chrono::Utc::now(),
    }))
}
