//! Axum router configuration with middleware.
//!
//! Middleware: CORS (any origin), request tracing.

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::http::handlers;
use crate::state::AppState;

/// Build the complete router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/ai/interpret", post(handlers::interpret::interpret))
        .route("/workflow/save", post(handlers::workflow::save_workflow))
        .route("/workflow/list", get(handlers::workflow::list_workflows))
        .route("/workflow/load/{name}", get(handlers::workflow::load_workflow))
        .route("/upload/{node_id}", post(handlers::upload::upload_file))
        .route("/health", get(health_check))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET /health - liveness probe.
async fn health_check() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
