//! Axum router configuration with middleware.
//!
//! Routes: the `barber` resource at `/barber` and `/barber/{id}`, plus `/health`.
//! Middleware: CORS, tracing.

use axum::Router;
use axum::routing::get;
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
        .route(
            "/barber",
            get(handlers::barber::list_barbers).post(handlers::barber::create_barber),
        )
        .route(
            "/barber/{id}",
            get(handlers::barber::get_barber)
                .put(handlers::barber::update_barber)
                .delete(handlers::barber::delete_barber),
        )
        .route("/health", get(health_check))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET /health - Simple health check endpoint.
async fn health_check() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
