//! Routing module for the cafe service

use crate::cafe::state::SharedState;
use axum::{body::Body, extract::Request, middleware::Next, response::Response, Router};
use std::time::Instant;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, warn, Instrument};
use uuid::Uuid;

/// Creates and configures the application router with all routes and middleware
pub fn create_app_router(state: SharedState) -> Router {
    // Middleware: CORS (Permissive for local dev)
    let cors_layer = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Routes
    Router::new()
        .merge(crate::cafe::routes())
        .layer(axum::middleware::from_fn(log_requests))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer)
        .with_state(state)
}

/// Middleware: tags each request with an id and logs its outcome
async fn log_requests(req: Request<Body>, next: Next) -> Response {
    let request_id = Uuid::new_v4().simple().to_string();
    let method = req.method().clone();
    let uri = req.uri().clone();
    let start = Instant::now();

    let span = tracing::info_span!(
        "request",
        request_id = %request_id,
        method = %method,
        uri = %uri,
    );

    let res = next.run(req).instrument(span.clone()).await;

    let _guard = span.enter();
    let duration_ms = start.elapsed().as_millis() as u64;
    if res.status().is_success() {
        info!(status = res.status().as_u16(), duration_ms, "Request completed");
    } else {
        warn!(status = res.status().as_u16(), duration_ms, "Request failed");
    }
    res
}
