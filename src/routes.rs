pub mod health;
pub mod welcome;

use crate::telemetry::RequestIdMakeSpan;
use axum::http::{StatusCode, Uri};
use axum::{Router, routing::get};
use health::health_check;
use tower::ServiceBuilder;
use tower_http::{ServiceBuilderExt, request_id::MakeRequestUuid, trace::TraceLayer};
use tracing::warn;
use welcome::welcome;

pub fn get_router() -> Router {
    let middlewares = ServiceBuilder::new()
        .set_x_request_id(MakeRequestUuid)
        .layer(TraceLayer::new_for_http().make_span_with(RequestIdMakeSpan))
        .propagate_x_request_id();

    Router::new()
        .route("/welcome", get(welcome))
        .route("/health", get(health_check))
        .layer(middlewares)
        .fallback(handle_404)
}

// Only for debugging. Should be removed in production to declutter the logs.
async fn handle_404(uri: Uri) -> StatusCode {
    warn!("Route not found: {}", uri);
    StatusCode::NOT_FOUND
}
