use crate::core::prelude::*;
use axum::{http::Request, routing::get, Router};
use tower_http::trace::TraceLayer;

pub mod dashboard;
pub mod error;
pub mod transactions;

/// Builds the application router.
///
/// Each request gets its own span, tagged with a random request id.
///
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(dashboard::page))
        .route("/api/transactions", get(transactions::list))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request<_>| {
                tracing::info_span!(
                    "request",
                    id = %uuid::Uuid::new_v4(),
                    method = %request.method(),
                    uri = %request.uri(),
                )
            }),
        )
        .with_state(state)
}
