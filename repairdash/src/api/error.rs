use crate::store::StoreError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Errors surfaced by the HTTP handlers.
///
/// The body never carries the cause; it only goes to the logs.
///
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("failed to fetch transactions")]
    FetchTransactions(#[from] StoreError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::FetchTransactions(source) => {
                tracing::error!(error = %source, "failed to fetch transactions");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to fetch transactions",
                )
            }
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}
