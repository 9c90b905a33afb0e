use super::error::ApiError;
use crate::{core::prelude::*, domain::prelude::*, store};
use axum::{extract::State, Json};

/// `GET /api/transactions`
///
/// Every repair transaction with its customer and bike, most recent first.
///
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Transaction>>, ApiError> {
    let transactions = store::list_all_transactions(state.store.as_ref()).await?;
    Ok(Json(transactions))
}
