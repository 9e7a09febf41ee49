use crate::error::ExchangeError;
use crate::models::{ExchangeParams, ExchangeResponse};
use crate::startup::AppState;
use axum::{
    extract::{Query, State},
    Json,
};
use service_core::error::AppError;

/// `GET /exchange?from=USD&to=EUR&amount=100`
pub async fn exchange(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<ExchangeResponse>, AppError> {
    let params = ExchangeParams::from_pairs(pairs);

    let response = state.currency.exchange(&params).map_err(|e| {
        tracing::info!(error = %e, "Rejected exchange request");
        e
    })?;

    Ok(Json(response))
}

/// Fallback for every non-GET method on `/exchange`.
pub async fn method_not_allowed() -> AppError {
    ExchangeError::MethodNotAllowed.into()
}
