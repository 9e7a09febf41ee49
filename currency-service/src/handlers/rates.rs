use crate::models::RatesResponse;
use crate::startup::AppState;
use axum::{extract::State, Json};

/// `GET /rates`: the full table quoted against the base currency.
pub async fn list_rates(State(state): State<AppState>) -> Json<RatesResponse> {
    let table = state.currency.rates();

    Json(RatesResponse {
        base: table.base().to_string(),
        rates: table.entries().clone(),
    })
}
