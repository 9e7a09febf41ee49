use crate::models::HealthResponse;
use axum::{http::StatusCode, response::IntoResponse, Json};

pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(HealthResponse::healthy()))
}

/// The rate table is built before the listener opens, so ready means up.
pub async fn readiness_check() -> impl IntoResponse {
    (StatusCode::OK, Json(HealthResponse::ready()))
}
