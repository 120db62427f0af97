use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::app_state::AppState;
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use pantry_core::domain::health::{entities::DatabaseHealthStatus, ports::HealthCheckService};

#[utoipa::path(
    get,
    path = "/ready",
    tag = "health",
    summary = "Readiness probe",
    description = "503 while the database is unreachable.",
    responses(
        (status = 200, body = DatabaseHealthStatus),
        (status = 503, body = DatabaseHealthStatus)
    ),
)]
pub async fn health_ready(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let status = state.service.readness().await?;
    let code = if status.is_healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    Ok((code, Json(status)))
}
