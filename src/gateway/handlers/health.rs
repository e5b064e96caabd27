//! Health check handlers

use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode};
use utoipa::ToSchema;

use super::super::state::AppState;
use super::super::types::{ApiResponse, error_codes};
use super::helpers::now_ms;

/// Health check response data
#[derive(serde::Serialize, ToSchema)]
pub struct HealthResponse {
    /// Server timestamp in milliseconds
    #[schema(example = 1703494800000_u64)]
    pub timestamp_ms: u64,
    /// Build revision
    #[schema(example = "a1b2c3d")]
    pub build: &'static str,
}

/// Liveness text kept at the root path
pub async fn root() -> Json<&'static str> {
    Json("Order service running successfully!")
}

/// Health check endpoint
///
/// Pings the inventory store. Store details are logged, never returned.
///
/// - Healthy: 200 OK + {code: 0, data: {timestamp_ms, build}}
/// - Unhealthy: 503 Service Unavailable + {code: 5001, msg: "unavailable"}
#[utoipa::path(
    get,
    path = "/api/v1/health",
    responses(
        (status = 200, description = "Service healthy", body = HealthResponse, content_type = "application/json"),
        (status = 503, description = "Service unavailable")
    ),
    tag = "System"
)]
pub async fn health_check(
    State(state): State<Arc<AppState>>,
) -> (StatusCode, Json<ApiResponse<HealthResponse>>) {
    match state.inventory.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(ApiResponse::success(HealthResponse {
                timestamp_ms: now_ms(),
                build: env!("GIT_HASH"),
            })),
        ),
        Err(e) => {
            tracing::error!(store = state.inventory.name(), error = %e, "[HEALTH] Store ping failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ApiResponse {
                    code: error_codes::SERVICE_UNAVAILABLE,
                    msg: "unavailable".to_string(),
                    reason: None,
                    data: None,
                }),
            )
        }
    }
}
