//! Order creation handler

use std::sync::Arc;

use axum::{Json, extract::State, extract::rejection::JsonRejection};

use crate::order::{OrderRequest, RequestScope, WorkflowResult};

use super::super::state::AppState;
use super::super::types::{
    ApiError, ApiResult, OrderAcceptedData, failure_error, ok, rejection_error,
};
use super::helpers::now_ms;

/// Create order endpoint
///
/// POST /api/v1/order
#[utoipa::path(
    post,
    path = "/api/v1/order",
    request_body(content = OrderRequest, description = "Order creation request", content_type = "application/json"),
    responses(
        (status = 200, description = "Order accepted", body = OrderAcceptedData, content_type = "application/json"),
        (status = 400, description = "Invalid payload or order rejected"),
        (status = 409, description = "Order id already exists"),
        (status = 500, description = "Order could not be saved"),
        (status = 503, description = "Inventory store unavailable"),
        (status = 504, description = "Request deadline exceeded")
    ),
    tag = "Orders"
)]
pub async fn create_order(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<OrderRequest>, JsonRejection>,
) -> ApiResult<OrderAcceptedData> {
    let Json(req) = payload.map_err(|e| ApiError::invalid_payload(e.body_text()))?;
    req.validate()
        .map_err(|e| ApiError::invalid_payload(e.to_string()))?;

    tracing::info!(
        order_id = %req.order.order_id,
        item_id = %req.item_id(),
        quantity = req.requested_quantity(),
        region = %req.region_code(),
        "Create order received"
    );

    let scope = RequestScope::with_timeout(state.request_timeout);
    let result = state.workflow.accept_order_within(&req, &scope).await;

    match result {
        WorkflowResult::Accepted { order_id } => ok(OrderAcceptedData {
            order_id,
            order_status: "ACCEPTED".to_string(),
            accepted_at: now_ms(),
        }),
        WorkflowResult::Rejected(reason) => rejection_error(&reason).into_err(),
        WorkflowResult::Failed(reason) => failure_error(reason).into_err(),
    }
}
