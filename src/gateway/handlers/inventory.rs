//! Inventory lookup handler

use std::sync::Arc;

use axum::extract::{Path, State};

use crate::order::InventoryItem;

use super::super::state::AppState;
use super::super::types::{ApiError, ApiResult, error_codes, ok};

/// Look up the current stock count of an item
///
/// GET /api/v1/items/{item_id}
#[utoipa::path(
    get,
    path = "/api/v1/items/{item_id}",
    params(("item_id" = String, Path, description = "Inventory item identifier")),
    responses(
        (status = 200, description = "Item found", body = InventoryItem, content_type = "application/json"),
        (status = 404, description = "Item not in inventory"),
        (status = 503, description = "Inventory store unavailable")
    ),
    tag = "Inventory"
)]
pub async fn get_item(
    State(state): State<Arc<AppState>>,
    Path(item_id): Path<String>,
) -> ApiResult<InventoryItem> {
    match state.inventory.fetch_item(&item_id).await {
        Ok(Some(item)) => ok(item),
        Ok(None) => ApiError::not_found(error_codes::ITEM_NOT_FOUND, "Item is not in our inventory!")
            .with_reason("item-not-found")
            .into_err(),
        Err(e) => {
            tracing::warn!(item_id = %item_id, error = %e, "Inventory lookup failed");
            ApiError::service_unavailable("Inventory store is unavailable, please try again later")
                .with_reason("store-unavailable")
                .into_err()
        }
    }
}
