//! API Response types and error codes
//!
//! - `ApiResponse<T>`: Unified response wrapper
//! - `ApiError`: Error half of every handler result
//! - `error_codes`: Standard error code constants

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use utoipa::ToSchema;

// ============================================================================
// Unified API Response Format
// ============================================================================

/// Unified API response wrapper
///
/// All API responses follow this structure:
/// - code: 0 = success, non-zero = error code
/// - msg: short message description
/// - reason: machine-readable workflow reason (errors only)
/// - data: actual data (success) or null (error)
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiResponse<T> {
    /// Response code: 0 for success, non-zero for errors
    #[schema(example = 0)]
    pub code: i32,
    /// Response message
    #[schema(example = "ok")]
    pub msg: String,
    /// Workflow reason code, e.g. `item-not-found`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Response data (only present when code == 0)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Create success response
    pub fn success(data: T) -> Self {
        Self {
            code: error_codes::SUCCESS,
            msg: "ok".to_string(),
            reason: None,
            data: Some(data),
        }
    }
}

// ============================================================================
// Response DTOs
// ============================================================================

/// Accepted order data
#[derive(Debug, Serialize, ToSchema)]
pub struct OrderAcceptedData {
    #[schema(example = "O-1001")]
    pub order_id: String,
    #[schema(example = "ACCEPTED")]
    pub order_status: String,
    pub accepted_at: u64,
}

// ============================================================================
// Error type
// ============================================================================

/// Handler error rendered as `ApiResponse<()>` with an HTTP status
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub code: i32,
    pub reason: Option<String>,
    pub msg: String,
}

pub type ApiResult<T> = Result<(StatusCode, Json<ApiResponse<T>>), ApiError>;

impl ApiError {
    pub fn new(status: StatusCode, code: i32, msg: impl Into<String>) -> Self {
        Self {
            status,
            code,
            reason: None,
            msg: msg.into(),
        }
    }

    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    /// 400 for a request that could not be decoded or failed shape checks
    pub fn invalid_payload(msg: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, error_codes::INVALID_PAYLOAD, msg)
            .with_reason("invalid.payload")
    }

    pub fn not_found(code: i32, msg: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, code, msg)
    }

    pub fn service_unavailable(msg: impl Into<String>) -> Self {
        Self::new(
            StatusCode::SERVICE_UNAVAILABLE,
            error_codes::SERVICE_UNAVAILABLE,
            msg,
        )
    }

    pub fn into_err<T>(self) -> Result<T, Self> {
        Err(self)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ApiResponse::<()> {
            code: self.code,
            msg: self.msg,
            reason: self.reason,
            data: None,
        };
        (self.status, Json(body)).into_response()
    }
}

/// 200 OK with data
pub fn ok<T>(data: T) -> ApiResult<T> {
    Ok((StatusCode::OK, Json(ApiResponse::success(data))))
}

// ============================================================================
// Error Codes
// ============================================================================

/// Standard API error codes
pub mod error_codes {
    // Success
    pub const SUCCESS: i32 = 0;

    // Client errors (1xxx)
    pub const INVALID_PAYLOAD: i32 = 1001;
    pub const INSUFFICIENT_INVENTORY: i32 = 1002;
    pub const UNSERVICEABLE_REGION: i32 = 1003;

    // Resource errors (4xxx)
    pub const ITEM_NOT_FOUND: i32 = 4001;
    pub const DUPLICATE_ORDER: i32 = 4009;

    // Server errors (5xxx)
    pub const SERVICE_UNAVAILABLE: i32 = 5001;
    pub const WRITE_FAILED: i32 = 5002;
    pub const REQUEST_CANCELLED: i32 = 5004;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_serialization_omits_reason() {
        let json = serde_json::to_value(ApiResponse::success(1u32)).unwrap();
        assert_eq!(json["code"], 0);
        assert_eq!(json["msg"], "ok");
        assert_eq!(json["data"], 1);
        assert!(json.get("reason").is_none());
    }

    #[test]
    fn test_error_serialization_omits_data() {
        let body = ApiResponse::<()> {
            code: error_codes::WRITE_FAILED,
            msg: "boom".to_string(),
            reason: Some("write-failed".to_string()),
            data: None,
        };
        let json = serde_json::to_value(body).unwrap();
        assert_eq!(json["code"], error_codes::WRITE_FAILED);
        assert_eq!(json["reason"], "write-failed");
        assert!(json.get("data").is_none());
    }

    #[test]
    fn test_invalid_payload() {
        let err = ApiError::invalid_payload("bad json");
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.code, error_codes::INVALID_PAYLOAD);
        assert_eq!(err.reason.as_deref(), Some("invalid.payload"));
    }
}
