//! Workflow result → HTTP mapping
//!
//! The workflow speaks in reason codes; this is the only place that turns
//! them into status codes and numeric API codes.

use axum::http::StatusCode;

use crate::order::{FailReason, RejectReason};

use super::response::{ApiError, error_codes};

/// Rejections are answers about the order: 4xx
pub fn rejection_error(reason: &RejectReason) -> ApiError {
    let (status, code) = match reason {
        RejectReason::ItemNotFound => (StatusCode::BAD_REQUEST, error_codes::ITEM_NOT_FOUND),
        RejectReason::InsufficientInventory { .. } => (
            StatusCode::BAD_REQUEST,
            error_codes::INSUFFICIENT_INVENTORY,
        ),
        RejectReason::UnserviceableRegion(_) => {
            (StatusCode::BAD_REQUEST, error_codes::UNSERVICEABLE_REGION)
        }
        RejectReason::DuplicateOrder(_) => (StatusCode::CONFLICT, error_codes::DUPLICATE_ORDER),
    };
    ApiError::new(status, code, reason.message()).with_reason(reason.code())
}

/// Failures are server-side: 5xx
pub fn failure_error(reason: FailReason) -> ApiError {
    let (status, code) = match reason {
        FailReason::StoreUnavailable => (
            StatusCode::SERVICE_UNAVAILABLE,
            error_codes::SERVICE_UNAVAILABLE,
        ),
        FailReason::WriteFailed => (
            StatusCode::INTERNAL_SERVER_ERROR,
            error_codes::WRITE_FAILED,
        ),
        FailReason::Cancelled => (StatusCode::GATEWAY_TIMEOUT, error_codes::REQUEST_CANCELLED),
    };
    ApiError::new(status, code, reason.message()).with_reason(reason.code())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejections_are_client_errors() {
        let cases = [
            (RejectReason::ItemNotFound, StatusCode::BAD_REQUEST),
            (
                RejectReason::InsufficientInventory {
                    requested: 3,
                    available: 2,
                },
                StatusCode::BAD_REQUEST,
            ),
            (
                RejectReason::UnserviceableRegion("ZZ".into()),
                StatusCode::BAD_REQUEST,
            ),
            (
                RejectReason::DuplicateOrder("O-1".into()),
                StatusCode::CONFLICT,
            ),
        ];
        for (reason, status) in cases {
            assert_eq!(rejection_error(&reason).status, status, "{}", reason.code());
        }
    }

    #[test]
    fn test_failures_are_server_errors() {
        assert_eq!(
            failure_error(FailReason::StoreUnavailable).status,
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            failure_error(FailReason::WriteFailed).status,
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            failure_error(FailReason::Cancelled).status,
            StatusCode::GATEWAY_TIMEOUT
        );
    }

    #[test]
    fn test_api_error_carries_reason_code() {
        let err = rejection_error(&RejectReason::ItemNotFound);
        assert_eq!(err.reason.as_deref(), Some("item-not-found"));
        assert_eq!(err.code, error_codes::ITEM_NOT_FOUND);
        assert_eq!(err.msg, "Item is not in our inventory!");

        let err = failure_error(FailReason::WriteFailed);
        assert_eq!(err.reason.as_deref(), Some("write-failed"));
        assert_eq!(err.code, error_codes::WRITE_FAILED);
    }
}
