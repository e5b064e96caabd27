//! Gateway types module
//!
//! ## Output Types
//! - [`ApiResponse<T>`]: Unified API response wrapper
//! - [`ApiError`]: Error response with HTTP status
//!
//! ## Submodules
//! - [`order`]: Workflow result → HTTP status mapping
//! - [`response`]: Response types and error codes

pub mod order;
pub mod response;

// Re-export commonly used types at module root
pub use order::{failure_error, rejection_error};
pub use response::{ApiError, ApiResponse, ApiResult, OrderAcceptedData, error_codes, ok};
