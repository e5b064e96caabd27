//! Store Error Types
//!
//! Collaborator failures are collapsed into [`StoreError`] at the store
//! boundary, so the workflow never sees driver-specific error types.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    #[error("Store call timed out after {0}ms")]
    Timeout(u64),
}

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        StoreError::Unavailable(e.to_string())
    }
}

impl<T> From<std::sync::PoisonError<T>> for StoreError {
    fn from(e: std::sync::PoisonError<T>) -> Self {
        StoreError::Unavailable(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            StoreError::Timeout(250).to_string(),
            "Store call timed out after 250ms"
        );
        assert_eq!(
            StoreError::Unavailable("connection refused".into()).to_string(),
            "Store unavailable: connection refused"
        );
    }

    #[test]
    fn test_from_sqlx_error() {
        let err: StoreError = sqlx::Error::PoolTimedOut.into();
        assert!(matches!(err, StoreError::Unavailable(_)));
    }
}
