//! Per-request cancellation scope
//!
//! The workflow consults the scope before each suspension point (the
//! inventory lookup and the order write). It never interrupts a store call
//! that is already in flight.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use tokio::time::Instant;

/// Caller-owned cancellation flag
#[derive(Debug, Default)]
pub struct CancelSignal {
    cancelled: AtomicBool,
}

impl CancelSignal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

/// Deadline and/or cancellation signal for one `accept_order` call
#[derive(Debug, Clone, Default)]
pub struct RequestScope {
    deadline: Option<Instant>,
    signal: Option<Arc<CancelSignal>>,
}

impl RequestScope {
    /// Scope that never cancels
    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            deadline: Some(Instant::now() + timeout),
            signal: None,
        }
    }

    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    pub fn with_signal(mut self, signal: Arc<CancelSignal>) -> Self {
        self.signal = Some(signal);
        self
    }

    pub fn is_cancelled(&self) -> bool {
        if self.signal.as_ref().is_some_and(|s| s.is_cancelled()) {
            return true;
        }
        self.deadline.is_some_and(|d| Instant::now() >= d)
    }
}
