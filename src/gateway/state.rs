use std::sync::Arc;
use std::time::Duration;

use crate::order::{InventoryStore, OrderAcceptance};

/// Gateway application state (shared across requests)
#[derive(Clone)]
pub struct AppState {
    /// Acceptance workflow, composed once at startup
    pub workflow: Arc<OrderAcceptance>,
    /// Inventory store, also used directly by lookups and health checks
    pub inventory: Arc<dyn InventoryStore>,
    /// Deadline applied to each order request
    pub request_timeout: Duration,
}

impl AppState {
    pub fn new(
        workflow: Arc<OrderAcceptance>,
        inventory: Arc<dyn InventoryStore>,
        request_timeout: Duration,
    ) -> Self {
        Self {
            workflow,
            inventory,
            request_timeout,
        }
    }
}
