//! Store Collaborators
//!
//! The workflow reads inventory and writes orders through these traits.
//! Implementations own their client handles and collapse driver errors
//! (and timeouts) into [`StoreError`].

pub mod memory;
pub mod postgres;

pub use memory::{MemoryInventoryStore, MemoryOrderStore};
pub use postgres::{PgInventoryStore, PgOrderStore};

use async_trait::async_trait;

use super::error::StoreError;
use super::types::{AcceptedOrder, InventoryItem};

/// Outcome of a successful order write call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Written,
    /// Insert-if-absent found an existing record; nothing was written
    Duplicate,
}

/// Read-only inventory access
#[async_trait]
pub trait InventoryStore: Send + Sync {
    /// Get store name for logging
    fn name(&self) -> &'static str;

    /// Single-item lookup by key.
    ///
    /// `Ok(None)` means the item does not exist. An outage or timeout is
    /// always `Err`, never `Ok(None)`.
    async fn fetch_item(&self, item_id: &str) -> Result<Option<InventoryItem>, StoreError>;

    /// Cheap liveness probe for the health endpoint
    async fn ping(&self) -> Result<(), StoreError>;
}

/// Order table writer
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Get store name for logging
    fn name(&self) -> &'static str;

    /// Record an accepted order keyed by its order id.
    ///
    /// At most one durable write; no internal retry.
    async fn write(&self, order: &AcceptedOrder) -> Result<WriteOutcome, StoreError>;
}


#[cfg(test)]
pub use mock::{MockInventory, MockOrderStore};
