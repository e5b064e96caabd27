//! In-process stores
//!
//! Backed by `RwLock<FxHashMap>`. Used by the `memory` backend and by the
//! HTTP-level tests.

use std::sync::RwLock;

use async_trait::async_trait;
use rustc_hash::FxHashMap;

use crate::config::WritePolicy;
use crate::core_types::{ItemId, OrderId, Quantity};
use crate::order::error::StoreError;
use crate::order::types::{AcceptedOrder, InventoryItem};

use super::{InventoryStore, OrderStore, WriteOutcome};

#[derive(Debug, Default)]
pub struct MemoryInventoryStore {
    items: RwLock<FxHashMap<ItemId, Quantity>>,
}

impl MemoryInventoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an item's stock count
    pub fn set_count(&self, item_id: impl Into<ItemId>, count: Quantity) -> Result<(), StoreError> {
        self.items.write()?.insert(item_id.into(), count);
        Ok(())
    }
}

#[async_trait]
impl InventoryStore for MemoryInventoryStore {
    fn name(&self) -> &'static str {
        "memory-inventory"
    }

    async fn fetch_item(&self, item_id: &str) -> Result<Option<InventoryItem>, StoreError> {
        let items = self.items.read()?;
        Ok(items
            .get(item_id)
            .map(|count| InventoryItem::new(item_id, *count)))
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.items.read()?;
        Ok(())
    }
}

#[derive(Debug)]
pub struct MemoryOrderStore {
    orders: RwLock<FxHashMap<OrderId, AcceptedOrder>>,
    policy: WritePolicy,
}

impl MemoryOrderStore {
    pub fn new(policy: WritePolicy) -> Self {
        Self {
            orders: RwLock::new(FxHashMap::default()),
            policy,
        }
    }

    pub fn get(&self, order_id: &str) -> Result<Option<AcceptedOrder>, StoreError> {
        Ok(self.orders.read()?.get(order_id).cloned())
    }

    pub fn len(&self) -> Result<usize, StoreError> {
        Ok(self.orders.read()?.len())
    }
}

#[async_trait]
impl OrderStore for MemoryOrderStore {
    fn name(&self) -> &'static str {
        "memory-orders"
    }

    async fn write(&self, order: &AcceptedOrder) -> Result<WriteOutcome, StoreError> {
        let mut orders = self.orders.write()?;
        match self.policy {
            WritePolicy::InsertIfAbsent if orders.contains_key(&order.order_id) => {
                Ok(WriteOutcome::Duplicate)
            }
            _ => {
                orders.insert(order.order_id.clone(), order.clone());
                Ok(WriteOutcome::Written)
            }
        }
    }
}
