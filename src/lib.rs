//! Order Service
//!
//! Accepts orders over HTTP after checking live inventory and the destination
//! region, and records each accepted order exactly once.
//!
//! # Modules
//!
//! - [`core_types`] - Identifier and quantity aliases
//! - [`order`] - Acceptance workflow, eligibility rules, store traits
//! - [`db`] - PostgreSQL pool and schema bootstrap
//! - [`gateway`] - axum HTTP surface
//! - [`config`] - YAML configuration
//! - [`logging`] - tracing subscriber setup

// Core types - must be first!
pub mod core_types;

pub mod config;
pub mod db;
pub mod gateway;
pub mod logging;
pub mod order;

// Convenient re-exports at crate root
pub use config::{AppConfig, StoreBackend, WritePolicy};
pub use core_types::{ItemId, OrderId, Quantity, RegionCode};
pub use order::{
    AcceptedOrder, FailReason, InventoryItem, InventoryStore, OrderAcceptance, OrderRequest,
    OrderStore, RejectReason, RequestScope, ServiceableRegions, StoreError, WorkflowResult,
};
