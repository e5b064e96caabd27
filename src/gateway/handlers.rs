//! HTTP handlers
//!
//! Thin adapters: decode, hand off to the workflow or a store, render.

pub mod health;
pub mod helpers;
pub mod inventory;
pub mod order;

// Glob re-exports carry the utoipa `__path_*` items along with each handler
pub use health::*;
pub use inventory::*;
pub use order::*;
