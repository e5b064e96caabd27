//! Order Acceptance
//!
//! Decides whether an inbound order is admitted and records it exactly once
//! when it is.
//!
//! # State Machine
//!
//! ```text
//! RECEIVED → ITEM_LOOKUP → VALIDATING → PERSISTING → ACCEPTED
//!                ↓              ↓            ↓
//!          REJECTED/FAILED   REJECTED   REJECTED/FAILED
//! ```
//!
//! # Safety Invariants
//!
//! 1. **Stock bound**: an order is written only if `count >= quantity` at lookup time
//! 2. **Region bound**: an order is written only if the destination is serviceable
//! 3. **Advisory check**: stock is never decremented here; concurrent requests
//!    for the same item may all pass against the same count
//! 4. **No raw errors**: store failures reach callers only as reason codes

pub mod eligibility;
pub mod error;
pub mod outcome;
pub mod regions;
pub mod scope;
pub mod state;
pub mod stores;
pub mod types;
pub mod workflow;


// Re-exports for convenience
pub use eligibility::{Eligibility, check};
pub use error::StoreError;
pub use outcome::{FailReason, RejectReason, WorkflowResult};
pub use regions::{ServiceableRegions, US_STATES};
pub use scope::{CancelSignal, RequestScope};
pub use state::WorkflowState;
pub use stores::{InventoryStore, OrderStore, WriteOutcome};
pub use types::{AcceptedOrder, InventoryItem, OrderRequest, RequestValidationError};
pub use workflow::OrderAcceptance;
