//! Workflow outcomes
//!
//! Every terminal state carries a machine-readable code and a human-readable
//! message. Codes are stable API surface; messages are not.

use std::fmt;

use crate::core_types::{OrderId, Quantity, RegionCode};

use super::state::WorkflowState;

/// Business-rule rejection (user-visible, never retried)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectReason {
    ItemNotFound,
    InsufficientInventory {
        requested: Quantity,
        available: Quantity,
    },
    UnserviceableRegion(RegionCode),
    DuplicateOrder(OrderId),
}

impl RejectReason {
    pub fn code(&self) -> &'static str {
        match self {
            RejectReason::ItemNotFound => "item-not-found",
            RejectReason::InsufficientInventory { .. } => "InsufficientInventory",
            RejectReason::UnserviceableRegion(_) => "UnserviceableRegion",
            RejectReason::DuplicateOrder(_) => "duplicate-order",
        }
    }

    pub fn message(&self) -> String {
        match self {
            RejectReason::ItemNotFound => "Item is not in our inventory!".to_string(),
            RejectReason::InsufficientInventory {
                requested,
                available,
            } => format!(
                "Not enough inventory! requested {}, available {}",
                requested, available
            ),
            RejectReason::UnserviceableRegion(region) => {
                format!("Can not deliver to region '{}'", region)
            }
            RejectReason::DuplicateOrder(order_id) => {
                format!("Order {} already exists", order_id)
            }
        }
    }
}

/// Technical failure (server-side, not an answer about the order itself)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailReason {
    StoreUnavailable,
    WriteFailed,
    Cancelled,
}

impl FailReason {
    pub fn code(&self) -> &'static str {
        match self {
            FailReason::StoreUnavailable => "store-unavailable",
            FailReason::WriteFailed => "write-failed",
            FailReason::Cancelled => "cancelled",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            FailReason::StoreUnavailable => "Inventory store is unavailable, please try again later",
            FailReason::WriteFailed => "error: fail to save into database",
            FailReason::Cancelled => "Request was cancelled before completion",
        }
    }
}

/// Result of one `accept_order` execution
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkflowResult {
    Accepted { order_id: OrderId },
    Rejected(RejectReason),
    Failed(FailReason),
}

impl WorkflowResult {
    pub fn code(&self) -> &'static str {
        match self {
            WorkflowResult::Accepted { .. } => "accepted",
            WorkflowResult::Rejected(reason) => reason.code(),
            WorkflowResult::Failed(reason) => reason.code(),
        }
    }

    pub fn message(&self) -> String {
        match self {
            WorkflowResult::Accepted { .. } => "Order placed successfully".to_string(),
            WorkflowResult::Rejected(reason) => reason.message(),
            WorkflowResult::Failed(reason) => reason.message().to_string(),
        }
    }

    /// Terminal FSM state this result corresponds to
    pub fn state(&self) -> WorkflowState {
        match self {
            WorkflowResult::Accepted { .. } => WorkflowState::Accepted,
            WorkflowResult::Rejected(_) => WorkflowState::Rejected,
            WorkflowResult::Failed(_) => WorkflowState::Failed,
        }
    }
}

impl fmt::Display for WorkflowResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.state(), self.code())
    }
}
