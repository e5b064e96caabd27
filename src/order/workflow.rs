//! Order Acceptance Workflow
//!
//! Drives one request through lookup → eligibility → write and reports a
//! structured [`WorkflowResult`]. Holds no per-request state; one instance
//! is shared by all concurrent requests.

use std::sync::Arc;
use tracing::{debug, info, warn};

use super::eligibility::{self, Eligibility};
use super::outcome::{FailReason, RejectReason, WorkflowResult};
use super::regions::ServiceableRegions;
use super::scope::RequestScope;
use super::state::WorkflowState;
use super::stores::{InventoryStore, OrderStore, WriteOutcome};
use super::types::{AcceptedOrder, OrderRequest};

pub struct OrderAcceptance {
    inventory: Arc<dyn InventoryStore>,
    orders: Arc<dyn OrderStore>,
    regions: Arc<ServiceableRegions>,
}

impl OrderAcceptance {
    pub fn new(
        inventory: Arc<dyn InventoryStore>,
        orders: Arc<dyn OrderStore>,
        regions: Arc<ServiceableRegions>,
    ) -> Self {
        Self {
            inventory,
            orders,
            regions,
        }
    }

    pub fn regions(&self) -> &ServiceableRegions {
        &self.regions
    }

    /// Run the workflow with no deadline
    pub async fn accept_order(&self, req: &OrderRequest) -> WorkflowResult {
        self.accept_order_within(req, &RequestScope::unbounded())
            .await
    }

    /// Run the workflow, checking `scope` before the lookup and before the write
    pub async fn accept_order_within(
        &self,
        req: &OrderRequest,
        scope: &RequestScope,
    ) -> WorkflowResult {
        let order_id = req.order.order_id.as_str();
        let item_id = req.item_id();
        let mut state = WorkflowState::Received;

        if scope.is_cancelled() {
            return finish(&mut state, order_id, WorkflowResult::Failed(FailReason::Cancelled));
        }

        // === ITEM_LOOKUP ===
        advance(&mut state, WorkflowState::ItemLookup, order_id);
        let item = match self.inventory.fetch_item(item_id).await {
            Ok(Some(item)) => item,
            Ok(None) => {
                return finish(
                    &mut state,
                    order_id,
                    WorkflowResult::Rejected(RejectReason::ItemNotFound),
                );
            }
            Err(e) => {
                warn!(
                    order_id = %order_id,
                    item_id = %item_id,
                    store = self.inventory.name(),
                    error = %e,
                    "Inventory lookup failed"
                );
                return finish(
                    &mut state,
                    order_id,
                    WorkflowResult::Failed(FailReason::StoreUnavailable),
                );
            }
        };

        // === VALIDATING ===
        advance(&mut state, WorkflowState::Validating, order_id);
        let eligibility = eligibility::check(
            &item,
            req.requested_quantity(),
            req.region_code(),
            &self.regions,
        );
        if let Eligibility::Rejected(reason) = eligibility {
            return finish(&mut state, order_id, WorkflowResult::Rejected(reason));
        }

        if scope.is_cancelled() {
            return finish(&mut state, order_id, WorkflowResult::Failed(FailReason::Cancelled));
        }

        // === PERSISTING ===
        advance(&mut state, WorkflowState::Persisting, order_id);
        let accepted = AcceptedOrder::from_request(req);
        let result = match self.orders.write(&accepted).await {
            Ok(WriteOutcome::Written) => WorkflowResult::Accepted {
                order_id: accepted.order_id,
            },
            Ok(WriteOutcome::Duplicate) => {
                WorkflowResult::Rejected(RejectReason::DuplicateOrder(accepted.order_id))
            }
            Err(e) => {
                warn!(
                    order_id = %order_id,
                    store = self.orders.name(),
                    error = %e,
                    "Order write failed"
                );
                WorkflowResult::Failed(FailReason::WriteFailed)
            }
        };
        finish(&mut state, order_id, result)
    }
}

fn advance(state: &mut WorkflowState, next: WorkflowState, order_id: &str) {
    debug_assert!(
        state.can_transition_to(next),
        "illegal transition {} -> {}",
        state,
        next
    );
    debug!(order_id = %order_id, from = %state, to = %next, "Workflow transition");
    *state = next;
}

fn finish(state: &mut WorkflowState, order_id: &str, result: WorkflowResult) -> WorkflowResult {
    advance(state, result.state(), order_id);
    info!(
        order_id = %order_id,
        state = %state,
        code = result.code(),
        "Order workflow finished"
    );
    result
}
