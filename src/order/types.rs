//! Order acceptance data model
//!
//! `OrderRequest` mirrors the inbound JSON shape. Every nested section
//! tolerates missing fields (they default), so shape problems surface from
//! [`OrderRequest::validate`] rather than from deserialization.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

use crate::core_types::{ItemId, OrderId, Quantity, RegionCode};

// ============================================================================
// Inbound request
// ============================================================================

/// Order-creation request as received from the caller
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct OrderRequest {
    pub order: OrderDetails,
    pub customer: Customer,
    pub payment: Payment,
    pub delivery_details: DeliveryDetails,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase", default)]
pub struct OrderDetails {
    #[schema(example = "O-1001")]
    pub order_id: OrderId,
    #[schema(example = "I1")]
    pub item_id: ItemId,
    #[schema(example = 3)]
    pub quantity: Quantity,
    pub item_name: String,
    pub order_status: String,
    pub order_total: MonetaryTotal,
    pub order_type: String,
    pub purchase_date: DateTime<Utc>,
}

/// Carried verbatim into the order record; never parsed
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase", default)]
pub struct MonetaryTotal {
    #[schema(example = "USD")]
    pub currency_code: String,
    #[schema(example = "59.97")]
    pub amount: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase", default)]
pub struct Customer {
    pub customer_id: String,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_address: String,
    pub is_prime: bool,
}

/// Payment details, passed through untouched
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase", default)]
pub struct Payment {
    pub payment_id: String,
    pub payment_status: String,
    pub payment_method: String,
    pub card_number: String,
    pub card_verification_value: String,
    pub billing_address: BillingAddress,
    pub charge_customer_timestamp: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase", default)]
pub struct BillingAddress {
    pub name: String,
    pub address_line1: String,
    pub city: String,
    pub state_or_region: String,
    pub postal_code: String,
    pub country_code: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase", default)]
pub struct DeliveryDetails {
    pub delivery_id: String,
    pub start_shipment_timestamp: String,
    #[serde(rename = "DeliverierInfo")]
    pub deliverer_info: String,
    pub shipment_service: String,
    pub earliest_ship_date: DateTime<Utc>,
    pub latest_ship_date: DateTime<Utc>,
    pub shipping_address: ShippingAddress,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase", default)]
pub struct ShippingAddress {
    pub address_line1: String,
    pub city: String,
    #[schema(example = "CA")]
    pub state_or_region: RegionCode,
    pub postal_code: String,
    pub country_code: String,
}

/// Shape problems the transport layer rejects before the workflow runs
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RequestValidationError {
    #[error("{0} must not be empty")]
    EmptyField(&'static str),

    #[error("Quantity must not be negative, got {0}")]
    NegativeQuantity(Quantity),
}

impl OrderRequest {
    #[inline]
    pub fn item_id(&self) -> &str {
        &self.order.item_id
    }

    #[inline]
    pub fn requested_quantity(&self) -> Quantity {
        self.order.quantity
    }

    #[inline]
    pub fn region_code(&self) -> &str {
        &self.delivery_details.shipping_address.state_or_region
    }

    /// Check the identifier and quantity preconditions of the lookup and write.
    pub fn validate(&self) -> Result<(), RequestValidationError> {
        let required = [
            ("order.OrderId", &self.order.order_id),
            ("order.ItemId", &self.order.item_id),
            ("payment.PaymentId", &self.payment.payment_id),
            ("deliveryDetails.DeliveryId", &self.delivery_details.delivery_id),
        ];
        if let Some((name, _)) = required.iter().find(|(_, v)| v.trim().is_empty()) {
            return Err(RequestValidationError::EmptyField(*name));
        }
        // Zero passes and is admitted against any stock count
        if self.order.quantity < 0 {
            return Err(RequestValidationError::NegativeQuantity(
                self.order.quantity,
            ));
        }
        Ok(())
    }
}

// ============================================================================
// Store records
// ============================================================================

/// Inventory row, read-only copy held for the duration of one request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow, ToSchema)]
pub struct InventoryItem {
    #[schema(example = "I1")]
    pub item_id: ItemId,
    #[schema(example = 5)]
    pub count: Quantity,
}

impl InventoryItem {
    pub fn new(item_id: impl Into<ItemId>, count: Quantity) -> Self {
        Self {
            item_id: item_id.into(),
            count,
        }
    }
}

/// Order record written once on successful validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct AcceptedOrder {
    pub order_id: OrderId,
    pub item_id: ItemId,
    pub item_name: String,
    pub purchase_date: DateTime<Utc>,
    pub amount: String,
    pub currency_code: String,
    pub delivery_id: String,
    pub payment_id: String,
}

impl AcceptedOrder {
    pub fn from_request(req: &OrderRequest) -> Self {
        Self {
            order_id: req.order.order_id.clone(),
            item_id: req.order.item_id.clone(),
            item_name: req.order.item_name.clone(),
            purchase_date: req.order.purchase_date,
            amount: req.order.order_total.amount.clone(),
            currency_code: req.order.order_total.currency_code.clone(),
            delivery_id: req.delivery_details.delivery_id.clone(),
            payment_id: req.payment.payment_id.clone(),
        }
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    /// Minimal well-formed request
    pub fn request(order_id: &str, item_id: &str, quantity: Quantity, region: &str) -> OrderRequest {
        let mut req = OrderRequest::default();
        req.order.order_id = order_id.to_string();
        req.order.item_id = item_id.to_string();
        req.order.quantity = quantity;
        req.order.item_name = "Widget".to_string();
        req.order.order_total.currency_code = "USD".to_string();
        req.order.order_total.amount = "59.97".to_string();
        req.payment.payment_id = format!("P-{}", order_id);
        req.delivery_details.delivery_id = format!("D-{}", order_id);
        req.delivery_details.shipping_address.state_or_region = region.to_string();
        req
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "order": {
            "OrderId": "O-1",
            "ItemId": "I1",
            "Quantity": 3,
            "ItemName": "Widget",
            "OrderStatus": "PENDING",
            "OrderTotal": {"CurrencyCode": "USD", "Amount": "59.97"},
            "OrderType": "STANDARD",
            "PurchaseDate": "2024-03-01T10:00:00Z"
        },
        "customer": {"CustomerId": "C-1", "IsPrime": true},
        "payment": {"PaymentId": "P-1", "CardNumber": "4111"},
        "deliveryDetails": {
            "DeliveryId": "D-1",
            "DeliverierInfo": "UPS",
            "ShippingAddress": {"StateOrRegion": "CA", "CountryCode": "US"}
        }
    }"#;

    #[test]
    fn test_deserialize_wire_shape() {
        let req: OrderRequest = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(req.order.order_id, "O-1");
        assert_eq!(req.item_id(), "I1");
        assert_eq!(req.requested_quantity(), 3);
        assert_eq!(req.region_code(), "CA");
        assert_eq!(req.order.order_total.amount, "59.97");
        assert_eq!(req.delivery_details.deliverer_info, "UPS");
        assert!(req.customer.is_prime);
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_missing_sections_default() {
        let req: OrderRequest = serde_json::from_str(r#"{"order": {"OrderId": "O-1"}}"#).unwrap();
        assert_eq!(req.item_id(), "");
        assert_eq!(req.region_code(), "");
        assert_eq!(
            req.validate(),
            Err(RequestValidationError::EmptyField("order.ItemId"))
        );
    }

    #[test]
    fn test_validate_rejects_negative_quantity() {
        let req = fixtures::request("O-1", "I1", -1, "CA");
        assert_eq!(
            req.validate(),
            Err(RequestValidationError::NegativeQuantity(-1))
        );
    }

    #[test]
    fn test_validate_allows_zero_quantity() {
        assert!(fixtures::request("O-1", "I1", 0, "CA").validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_blank_payment_id() {
        let mut req = fixtures::request("O-1", "I1", 1, "CA");
        req.payment.payment_id = "  ".to_string();
        assert_eq!(
            req.validate(),
            Err(RequestValidationError::EmptyField("payment.PaymentId"))
        );
    }

    #[test]
    fn test_accepted_order_copies_request_fields() {
        let req: OrderRequest = serde_json::from_str(SAMPLE).unwrap();
        let order = AcceptedOrder::from_request(&req);
        assert_eq!(order.order_id, "O-1");
        assert_eq!(order.item_id, "I1");
        assert_eq!(order.item_name, "Widget");
        assert_eq!(order.currency_code, "USD");
        assert_eq!(order.amount, "59.97");
        assert_eq!(order.delivery_id, "D-1");
        assert_eq!(order.payment_id, "P-1");
        assert_eq!(order.purchase_date.to_rfc3339(), "2024-03-01T10:00:00+00:00");
    }
}
