//! OpenAPI / Swagger UI Documentation
//!
//! - Swagger UI: `http://localhost:8080/docs`
//! - OpenAPI JSON: `http://localhost:8080/api-docs/openapi.json`

use utoipa::OpenApi;

use crate::gateway::handlers::HealthResponse;
use crate::gateway::types::OrderAcceptedData;
use crate::order::types::{
    BillingAddress, Customer, DeliveryDetails, InventoryItem, MonetaryTotal, OrderDetails,
    OrderRequest, Payment, ShippingAddress,
};

/// Main API Documentation struct
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Order Service API",
        version = "1.0.0",
        description = "Accepts orders against live inventory and serviceable shipping regions.",
        license(
            name = "MIT"
        )
    ),
    servers(
        (url = "http://localhost:8080", description = "Development"),
    ),
    paths(
        crate::gateway::handlers::health_check,
        crate::gateway::handlers::get_item,
        crate::gateway::handlers::create_order,
    ),
    components(
        schemas(
            HealthResponse,
            OrderAcceptedData,
            InventoryItem,
            OrderRequest,
            OrderDetails,
            MonetaryTotal,
            Customer,
            Payment,
            BillingAddress,
            DeliveryDetails,
            ShippingAddress,
        )
    ),
    tags(
        (name = "Orders", description = "Order acceptance"),
        (name = "Inventory", description = "Inventory lookups"),
        (name = "System", description = "Health checks and system info")
    )
)]
pub struct ApiDoc;
