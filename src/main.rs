//! Order Service - HTTP entry point
//!
//! Composition root. Architecture:
//!
//! ```text
//! ┌──────────┐    ┌───────────────┐    ┌────────────────┐
//! │  Config  │───▶│    Stores     │───▶│ OrderAcceptance│
//! │  (YAML)  │    │ (PG / memory) │    │   (workflow)   │
//! └──────────┘    └───────────────┘    └───────┬────────┘
//!                                              ▼
//!                                      ┌────────────────┐
//!                                      │ Gateway (axum) │
//!                                      └────────────────┘
//! ```

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;

use order_service::config::{AppConfig, StoreBackend};
use order_service::db::Database;
use order_service::gateway::{self, state::AppState};
use order_service::order::stores::{
    MemoryInventoryStore, MemoryOrderStore, PgInventoryStore, PgOrderStore,
};
use order_service::order::{InventoryStore, OrderAcceptance, OrderStore, ServiceableRegions};

fn get_env() -> String {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if (args[i] == "--env" || args[i] == "-e") && i + 1 < args.len() {
            return args[i + 1].clone();
        }
    }
    "dev".to_string()
}

/// Get port override from command line (--port argument)
fn get_port_override() -> Option<u16> {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if args[i] == "--port" && i + 1 < args.len() {
            return args[i + 1].parse().ok();
        }
    }
    None
}

fn main() -> anyhow::Result<()> {
    let env = get_env();
    let app_config = AppConfig::load(&env)?;
    let _log_guard = order_service::logging::init_logging(&app_config)?;

    tracing::info!("Starting Order Service in {} mode", env);

    let runtime = tokio::runtime::Runtime::new().context("Failed to build tokio runtime")?;
    runtime.block_on(run(app_config))
}

async fn run(app_config: AppConfig) -> anyhow::Result<()> {
    let (inventory, orders) = build_stores(&app_config).await?;

    let regions = match &app_config.orders.serviceable_regions {
        Some(codes) if codes.is_empty() => {
            anyhow::bail!("orders.serviceable_regions is empty; no order could ever be accepted")
        }
        Some(codes) => ServiceableRegions::from_codes(codes.iter().cloned()),
        None => ServiceableRegions::us_states(),
    };
    tracing::info!(
        regions = regions.len(),
        write_policy = ?app_config.orders.write_policy,
        "Order acceptance configured"
    );

    let workflow = Arc::new(OrderAcceptance::new(
        inventory.clone(),
        orders,
        Arc::new(regions),
    ));
    let state = Arc::new(AppState::new(
        workflow,
        inventory,
        Duration::from_millis(app_config.gateway.request_timeout_ms),
    ));

    let port = get_port_override().unwrap_or(app_config.gateway.port);
    gateway::run_server(&app_config.gateway.host, port, state).await
}

async fn build_stores(
    config: &AppConfig,
) -> anyhow::Result<(Arc<dyn InventoryStore>, Arc<dyn OrderStore>)> {
    let store = &config.store;
    let policy = config.orders.write_policy;

    match store.backend {
        StoreBackend::Postgres => {
            tracing::info!("[Store] Connecting to PostgreSQL...");
            let db = Database::connect(&store.postgres_url, store.pool_size)
                .await
                .context("Failed to connect to PostgreSQL")?;
            if store.init_schema {
                db.init_schema()
                    .await
                    .context("Failed to initialize schema")?;
            }
            db.seed_inventory(&store.seed_inventory)
                .await
                .context("Failed to seed inventory")?;

            let timeout = Duration::from_millis(store.timeout_ms);
            let pool = db.pool().clone();
            Ok((
                Arc::new(PgInventoryStore::new(pool.clone(), timeout)),
                Arc::new(PgOrderStore::new(pool, timeout, policy)),
            ))
        }
        StoreBackend::Memory => {
            tracing::warn!("[Store] Using in-memory stores; orders are lost on restart");
            let inventory = MemoryInventoryStore::new();
            for item in &store.seed_inventory {
                inventory.set_count(item.item_id.clone(), item.count)?;
            }
            Ok((
                Arc::new(inventory),
                Arc::new(MemoryOrderStore::new(policy)),
            ))
        }
    }
}
