//! Database connection management

pub mod schema;

use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;

use crate::config::SeedItem;

/// PostgreSQL database connection pool
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Open a pool of at most `pool_size` connections
    pub async fn connect(database_url: &str, pool_size: u32) -> Result<Self, sqlx::Error> {
        let pool = PgPoolOptions::new()
            .max_connections(pool_size)
            .acquire_timeout(Duration::from_secs(5))
            .connect(database_url)
            .await?;

        tracing::info!(pool_size, "PostgreSQL pool ready");
        Ok(Self { pool })
    }

    /// Get a reference to the connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Create the inventory and orders tables if missing
    pub async fn init_schema(&self) -> Result<(), sqlx::Error> {
        for ddl in [schema::CREATE_INVENTORY_TABLE, schema::CREATE_ORDERS_TABLE] {
            sqlx::query(ddl).execute(&self.pool).await?;
        }
        tracing::info!("inventory and orders tables ready");
        Ok(())
    }

    /// Set an item's count, creating the row if needed
    pub async fn upsert_inventory(&self, item_id: &str, count: i64) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"INSERT INTO inventory (item_id, count) VALUES ($1, $2)
               ON CONFLICT (item_id) DO UPDATE SET count = EXCLUDED.count"#,
        )
        .bind(item_id)
        .bind(count)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Load configured inventory rows
    pub async fn seed_inventory(&self, items: &[SeedItem]) -> Result<(), sqlx::Error> {
        for item in items {
            self.upsert_inventory(&item.item_id, item.count).await?;
        }
        if !items.is_empty() {
            tracing::info!(items = items.len(), "Inventory seeded");
        }
        Ok(())
    }
}
