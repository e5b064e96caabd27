/// Inventory table (read-only from the workflow's point of view)
pub const CREATE_INVENTORY_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS inventory (
    item_id TEXT PRIMARY KEY,
    count   BIGINT NOT NULL CHECK (count >= 0)
)
"#;

/// Order table, one row per accepted order
pub const CREATE_ORDERS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS orders (
    order_id      TEXT PRIMARY KEY,
    item_id       TEXT NOT NULL,
    item_name     TEXT NOT NULL,
    purchase_date TIMESTAMPTZ NOT NULL,
    amount        TEXT NOT NULL,
    currency_code TEXT NOT NULL,
    delivery_id   TEXT NOT NULL,
    payment_id    TEXT NOT NULL,
    created_at    TIMESTAMPTZ NOT NULL DEFAULT NOW()
)
"#;
