//! Idempotent schema setup, run once at startup before serving

use sqlx::PgPool;

const CREATE_PRODUCTS: &str = r#"
CREATE TABLE IF NOT EXISTS products
(
    id SERIAL,
    name TEXT NOT NULL,
    price NUMERIC(10,2) NOT NULL DEFAULT 0.00,
    CONSTRAINT products_pkey PRIMARY KEY (id)
)
"#;

const CREATE_STORE: &str = r#"
CREATE TABLE IF NOT EXISTS store
(
    id INT,
    product_id INT NOT NULL,
    is_available BOOLEAN DEFAULT TRUE,
    CONSTRAINT products_fkey FOREIGN KEY (product_id) REFERENCES products(id)
)
"#;

const CREATE_STORE_INDEX: &str = r#"
CREATE UNIQUE INDEX IF NOT EXISTS unique_store_product
    ON store (id, product_id)
"#;

/// Create both tables and the uniqueness index if they do not exist yet
pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    for statement in [CREATE_PRODUCTS, CREATE_STORE, CREATE_STORE_INDEX] {
        sqlx::query(statement).execute(pool).await?;
    }
    Ok(())
}
