//! Product data access

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use tracing::debug;

/// A row in the `products` table
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub price: Decimal,
}

/// Repository for product database operations
#[derive(Debug, Clone)]
pub struct ProductService {
    pool: PgPool,
}

impl ProductService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Fetch a single product by primary key
    pub async fn fetch(&self, id: i32) -> Result<Option<Product>, sqlx::Error> {
        sqlx::query_as::<_, Product>("SELECT id, name, price FROM products WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    /// List products in id order. An empty table yields an empty vec, not an
    /// error.
    pub async fn list(&self, start: i64, count: i64) -> Result<Vec<Product>, sqlx::Error> {
        let products = sqlx::query_as::<_, Product>(
            "SELECT id, name, price FROM products ORDER BY id LIMIT $1 OFFSET $2",
        )
        .bind(count)
        .bind(start)
        .fetch_all(&self.pool)
        .await?;

        debug!(count = products.len(), "listed products");
        Ok(products)
    }

    /// Insert a product and return the row including its generated id
    pub async fn create(&self, name: &str, price: Decimal) -> Result<Product, sqlx::Error> {
        let product = sqlx::query_as::<_, Product>(
            "INSERT INTO products (name, price) VALUES ($1, $2) RETURNING id, name, price",
        )
        .bind(name)
        .bind(price)
        .fetch_one(&self.pool)
        .await?;

        debug!(id = product.id, "created product");
        Ok(product)
    }

    /// Replace name and price for the given id. Both fields are always
    /// overwritten. Returns `None` when no row matches.
    pub async fn update(
        &self,
        id: i32,
        name: &str,
        price: Decimal,
    ) -> Result<Option<Product>, sqlx::Error> {
        sqlx::query_as::<_, Product>(
            "UPDATE products SET name = $1, price = $2 WHERE id = $3 RETURNING id, name, price",
        )
        .bind(name)
        .bind(price)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    /// Delete by id. Returns whether a row was actually removed.
    pub async fn delete(&self, id: i32) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
