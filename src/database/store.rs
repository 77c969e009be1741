//! Store data access - rows associating a store id with products and
//! availability flags

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use tracing::debug;

/// A row in the `store` table. `id` is the store identifier; the pair
/// `(id, product_id)` is unique.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct StoreEntry {
    pub id: i32,
    pub product_id: i32,
    pub is_available: bool,
}

/// A store entry joined against its product, as returned by
/// `GET /store/:id/products`
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct StoreProduct {
    pub id: i32,
    pub product_id: i32,
    pub name: String,
    pub price: Decimal,
    pub is_available: bool,
}

/// One element of the `POST /store/:id` request body
#[derive(Debug, Clone, Deserialize)]
pub struct NewStoreEntry {
    pub product_id: i32,
    #[serde(default = "default_available")]
    pub is_available: bool,
}

fn default_available() -> bool {
    true
}

/// Repository for store database operations
#[derive(Debug, Clone)]
pub struct StoreService {
    pool: PgPool,
}

impl StoreService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// All entries for a store id, each enriched with product name and price
    pub async fn list_products(&self, store_id: i32) -> Result<Vec<StoreProduct>, sqlx::Error> {
        sqlx::query_as::<_, StoreProduct>(
            "SELECT s.id, s.product_id, p.name, p.price, s.is_available \
             FROM store s JOIN products p ON p.id = s.product_id \
             WHERE s.id = $1 ORDER BY s.product_id",
        )
        .bind(store_id)
        .fetch_all(&self.pool)
        .await
    }

    /// Insert one row per entry under the given store id. The whole batch
    /// runs in a single transaction: a duplicate `(id, product_id)` pair or a
    /// foreign-key violation aborts it and leaves no partial rows.
    pub async fn add_entries(
        &self,
        store_id: i32,
        entries: &[NewStoreEntry],
    ) -> Result<Vec<StoreEntry>, sqlx::Error> {
        let mut tx = self.pool.begin().await?;
        let mut created = Vec::with_capacity(entries.len());

        for entry in entries {
            let row = sqlx::query_as::<_, StoreEntry>(
                "INSERT INTO store (id, product_id, is_available) VALUES ($1, $2, $3) \
                 RETURNING id, product_id, is_available",
            )
            .bind(store_id)
            .bind(entry.product_id)
            .bind(entry.is_available)
            .fetch_one(&mut *tx)
            .await?;

            created.push(row);
        }

        tx.commit().await?;

        debug!(store_id, count = created.len(), "created store entries");
        Ok(created)
    }
}
