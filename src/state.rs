//! Application state shared across routes

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

use crate::config::AppConfig;
use crate::database::{schema, ProductService, StoreService};

/// Shared application state, cloned into every handler
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub products: ProductService,
    pub store: StoreService,
}

impl AppState {
    /// Connect to the database, ensure the schema exists, and wire up the
    /// data-access services
    pub async fn connect(config: &AppConfig) -> Result<Self, sqlx::Error> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .connect(&config.database_url)
            .await?;

        schema::ensure_schema(&pool).await?;
        info!("connected to database, schema ready");

        Ok(Self {
            products: ProductService::new(pool.clone()),
            store: StoreService::new(pool.clone()),
            pool,
        })
    }
}
