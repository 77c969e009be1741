use std::process::{Child, Command, Stdio};
use std::sync::OnceLock;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use reqwest::StatusCode;
use rust_decimal::Decimal;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tokio::sync::{Mutex, MutexGuard};

static SERVER: OnceLock<TestServer> = OnceLock::new();

// Tests share one database; hold this for the duration of any test that
// resets or seeds tables.
static DB_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

pub struct TestServer {
    pub base_url: String,
    #[allow(dead_code)]
    child: Child,
}

impl TestServer {
    fn spawn() -> Result<Self> {
        // Pick an unused port for isolation
        let port = portpicker::pick_unused_port().context("failed to pick free port")?;
        let base_url = format!("http://127.0.0.1:{}", port);

        // Spawn the already-built binary to keep start fast during tests
        // Assumes debug profile; adjust if you run tests with --release
        let mut cmd = Command::new("target/debug/storefront-api");
        cmd.env("STOREFRONT_API_PORT", port.to_string())
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        // Inherit environment so the server can see DATABASE_URL from .env (loaded by the server)
        let child = cmd.spawn().context("failed to spawn server binary")?;

        Ok(Self { base_url, child })
    }

    async fn wait_ready(&self, timeout: Duration) -> Result<()> {
        let client = reqwest::Client::new();
        let deadline = Instant::now() + timeout;
        loop {
            if Instant::now() > deadline {
                break;
            }
            let url = format!("{}/health", self.base_url);
            if let Ok(resp) = client.get(&url).send().await {
                if resp.status() == StatusCode::OK {
                    return Ok(());
                }
            }
            tokio::time::sleep(Duration::from_millis(150)).await;
        }
        anyhow::bail!(
            "server did not become ready on {} within {:?}",
            self.base_url,
            timeout
        )
    }
}

pub async fn ensure_server() -> Result<&'static TestServer> {
    let server = SERVER.get_or_init(|| TestServer::spawn().expect("failed to spawn server binary"));
    server.wait_ready(Duration::from_secs(10)).await?;
    Ok(server)
}

/// Serialize tests that mutate the shared database
pub async fn lock_db() -> MutexGuard<'static, ()> {
    DB_LOCK.get_or_init(|| Mutex::new(())).lock().await
}

/// Direct database handle for fixtures and cleanup
pub async fn test_pool() -> Result<PgPool> {
    dotenvy::dotenv().ok();
    let url = std::env::var("DATABASE_URL")
        .context("DATABASE_URL must be set for integration tests")?;
    let pool = PgPoolOptions::new().max_connections(2).connect(&url).await?;
    Ok(pool)
}

/// Empty both tables and restart the product id sequence so tests can assert
/// on generated ids
pub async fn reset_tables(pool: &PgPool) -> Result<()> {
    sqlx::query("DELETE FROM store").execute(pool).await?;
    sqlx::query("DELETE FROM products").execute(pool).await?;
    sqlx::query("ALTER SEQUENCE products_id_seq RESTART WITH 1")
        .execute(pool)
        .await?;
    Ok(())
}

/// Insert `count` products named "Product 0", "Product 1", ... priced 10, 20, ...
#[allow(dead_code)]
pub async fn seed_products(pool: &PgPool, count: i32) -> Result<()> {
    for i in 0..count {
        sqlx::query("INSERT INTO products (name, price) VALUES ($1, $2)")
            .bind(format!("Product {}", i))
            .bind(Decimal::from((i + 1) * 10))
            .execute(pool)
            .await?;
    }
    Ok(())
}

#[allow(dead_code)]
pub async fn count_store_rows(pool: &PgPool) -> Result<i64> {
    let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM store")
        .fetch_one(pool)
        .await?;
    Ok(count)
}
