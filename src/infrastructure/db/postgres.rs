use std::time::Duration;

use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::{info, warn};

const MAX_ATTEMPTS: u32 = 5;

/// Opens the connection pool, retrying while Postgres comes up. The wait
/// doubles after every failed attempt.
pub async fn create_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    let mut attempt = 1;
    let mut wait = Duration::from_secs(2);

    loop {
        match PgPoolOptions::new()
            .max_connections(10)
            .acquire_timeout(Duration::from_secs(5))
            .connect(database_url)
            .await
        {
            Ok(pool) => {
                info!("Connected to Postgres");
                return Ok(pool);
            }
            Err(e) if attempt < MAX_ATTEMPTS => {
                warn!(
                    "Postgres connection attempt {}/{} failed: {}; retrying in {:?}",
                    attempt, MAX_ATTEMPTS, e, wait
                );
                tokio::time::sleep(wait).await;
                attempt += 1;
                wait *= 2;
            }
            Err(e) => return Err(e),
        }
    }
}
