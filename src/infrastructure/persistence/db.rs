//! SQLite connection pool and schema migrations.

use anyhow::{Context, Result};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;

use crate::config::Config;

/// Opens a connection pool for the configured database, creating the file if needed.
pub async fn connect(config: &Config) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(&config.database_url)
        .with_context(|| format!("Invalid DATABASE_URL '{}'", config.database_url))?
        .create_if_missing(true);

    SqlitePoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .connect_with(options)
        .await
        .context("Failed to connect to database")
}

/// Applies the embedded migrations from `./migrations`.
pub async fn run_migrations(pool: &SqlitePool) -> Result<()> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .context("Failed to run migrations")?;

    tracing::info!("Migrations complete");
    Ok(())
}
