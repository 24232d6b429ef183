//! Connection pool setup and schema migrations.

use anyhow::{Context, Result};
use sqlx::SqlitePool;
use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use crate::config::Config;

/// Schema of the short-url service database.
pub static SHORT_URL_MIGRATOR: Migrator = sqlx::migrate!("./migrations/short_url");

/// Schema of the to-do service database.
pub static TODO_MIGRATOR: Migrator = sqlx::migrate!("./migrations/todo");

/// Opens the pool for `config.database_url` and applies `migrator`.
///
/// The database file and its parent directory are created when missing.
///
/// # Errors
///
/// Returns an error if the URL is malformed, the directory cannot be created,
/// the database cannot be opened, or a migration fails.
pub async fn connect(config: &Config, migrator: &Migrator) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(&config.database_url)
        .with_context(|| format!("Invalid DATABASE_URL '{}'", config.database_url))?
        .create_if_missing(true);

    if let Some(parent) = options.get_filename().parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        create_dir(parent)?;
    }

    let pool = SqlitePoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .connect_with(options)
        .await
        .context("Failed to connect to SQLite database")?;
    tracing::info!("Connected to database");

    migrator
        .run(&pool)
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Migrations applied");

    Ok(pool)
}

fn create_dir(dir: &Path) -> Result<()> {
    tracing::info!(dir = %dir.display(), "Creating database directory");
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory {}", dir.display()))
}
