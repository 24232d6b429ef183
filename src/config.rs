//! Service configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server
//! starts. Both services read the same variables; only the defaults differ.
//!
//! ```bash
//! export DATABASE_URL="sqlite://./data/todo.db"
//! export LISTEN="0.0.0.0:8001"
//! ```
//!
//! ## Optional Variables
//!
//! - `DATABASE_URL` - SQLite database (default: `sqlite://./data/shorturl.db`
//!   or `sqlite://./data/todo.db`)
//! - `LISTEN` - Bind address (default: `0.0.0.0:8000` or `0.0.0.0:8001`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `DB_MAX_CONNECTIONS` - Pool size (default: 5)
//! - `DB_CONNECT_TIMEOUT` - Seconds to wait for a pooled connection (default: 30)
//! - `DB_IDLE_TIMEOUT` - Idle seconds before a connection is closed (default: 600)

use anyhow::Result;
use std::env;
use std::fmt;
use std::net::SocketAddr;

/// Which of the two services is being configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceKind {
    ShortUrl,
    Todo,
}

impl ServiceKind {
    pub fn default_database_url(self) -> &'static str {
        match self {
            ServiceKind::ShortUrl => "sqlite://./data/shorturl.db",
            ServiceKind::Todo => "sqlite://./data/todo.db",
        }
    }

    pub fn default_listen_addr(self) -> &'static str {
        match self {
            ServiceKind::ShortUrl => "0.0.0.0:8000",
            ServiceKind::Todo => "0.0.0.0:8001",
        }
    }
}

impl fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceKind::ShortUrl => f.write_str("Short URL Service"),
            ServiceKind::Todo => f.write_str("ToDo Service"),
        }
    }
}

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub service: ServiceKind,
    pub database_url: String,
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,

    // ── SqlitePool settings ─────────────────────────────────────────────────
    /// Maximum number of connections in the pool (`DB_MAX_CONNECTIONS`, default: 5).
    pub db_max_connections: u32,
    /// Timeout for acquiring a connection from the pool in seconds
    /// (`DB_CONNECT_TIMEOUT`, default: 30).
    pub db_connect_timeout: u64,
    /// Idle connection lifetime in seconds before it is closed
    /// (`DB_IDLE_TIMEOUT`, default: 600).
    pub db_idle_timeout: u64,
}

impl Config {
    /// Loads configuration for `service` from environment variables.
    ///
    /// Unset or unparsable variables fall back to their defaults.
    pub fn from_env(service: ServiceKind) -> Self {
        let database_url = env::var("DATABASE_URL")
            .unwrap_or_else(|_| service.default_database_url().to_string());
        let listen_addr =
            env::var("LISTEN").unwrap_or_else(|_| service.default_listen_addr().to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let db_max_connections = parse_var("DB_MAX_CONNECTIONS").unwrap_or(5);
        let db_connect_timeout = parse_var("DB_CONNECT_TIMEOUT").unwrap_or(30);
        let db_idle_timeout = parse_var("DB_IDLE_TIMEOUT").unwrap_or(600);

        Self {
            service,
            database_url,
            listen_addr,
            log_level,
            log_format,
            db_max_connections,
            db_connect_timeout,
            db_idle_timeout,
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `database_url` is not a `sqlite:` URL
    /// - `listen_addr` is not an `ip:port` socket address
    /// - `log_format` is not `text` or `json`
    /// - a pool setting is zero
    pub fn validate(&self) -> Result<()> {
        if !self.database_url.starts_with("sqlite:") {
            anyhow::bail!(
                "DATABASE_URL must start with 'sqlite:', got '{}'",
                self.database_url
            );
        }

        if self.listen_addr.parse::<SocketAddr>().is_err() {
            anyhow::bail!(
                "LISTEN must be a socket address like '0.0.0.0:8000', got '{}'",
                self.listen_addr
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if self.db_max_connections == 0 {
            anyhow::bail!("DB_MAX_CONNECTIONS must be at least 1");
        }
        if self.db_connect_timeout == 0 {
            anyhow::bail!("DB_CONNECT_TIMEOUT must be greater than 0");
        }

        Ok(())
    }

    /// Logs a configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded for {}:", self.service);
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Database: {}", self.database_url);
        tracing::info!("  Pool size: {}", self.db_max_connections);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

fn parse_var<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.parse().ok())
}

/// Loads and validates configuration from environment variables.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in the binary).
pub fn load_from_env(service: ServiceKind) -> Result<Config> {
    let config = Config::from_env(service);
    config.validate()?;
    Ok(config)
}
