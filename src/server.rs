//! HTTP server initialization and runtime setup.
//!
//! Opens the service database, builds the router and runs the Axum server
//! until a shutdown signal arrives.

use crate::application::services::{ShortLinkService, TodoService};
use crate::config::Config;
use crate::infrastructure::persistence::{
    SHORT_URL_MIGRATOR, SqliteShortLinkRepository, SqliteTodoRepository, TODO_MIGRATOR, connect,
};
use crate::routes::{short_url_router, todo_router};
use crate::state::{ShortLinkState, TodoState};

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::normalize_path::NormalizePath;

/// Runs the short-url service.
///
/// # Errors
///
/// Returns an error if the database cannot be opened or migrated, the
/// listen address cannot be bound, or the server fails at runtime.
pub async fn run_short_url(config: Config) -> Result<()> {
    let pool = Arc::new(connect(&config, &SHORT_URL_MIGRATOR).await?);

    let repository = Arc::new(SqliteShortLinkRepository::new(pool.clone()));
    let state = ShortLinkState::new(Arc::new(ShortLinkService::new(repository)));

    serve(&config, short_url_router(state)).await?;

    pool.close().await;
    tracing::info!("Database pool closed");
    Ok(())
}

/// Runs the to-do service.
///
/// # Errors
///
/// See [`run_short_url`].
pub async fn run_todo(config: Config) -> Result<()> {
    let pool = Arc::new(connect(&config, &TODO_MIGRATOR).await?);

    let repository = Arc::new(SqliteTodoRepository::new(pool.clone()));
    let state = TodoState::new(Arc::new(TodoService::new(repository)));

    serve(&config, todo_router(state)).await?;

    pool.close().await;
    tracing::info!("Database pool closed");
    Ok(())
}

async fn serve(config: &Config, app: NormalizePath<axum::Router>) -> Result<()> {
    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("{} listening on http://{addr}", config.service);

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Resolves on Ctrl-C, or on SIGTERM on Unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
