//! To-do list service.
//!
//! ```bash
//! cargo run --bin todo-service
//! ```
//!
//! See [`crud_services::config`] for environment variables.

use anyhow::Result;
use crud_services::config::{self, ServiceKind};
use crud_services::{server, telemetry};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = config::load_from_env(ServiceKind::Todo)?;
    telemetry::init(&config);
    config.print_summary();

    server::run_todo(config).await
}
