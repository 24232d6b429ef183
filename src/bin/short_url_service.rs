//! Short URL service.
//!
//! ```bash
//! cargo run --bin short-url-service
//! ```
//!
//! See [`crud_services::config`] for environment variables.

use anyhow::Result;
use crud_services::config::{self, ServiceKind};
use crud_services::{server, telemetry};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = config::load_from_env(ServiceKind::ShortUrl)?;
    telemetry::init(&config);
    config.print_summary();

    server::run_short_url(config).await
}
