//! Payment records server binary.
//!
//! Wires configuration, the SQLite repository, the payment service, and the
//! HTTP server together, then runs until a shutdown signal arrives.

mod config;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use payment_hex::{PaymentService, inbound::HttpServer};
use payment_repo::build_repo;

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| "info,payment_hex=debug".into());

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = config::Config::from_env()?;
    tracing::info!(
        port = config.port,
        database = %config.database_url,
        "starting payment records server"
    );

    let repo = build_repo(&config.database_url).await?;
    let server = HttpServer::new(PaymentService::new(repo));

    server.run(&format!("0.0.0.0:{}", config.port)).await
}
