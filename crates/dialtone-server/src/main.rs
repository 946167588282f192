//! dialtone HTTP server.
//!
//! Serves `GET /v1/phone-numbers`. See [`config::ServerConfig`] for the
//! environment variables it reads.

mod config;

use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use dialtone_adapters::http::{create_router, AppState};
use dialtone_app::PhoneNumberService;
use dialtone_ports::inbound::PhoneNumberParser;

use crate::config::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::from_env()?;
    init_tracing(&config)?;

    let service = PhoneNumberService::builtin();
    info!(
        dial_codes = service.plan().priority().len(),
        "loaded builtin dial plan"
    );

    let parser: Arc<dyn PhoneNumberParser> = Arc::new(service);
    let app = create_router(AppState::new(parser));

    let addr = config.socket_addr();
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(%addr, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("shut down");
    Ok(())
}

fn init_tracing(config: &ServerConfig) -> anyhow::Result<()> {
    let filter = EnvFilter::try_new(&config.log_filter)
        .with_context(|| format!("invalid RUST_LOG directive {:?}", config.log_filter))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
