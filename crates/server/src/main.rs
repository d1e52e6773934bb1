use std::path::Path;

use anyhow::Context;
use server::store::{AppState, DocumentStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    server::telemetry::init_logging();
    let config = server::config::load_config();
    server::telemetry::init_telemetry(&config.features);
    server::health::record_start_time();

    let store = match config.storage.documents_dir.as_deref() {
        Some(dir) => DocumentStore::load_dir(Path::new(dir))?,
        None => DocumentStore::new(),
    };

    let state = AppState {
        store,
        flags: config.features.clone(),
    };
    let router = server::app_router(state);

    let listener = tokio::net::TcpListener::bind(&config.server.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.server.bind_addr))?;
    tracing::info!(
        addr = %config.server.bind_addr,
        version = env!("CARGO_PKG_VERSION"),
        "analysis dashboard listening"
    );

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    server::telemetry::shutdown_telemetry();
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
    }
    tracing::info!("shutting down");
}
