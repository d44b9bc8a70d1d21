use anyhow::Context;
use log::{info, warn};
use noters_api::api;
use noters_api::setup::{arguments, logging};
use std::sync::Arc;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::setup_log();

    let (args, service) = arguments::handle_args().context("Failed setting up note store")?;
    let app = api::router(Arc::new(service));

    let listener = TcpListener::bind(&args.bind)
        .await
        .with_context(|| format!("Failed binding to {}", args.bind))?;
    info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed listening for Ctrl-C: {e}");
        // Without a signal handler, keep serving until the process is killed
        std::future::pending::<()>().await;
    }
    info!("Shutdown requested");
}
