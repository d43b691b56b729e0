#![doc = include_str!("../README.md")]

mod config;
mod http;

use clap::Parser;
use config::{CliArgs, ServerConfig};
use hashvault_core::{FixedSleeper, HashService};
use http::AppState;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load from .env
    let _ = dotenvy::dotenv();
    let args = CliArgs::parse();
    let config = ServerConfig::from(args);

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let service = HashService::with_sleeper(Arc::new(FixedSleeper::new(config.hash_delay)));
    let shutdown = CancellationToken::new();

    let state = AppState {
        service: service.clone(),
        shutdown: shutdown.clone(),
    };
    let app = http::router(state);

    let listener = TcpListener::bind(&config.bind_addr).await?;
    info!(
        addr = %config.bind_addr,
        hash_delay_ms = config.hash_delay.as_millis() as u64,
        "hashvault server started"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(shutdown))
        .await?;

    // The listener is closed; drain whatever computations are still running.
    if service.shutdown(config.drain_timeout).await {
        info!("server shut down cleanly");
    } else {
        warn!("server shut down with unfinished computations");
    }
    Ok(())
}

/// Resolves when shutdown is requested: Ctrl+C, SIGTERM, or the `/shutdown`
/// endpoint. All three funnel through the same cancellation token.
async fn shutdown_signal(token: CancellationToken) {
    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C signal");
        },
        () = terminate => {
            info!("Received SIGTERM signal");
        },
        () = token.cancelled() => {
            info!("Received shutdown request over HTTP");
        },
    }

    token.cancel();
    info!("Shutdown signal received, terminating gracefully...");
}
