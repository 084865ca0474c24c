//! `chirpy`: service binary entry point.
//!
//! Startup sequence:
//! 1. Load and validate [`Config`] from the environment (and `.env`).
//! 2. Initialise the telemetry pipeline (JSON logs, optional OTLP).
//! 3. Connect the user store: Postgres when `DB_URL` is set, memory otherwise.
//! 4. Build the denylist and the shared [`AppState`].
//! 5. Build the Axum router and serve until Ctrl+C.

mod chirp;
mod config;
mod metrics;
mod server;
mod telemetry;
mod users;

use std::sync::Arc;

use anyhow::Result;
use tracing::{info, warn};

use chirp::Denylist;
use config::Config;
use server::{router::RouterOptions, state::AppState};
use users::{MemoryUserStore, PgUserStore, UserStore};

#[tokio::main]
async fn main() -> Result<()> {
    // -----------------------------------------------------------------------
    // 1. Configuration
    // -----------------------------------------------------------------------
    let cfg = Config::from_env().map_err(|e| {
        // Telemetry is not yet up; write to stderr directly.
        eprintln!("ERROR: configuration invalid: {e}");
        e
    })?;

    // -----------------------------------------------------------------------
    // 2. Telemetry
    // -----------------------------------------------------------------------
    telemetry::init_telemetry(cfg.otel_exporter_otlp_endpoint.as_deref(), &cfg.log_level)?;
    info!(
        version = env!("CARGO_PKG_VERSION"),
        port = cfg.port,
        dev = cfg.is_dev(),
        "chirpy starting"
    );

    // -----------------------------------------------------------------------
    // 3. User store
    // -----------------------------------------------------------------------
    let users: Arc<dyn UserStore> = match &cfg.db_url {
        Some(url) => Arc::new(PgUserStore::connect(url).await?),
        None => {
            warn!("DB_URL not set; users are kept in memory");
            Arc::new(MemoryUserStore::new())
        }
    };

    // -----------------------------------------------------------------------
    // 4. Shared state
    // -----------------------------------------------------------------------
    let denylist = Denylist::default();
    info!(words = denylist.len(), "denylist loaded");
    let state = AppState::new(denylist, users, &cfg.platform);

    // -----------------------------------------------------------------------
    // 5. HTTP server
    // -----------------------------------------------------------------------
    let opts = RouterOptions::from(&cfg);
    let router = server::router::build(state, &opts);

    let addr: std::net::SocketAddr = ([0, 0, 0, 0], cfg.port).into();
    info!(addr = %addr, root = %cfg.fileserver_root, "listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("shutdown complete");
    Ok(())
}

/// Resolve on Ctrl+C. If the handler cannot be installed, never resolve.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to install Ctrl+C handler");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
