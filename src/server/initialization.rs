// src/server/initialization.rs

//! Builds the shared server state and binds the listening socket.

use super::context::ServerContext;
use crate::config::Config;
use crate::core::handler::HandlerExecutor;
use crate::core::library::ProviderRegistry;
use crate::core::state::ServerState;
use anyhow::{Context, Result};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::{Semaphore, broadcast};
use tokio::task::JoinSet;
use tracing::{info, warn};

/// Initializes all server components before starting the main loop.
pub async fn setup(
    config: Config,
    library: Arc<dyn ProviderRegistry>,
    executor: Arc<dyn HandlerExecutor>,
) -> Result<ServerContext> {
    config.validate()?;
    log_startup_info(&config, library.as_ref());
    let (shutdown_tx, _) = broadcast::channel(1);

    let listener = TcpListener::bind((config.host.as_str(), config.port))
        .await
        .with_context(|| format!("Failed to bind {}:{}", config.host, config.port))?;
    let local_addr = listener.local_addr()?;
    info!(
        "Fuo daemon run in {}:{} ({} {})",
        local_addr.ip(),
        local_addr.port(),
        config.protocol.name,
        config.protocol.version
    );

    let connection_permits = Arc::new(Semaphore::new(config.max_clients));
    let state = Arc::new(ServerState::new(config, library, executor));

    Ok(ServerContext {
        state,
        listener,
        shutdown_tx,
        background_tasks: JoinSet::new(),
        connection_permits,
    })
}

/// Logs key configuration parameters at startup.
fn log_startup_info(config: &Config, library: &dyn ProviderRegistry) {
    info!(
        "Accepting up to {} concurrent clients, {} bytes per command.",
        config.max_clients, config.read_chunk_size
    );
    let providers = library.list_providers();
    if providers.is_empty() {
        warn!("No content providers registered; every fuo:// url will be rejected.");
    } else {
        info!("Content providers: {}", providers.join(", "));
    }
    if config.host == "0.0.0.0" {
        warn!("Listening on all interfaces without authentication.");
    }
}
