// src/server/mod.rs

use crate::config::Config;
use crate::core::handler::HandlerExecutor;
use crate::core::library::ProviderRegistry;
use anyhow::Result;
use std::sync::Arc;

mod connection_loop;
mod context;
mod initialization;
mod metrics_server;
mod spawner;

pub use connection_loop::run as serve;
pub use context::{ServerContext, ShutdownHandle};
pub use initialization::setup;

/// The main server startup function, orchestrating all setup phases.
pub async fn run(
    config: Config,
    library: Arc<dyn ProviderRegistry>,
    executor: Arc<dyn HandlerExecutor>,
) -> Result<()> {
    // 1. Build the shared state and bind the listener.
    let mut server_context = initialization::setup(config, library, executor).await?;

    // 2. Spawn background tasks.
    spawner::spawn_all(&mut server_context);

    // 3. Accept connections until shutdown.
    connection_loop::run(server_context).await;

    Ok(())
}
