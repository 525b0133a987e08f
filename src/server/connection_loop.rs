// src/server/connection_loop.rs

//! Contains the main server loop for accepting connections and handling graceful shutdown.

use super::context::ServerContext;
use crate::connection::ConnectionHandler;
use crate::core::metrics;
use std::time::Duration;
use tokio::task::JoinSet;
use tracing::{debug, error, info, warn};

/// How long open connections get to finish their current reply on shutdown.
const CLIENT_DRAIN_TIMEOUT: Duration = Duration::from_secs(5);

/// The main server loop that accepts connections and handles graceful shutdown.
pub async fn run(mut ctx: ServerContext) {
    let mut session_id_counter: u64 = 0;
    let mut client_tasks = JoinSet::new();
    let mut shutdown_rx = ctx.shutdown_tx.subscribe();

    let signal = wait_for_signal();
    tokio::pin!(signal);

    loop {
        tokio::select! {
            biased;

            _ = &mut signal => break,
            _ = shutdown_rx.recv() => {
                info!("Shutdown requested, stopping the accept loop.");
                break;
            }

            Some(res) = ctx.background_tasks.join_next() => {
                match res {
                    Ok(Ok(())) => warn!("A background task finished unexpectedly without an error."),
                    Ok(Err(e)) => { error!("CRITICAL: Background task failed: {}. Shutting down.", e); break; }
                    Err(e) => { error!("CRITICAL: Background task panicked: {e:?}. Shutting down."); break; }
                }
            },

            res = ctx.listener.accept() => {
                match res {
                    Ok((socket, addr)) => {
                        let Ok(permit) = ctx.connection_permits.clone().try_acquire_owned() else {
                            warn!(
                                "Rejecting connection from {}: max_clients ({}) reached.",
                                addr, ctx.state.config.max_clients
                            );
                            metrics::CONNECTIONS_REJECTED_TOTAL.inc();
                            drop(socket);
                            continue;
                        };

                        info!("Accepted new connection from: {}", addr);
                        ctx.state.stats.increment_total_connections();
                        metrics::CONNECTIONS_RECEIVED_TOTAL.inc();

                        session_id_counter = session_id_counter.wrapping_add(1);
                        let session_id = session_id_counter;
                        let state_clone = ctx.state.clone();
                        let conn_shutdown_rx = ctx.shutdown_tx.subscribe();

                        client_tasks.spawn(async move {
                            let _permit = permit;
                            let mut handler = ConnectionHandler::new(socket, addr, state_clone, session_id, conn_shutdown_rx);
                            if let Err(e) = handler.run().await {
                                warn!("Connection from {} terminated unexpectedly: {}", addr, e);
                            }
                        });
                    }
                    Err(e) => error!("Failed to accept connection: {}", e),
                }
            },

            Some(res) = client_tasks.join_next() => {
                if let Err(e) = res
                    && e.is_panic()
                {
                    error!("A client handler panicked: {e:?}");
                }
            },
        }
    }

    info!("Shutting down. Sending signal to all tasks.");
    if ctx.shutdown_tx.send(()).is_err() {
        debug!("No task was listening for the shutdown signal.");
    }

    if tokio::time::timeout(CLIENT_DRAIN_TIMEOUT, async {
        while client_tasks.join_next().await.is_some() {}
    })
    .await
    .is_err()
    {
        warn!("Timed out waiting for client connections to close.");
        client_tasks.shutdown().await;
    }
    info!("All client connections closed.");

    if tokio::time::timeout(Duration::from_secs(10), async {
        while ctx.background_tasks.join_next().await.is_some() {}
    })
    .await
    .is_err()
    {
        warn!("Timed out waiting for background tasks to finish cleanly.");
    };
    info!("Server shutdown complete.");
}

/// Resolves when the process receives SIGINT or SIGTERM.
async fn wait_for_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for SIGINT: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to register SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("SIGINT received, initiating graceful shutdown."),
        _ = terminate => info!("SIGTERM received, initiating graceful shutdown."),
    }
}
