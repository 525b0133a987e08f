// src/connection/guard.rs

//! Defines `ConnectionGuard`, an RAII guard for connection resource management.

use crate::core::metrics;
use crate::core::state::ServerState;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::debug;

/// Registers a connection with the server state for as long as it lives.
///
/// Dropping the guard unregisters the client, whichever way the connection
/// handler exits.
pub struct ConnectionGuard {
    state: Arc<ServerState>,
    session_id: u64,
    addr: SocketAddr,
}

impl ConnectionGuard {
    pub(crate) fn new(state: Arc<ServerState>, session_id: u64, addr: SocketAddr) -> Self {
        state.register_client(session_id, addr);
        metrics::CONNECTED_CLIENTS.inc();
        Self {
            state,
            session_id,
            addr,
        }
    }
}

impl Drop for ConnectionGuard {
    fn drop(&mut self) {
        metrics::CONNECTED_CLIENTS.dec();
        debug!(
            "ConnectionGuard dropping, cleaning up resources for connection {}",
            self.addr
        );
        match self.state.clients.remove(&self.session_id) {
            Some((_, info)) => debug!(
                "Session {} from {} closed after {:?} (idle {:?}).",
                info.session_id,
                info.addr,
                info.created.elapsed(),
                info.last_command_time.elapsed()
            ),
            None => debug!(
                "Client {} was not in the client map upon cleanup.",
                self.addr
            ),
        }
    }
}
