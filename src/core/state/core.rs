// src/core/state/core.rs

//! Defines the central `ServerState` struct, holding all shared server-wide state.

use super::client::{ClientInfo, ClientMap};
use super::stats::{StatsSnapshot, StatsState};
use crate::config::Config;
use crate::core::handler::HandlerExecutor;
use crate::core::library::ProviderRegistry;
use dashmap::DashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

/// The shared state handed to the accept loop and every connection handler.
///
/// Connections never coordinate through this struct; it only carries the
/// collaborators they all use and the bookkeeping needed for monitoring.
pub struct ServerState {
    /// The configuration the server was started with.
    pub config: Config,
    /// The providers consulted when resolving `fuo://` URLs.
    pub library: Arc<dyn ProviderRegistry>,
    /// Runs commands once they have been routed to a category.
    pub executor: Arc<dyn HandlerExecutor>,
    /// All live connections, keyed by session id.
    pub clients: ClientMap,
    pub stats: StatsState,
}

impl ServerState {
    pub fn new(
        config: Config,
        library: Arc<dyn ProviderRegistry>,
        executor: Arc<dyn HandlerExecutor>,
    ) -> Self {
        Self {
            config,
            library,
            executor,
            clients: Arc::new(DashMap::new()),
            stats: StatsState::new(),
        }
    }

    pub fn register_client(&self, session_id: u64, addr: SocketAddr) {
        self.clients
            .insert(session_id, ClientInfo::new(addr, session_id));
    }

    pub fn touch_client(&self, session_id: u64) {
        if let Some(mut entry) = self.clients.get_mut(&session_id) {
            entry.last_command_time = Instant::now();
        }
    }

    pub fn stats_snapshot(&self) -> StatsSnapshot {
        self.stats.snapshot(self.clients.len())
    }
}

impl std::fmt::Debug for ServerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerState")
            .field("config", &self.config)
            .field("providers", &self.library.list_providers())
            .field("clients", &self.clients.len())
            .field("stats", &self.stats)
            .finish()
    }
}
