// src/core/handler/executor.rs

//! The seam between the protocol layer and the application that actually
//! drives the player, playlist and library.

use super::HandlerCategory;
use crate::config::ProtocolConfig;
use crate::core::library::ProviderRegistry;
use crate::core::protocol::Command;
use crate::core::state::StatsSnapshot;
use async_trait::async_trait;
use std::net::SocketAddr;
use std::sync::Arc;

/// Everything a handler may need about the request besides the command itself.
///
/// Player and lyric state belong to the executor implementation; the protocol
/// layer contributes the library, a view of the server and the identity of the
/// connection.
#[derive(Clone)]
pub struct HandlerContext {
    pub library: Arc<dyn ProviderRegistry>,
    pub protocol: ProtocolConfig,
    /// Server counters taken when the command was dispatched.
    pub stats: StatsSnapshot,
    pub session_id: u64,
    pub addr: SocketAddr,
}

/// Executes a parsed command for a resolved category.
///
/// `Ok(None)` and `Ok(Some(""))` both mean "no body". Any error is reported to
/// the client as a generic failure; implementations are invoked concurrently
/// from many connections and must synchronize their own state.
#[async_trait]
pub trait HandlerExecutor: Send + Sync {
    async fn invoke(
        &self,
        category: HandlerCategory,
        ctx: &HandlerContext,
        command: &Command,
    ) -> anyhow::Result<Option<String>>;
}
