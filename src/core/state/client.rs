// src/core/state/client.rs

//! Contains state definitions related to client connections.

use dashmap::DashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

/// Metadata about one live connection, kept for observability only.
#[derive(Debug, Clone)]
pub struct ClientInfo {
    pub addr: SocketAddr,
    pub session_id: u64,
    pub created: Instant,
    pub last_command_time: Instant,
}

impl ClientInfo {
    pub fn new(addr: SocketAddr, session_id: u64) -> Self {
        let now = Instant::now();
        Self {
            addr,
            session_id,
            created: now,
            last_command_time: now,
        }
    }
}

pub type ClientMap = Arc<DashMap<u64, ClientInfo>>;
