// src/core/state/stats.rs

//! Contains state definitions and logic for server statistics.

use std::sync::atomic::{AtomicU64, Ordering};

/// Server-wide counters, updated lock-free from every connection.
#[derive(Debug, Default)]
pub struct StatsState {
    /// The total number of connections accepted by the server since startup.
    total_connections: AtomicU64,
    /// The total number of commands received since startup, including unknown ones.
    total_commands: AtomicU64,
    commands_not_found: AtomicU64,
    handler_failures: AtomicU64,
}

/// A point-in-time copy of the server counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatsSnapshot {
    pub connected_clients: usize,
    pub total_connections: u64,
    pub total_commands: u64,
    pub commands_not_found: u64,
    pub handler_failures: u64,
}

impl StatsState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_total_connections(&self) {
        self.total_connections.fetch_add(1, Ordering::Relaxed);
    }

    pub fn get_total_connections(&self) -> u64 {
        self.total_connections.load(Ordering::Relaxed)
    }

    pub fn increment_total_commands(&self) {
        self.total_commands.fetch_add(1, Ordering::Relaxed);
    }

    pub fn get_total_commands(&self) -> u64 {
        self.total_commands.load(Ordering::Relaxed)
    }

    pub fn increment_commands_not_found(&self) {
        self.commands_not_found.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_handler_failures(&self) {
        self.handler_failures.fetch_add(1, Ordering::Relaxed);
    }

    /// Copies the counters; `connected_clients` is supplied by the caller.
    pub fn snapshot(&self, connected_clients: usize) -> StatsSnapshot {
        StatsSnapshot {
            connected_clients,
            total_connections: self.get_total_connections(),
            total_commands: self.get_total_commands(),
            commands_not_found: self.commands_not_found.load(Ordering::Relaxed),
            handler_failures: self.handler_failures.load(Ordering::Relaxed),
        }
    }
}
