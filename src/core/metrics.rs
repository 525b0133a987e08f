// src/core/metrics.rs

//! Defines and registers Prometheus metrics for server monitoring.
//!
//! This module uses `lazy_static` to ensure that metrics are registered only once
//! globally for the entire application lifecycle.

use lazy_static::lazy_static;
use prometheus::{
    Counter, CounterVec, Gauge, Histogram, TextEncoder, register_counter, register_counter_vec,
    register_gauge, register_histogram,
};

lazy_static! {
    /// The number of clients currently connected to the server.
    pub static ref CONNECTED_CLIENTS: Gauge =
        register_gauge!("fuod_connected_clients", "Number of currently connected clients.").unwrap();

    /// The total number of connections accepted by the server since startup.
    pub static ref CONNECTIONS_RECEIVED_TOTAL: Counter =
        register_counter!("fuod_connections_received_total", "Total number of connections received.").unwrap();
    /// Connections dropped because `max_clients` was reached.
    pub static ref CONNECTIONS_REJECTED_TOTAL: Counter =
        register_counter!("fuod_connections_rejected_total", "Total number of connections refused at the client limit.").unwrap();
    /// The total number of commands received, including unknown ones.
    pub static ref COMMANDS_PROCESSED_TOTAL: Counter =
        register_counter!("fuod_commands_processed_total", "Total number of commands processed.").unwrap();
    pub static ref COMMANDS_NOT_FOUND_TOTAL: Counter =
        register_counter!("fuod_commands_not_found_total", "Total number of commands with no matching handler.").unwrap();
    /// Handler errors, labeled by handler category.
    pub static ref HANDLER_FAILURES_TOTAL: CounterVec =
        register_counter_vec!("fuod_handler_failures_total", "Total number of failed handler invocations, labeled by category.", &["category"]).unwrap();

    pub static ref COMMAND_LATENCY_SECONDS: Histogram =
        register_histogram!("fuod_command_latency_seconds", "Latency of command dispatch in seconds.").unwrap();
}

/// Gathers all registered metrics and encodes them in the Prometheus text format.
pub fn gather_metrics() -> String {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    encoder
        .encode_to_string(&metric_families)
        .unwrap_or_default()
}
