// src/lib.rs

pub mod config;
pub mod connection;
pub mod core;
pub mod server;

// Re-export
pub use crate::core::fuo_url;
