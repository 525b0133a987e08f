// src/core/mod.rs

//! The central module containing the protocol logic and data structures of fuod.

pub mod errors;
pub mod fuo_url;
pub mod handler;
pub mod library;
pub mod metrics;
pub mod protocol;
pub mod state;

pub use errors::FuoError;
pub use fuo_url::{EntityRef, EntityType};
pub use protocol::{Command, Reply};
