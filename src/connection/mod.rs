// src/connection/mod.rs

//! Manages the lifecycle of a single client connection: greeting, reading
//! commands, dispatching them and writing replies.

mod guard;
mod handler;

pub use guard::ConnectionGuard;
pub use handler::ConnectionHandler;
