// src/core/protocol/mod.rs

pub mod codec;
pub mod command;
pub mod reply;
pub use codec::ChunkCodec;
pub use command::Command;
pub use reply::Reply;
