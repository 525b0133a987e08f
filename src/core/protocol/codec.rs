// src/core/protocol/codec.rs

//! A `tokio_util::codec` implementation for the chunk-oriented control protocol.
//!
//! Every decoded frame is one command. The decoder hands out whatever bytes are
//! buffered, up to `max_chunk` at a time; it does not look for line terminators,
//! so a command that does not fit in one chunk is split.

use super::Reply;
use crate::core::FuoError;
use bytes::{Bytes, BytesMut};
use tokio_util::codec::{Decoder, Encoder};

/// The default upper bound on a single received command.
pub const DEFAULT_CHUNK_SIZE: usize = 1024;

#[derive(Debug, Clone, Copy)]
pub struct ChunkCodec {
    max_chunk: usize,
}

impl ChunkCodec {
    pub fn new(max_chunk: usize) -> Self {
        Self {
            max_chunk: max_chunk.max(1),
        }
    }

    pub fn max_chunk(&self) -> usize {
        self.max_chunk
    }
}

impl Default for ChunkCodec {
    fn default() -> Self {
        Self::new(DEFAULT_CHUNK_SIZE)
    }
}

impl Decoder for ChunkCodec {
    type Item = Bytes;
    type Error = FuoError;

    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        if src.is_empty() {
            return Ok(None);
        }
        let len = src.len().min(self.max_chunk);
        Ok(Some(src.split_to(len).freeze()))
    }
}

impl Encoder<Reply> for ChunkCodec {
    type Error = FuoError;

    fn encode(&mut self, item: Reply, dst: &mut BytesMut) -> Result<(), Self::Error> {
        let text = item.to_string();
        dst.reserve(text.len());
        dst.extend_from_slice(text.as_bytes());
        Ok(())
    }
}
