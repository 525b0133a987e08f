// src/connection/handler.rs

//! Defines the `ConnectionHandler` which manages the full lifecycle of a client connection.
//!
//! The handler greets the client, then treats every chunk it reads as one
//! command line. Commands are processed strictly one at a time; the next chunk
//! is not read until the reply to the previous one has been written.

use super::guard::ConnectionGuard;
use crate::core::FuoError;
use crate::core::handler::Dispatcher;
use crate::core::protocol::{ChunkCodec, Reply};
use crate::core::state::ServerState;
use bytes::Bytes;
use futures::{SinkExt, StreamExt};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::io::{AsyncRead, AsyncWrite};
use tokio::sync::broadcast;
use tokio_util::codec::Framed;
use tracing::{debug, info, warn};

/// The next step for the connection's main loop to take.
#[derive(Debug, PartialEq)]
enum NextAction {
    Continue,
    Close,
}

/// Manages the full lifecycle of a client connection.
pub struct ConnectionHandler<S> {
    framed: Framed<S, ChunkCodec>,
    addr: SocketAddr,
    state: Arc<ServerState>,
    session_id: u64,
    shutdown_rx: broadcast::Receiver<()>,
    dispatcher: Dispatcher,
}

impl<S> ConnectionHandler<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(
        socket: S,
        addr: SocketAddr,
        state: Arc<ServerState>,
        session_id: u64,
        shutdown_rx: broadcast::Receiver<()>,
    ) -> Self {
        let codec = ChunkCodec::new(state.config.read_chunk_size);
        Self {
            framed: Framed::new(socket, codec),
            addr,
            dispatcher: Dispatcher::new(state.clone(), session_id, addr),
            state,
            session_id,
            shutdown_rx,
        }
    }

    /// Runs the connection until the peer goes away, asks to close, or the
    /// server shuts down. Transport failures end the connection quietly.
    pub async fn run(&mut self) -> Result<(), FuoError> {
        let _guard = ConnectionGuard::new(self.state.clone(), self.session_id, self.addr);

        let greeting = Reply::Greeting {
            name: self.state.config.protocol.name.clone(),
            version: self.state.config.protocol.version.clone(),
        };
        if let Err(e) = self.framed.send(greeting).await {
            self.log_transport_error(&e);
            return Ok(());
        }

        loop {
            tokio::select! {
                biased;
                _ = self.shutdown_rx.recv() => {
                    info!("Connection handler for {} received shutdown signal.", self.addr);
                    break;
                }
                result = self.framed.next() => {
                    match result {
                        Some(Ok(chunk)) => match self.process_chunk(chunk).await {
                            Ok(NextAction::Continue) => {}
                            Ok(NextAction::Close) => break,
                            Err(e) => {
                                self.log_transport_error(&e);
                                break;
                            }
                        },
                        Some(Err(e)) => {
                            self.log_transport_error(&e);
                            break;
                        }
                        None => {
                            debug!("Connection from {} closed by peer.", self.addr);
                            break;
                        }
                    }
                }
            }
        }
        Ok(())
    }

    /// Handles one received chunk as one command.
    async fn process_chunk(&mut self, chunk: Bytes) -> Result<NextAction, FuoError> {
        let text = String::from_utf8_lossy(&chunk);
        let line = text.trim();

        if line.is_empty() {
            debug!(
                "Session {}: Received a blank command, closing connection.",
                self.session_id
            );
            self.framed.close().await?;
            return Ok(NextAction::Close);
        }

        debug!("Session {}: RECV: {}", self.session_id, line);
        let reply = self.dispatcher.dispatch_line(line).await;
        self.state.touch_client(self.session_id);

        debug!("Session {}: Sending reply: {:?}", self.session_id, reply);
        self.framed.send(reply).await?;
        Ok(NextAction::Continue)
    }

    fn log_transport_error(&self, e: &FuoError) {
        if is_normal_disconnect(e) {
            debug!("Connection from {} closed by peer: {}", self.addr, e);
        } else {
            warn!("Connection error for {}: {}", self.addr, e);
        }
    }
}

/// Helper function to check for non-critical disconnection errors.
fn is_normal_disconnect(e: &FuoError) -> bool {
    matches!(e, FuoError::Io(arc_err) if matches!(
        arc_err.kind(),
        std::io::ErrorKind::ConnectionReset
            | std::io::ErrorKind::BrokenPipe
            | std::io::ErrorKind::UnexpectedEof
            | std::io::ErrorKind::ConnectionAborted
    ))
}
