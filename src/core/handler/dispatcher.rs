// src/core/handler/dispatcher.rs

//! Routes a parsed command to its handler category and wraps the outcome in
//! the reply envelope.
//!
//! This is the only place where handler errors are caught. Whatever the
//! executor returns as an error, and any panic it raises, is logged together
//! with the command and turned into the fixed failure reply; the connection
//! itself is never affected.

use super::{HandlerCategory, HandlerContext, HandlerExecutor};
use crate::core::FuoError;
use crate::core::metrics;
use crate::core::protocol::{Command, Reply};
use crate::core::state::ServerState;
use futures::FutureExt;
use std::any::Any;
use std::net::SocketAddr;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::Instant;
use tracing::{Instrument, debug, error, info_span};

/// Dispatches commands for one connection.
pub struct Dispatcher {
    state: Arc<ServerState>,
    session_id: u64,
    addr: SocketAddr,
}

impl Dispatcher {
    pub fn new(state: Arc<ServerState>, session_id: u64, addr: SocketAddr) -> Self {
        Self {
            state,
            session_id,
            addr,
        }
    }

    fn context(&self) -> HandlerContext {
        HandlerContext {
            library: self.state.library.clone(),
            protocol: self.state.config.protocol.clone(),
            stats: self.state.stats_snapshot(),
            session_id: self.session_id,
            addr: self.addr,
        }
    }

    /// Parses and runs one received line.
    ///
    /// A line that does not parse gets the same reply as an unknown action.
    pub async fn dispatch_line(&self, line: &str) -> Reply {
        match Command::parse(line) {
            Ok(command) => self.dispatch(&command).await,
            Err(e) => {
                debug!("Session {}: Unparsable command {:?}: {}", self.session_id, line, e);
                self.state.stats.increment_total_commands();
                metrics::COMMANDS_PROCESSED_TOTAL.inc();
                self.state.stats.increment_commands_not_found();
                metrics::COMMANDS_NOT_FOUND_TOTAL.inc();
                Reply::NotFound
            }
        }
    }

    /// Runs `command` and returns the reply to send back.
    pub async fn dispatch(&self, command: &Command) -> Reply {
        let span = info_span!(
            "command",
            name = %command.action(),
            client.addr = %self.addr,
            client.id = %self.session_id,
        );

        async move {
            let start_time = Instant::now();
            self.state.stats.increment_total_commands();
            metrics::COMMANDS_PROCESSED_TOTAL.inc();

            let Some(category) = HandlerCategory::for_action(command.action()) else {
                debug!("{}", FuoError::UnknownCommand(command.action().to_string()));
                self.state.stats.increment_commands_not_found();
                metrics::COMMANDS_NOT_FOUND_TOTAL.inc();
                return Reply::NotFound;
            };

            debug!("EXEC_CMD: {} -> {}", command, category);
            let ctx = self.context();
            let reply = invoke(self.state.executor.as_ref(), category, &ctx, command).await;
            if !reply.is_ok() {
                self.state.stats.increment_handler_failures();
                metrics::HANDLER_FAILURES_TOTAL
                    .with_label_values(&[category.name()])
                    .inc();
            }
            metrics::COMMAND_LATENCY_SECONDS.observe(start_time.elapsed().as_secs_f64());
            reply
        }
        .instrument(span)
        .await
    }
}

/// Invokes the executor and builds the envelope, converting any error or
/// panic into `Reply::Failed`.
pub async fn invoke(
    executor: &dyn HandlerExecutor,
    category: HandlerCategory,
    ctx: &HandlerContext,
    command: &Command,
) -> Reply {
    let outcome = AssertUnwindSafe(executor.invoke(category, ctx, command))
        .catch_unwind()
        .await;
    let err = match outcome {
        Ok(Ok(body)) => return Reply::ack(command, body),
        Ok(Err(e)) => FuoError::from(e),
        Err(payload) => FuoError::Handler(format!("panicked: {}", panic_message(&*payload))),
    };
    error!("handle cmd({}) error: {}", command, err);
    Reply::Failed
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("unknown panic payload")
}
