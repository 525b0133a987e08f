// src/core/protocol/reply.rs

//! The reply envelope written back to clients.
//!
//! A successful dispatch always ends with an `OK` line. The not-found and
//! failure replies never do, which is the only success signal a client gets.

use super::Command;
use std::fmt;

/// Text sent when an action has no handler category.
pub const NOT_FOUND_TEXT: &str = "Oops Command not found!\n";
/// Text sent when the handler failed while executing a command.
pub const FAILURE_TEXT: &str = "\nOops\n";

/// A single message from the server to a client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// The banner sent once, right after the connection is accepted.
    Greeting { name: String, version: String },
    /// The action is not part of the dispatch table.
    NotFound,
    /// The handler returned an error.
    Failed,
    /// The handler completed. `body` is omitted from the wire when empty.
    Ack { header: String, body: Option<String> },
}

impl Reply {
    /// Builds the success envelope for `command`.
    pub fn ack(command: &Command, body: Option<String>) -> Self {
        Reply::Ack {
            header: ack_header(command),
            body,
        }
    }

    /// True if the reply carries the trailing `OK` line.
    pub fn is_ok(&self) -> bool {
        matches!(self, Reply::Greeting { .. } | Reply::Ack { .. })
    }
}

/// `ACK <action>` followed by the arguments joined by single spaces.
pub fn ack_header(command: &Command) -> String {
    let mut header = format!("ACK {}", command.action());
    if !command.args().is_empty() {
        header.push(' ');
        header.push_str(&command.args().join(" "));
    }
    header
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reply::Greeting { name, version } => writeln!(f, "OK {name} {version}"),
            Reply::NotFound => f.write_str(NOT_FOUND_TEXT),
            Reply::Failed => f.write_str(FAILURE_TEXT),
            Reply::Ack { header, body } => {
                f.write_str(header)?;
                if let Some(body) = body.as_deref().filter(|b| !b.is_empty()) {
                    write!(f, "\n{body}")?;
                }
                f.write_str("\nOK\n")
            }
        }
    }
}
