// src/core/protocol/command.rs

//! The command grammar of the control protocol.
//!
//! ```text
//! line   := action (WS arg)*
//! action := token        ; lowercased
//! arg    := token        ; passed through verbatim
//! ```
//!
//! Tokens are split on any run of whitespace. There is no quoting or escaping,
//! so `set volume=100` yields the single argument `volume=100`.

use crate::core::FuoError;
use std::fmt;

/// A parsed request line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    action: String,
    args: Vec<String>,
}

impl Command {
    /// Parses one line of text into a `Command`.
    pub fn parse(line: &str) -> Result<Self, FuoError> {
        let mut tokens = line.split_whitespace();
        let action = tokens.next().ok_or(FuoError::EmptyCommand)?;

        if !action
            .chars()
            .all(|c| c.is_alphanumeric() || c == '_' || c == '-')
        {
            return Err(FuoError::InvalidAction(action.to_string()));
        }

        Ok(Self {
            action: action.to_lowercase(),
            args: tokens.map(str::to_string).collect(),
        })
    }

    /// Builds a command from already separated parts.
    pub fn new(action: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            action: action.into(),
            args,
        }
    }

    pub fn action(&self) -> &str {
        &self.action
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.action)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}
