// src/core/handler/standalone.rs

//! The executor used when the server runs without a player attached.
//!
//! `help` and `status` are answered from the protocol layer's own knowledge.
//! Every other category needs a player or playlist and therefore fails.

use super::{HandlerCategory, HandlerContext, HandlerExecutor};
use crate::core::library::ProviderRegistry;
use crate::core::protocol::Command;
use anyhow::{Result, bail};
use async_trait::async_trait;
use std::fmt::Write;
use strum::IntoEnumIterator;

#[derive(Debug, Default, Clone, Copy)]
pub struct StandaloneExecutor;

impl StandaloneExecutor {
    pub fn new() -> Self {
        Self
    }

    fn help(&self) -> String {
        let mut out = String::from("Available commands:");
        for category in HandlerCategory::iter() {
            let _ = write!(out, "\n  {:<9}{}", category.name(), category.actions().join(" "));
        }
        out
    }

    fn status(&self, ctx: &HandlerContext) -> String {
        let providers = ctx.library.list_providers();
        let mut out = String::new();
        let _ = writeln!(out, "protocol:          {} {}", ctx.protocol.name, ctx.protocol.version);
        let _ = writeln!(out, "connected_clients: {}", ctx.stats.connected_clients);
        let _ = writeln!(out, "total_connections: {}", ctx.stats.total_connections);
        let _ = writeln!(out, "total_commands:    {}", ctx.stats.total_commands);
        let _ = writeln!(out, "unknown_commands:  {}", ctx.stats.commands_not_found);
        let _ = writeln!(out, "handler_failures:  {}", ctx.stats.handler_failures);
        let _ = write!(out, "providers:         {}", providers.join(","));
        out
    }
}

#[async_trait]
impl HandlerExecutor for StandaloneExecutor {
    async fn invoke(
        &self,
        category: HandlerCategory,
        ctx: &HandlerContext,
        command: &Command,
    ) -> Result<Option<String>> {
        match category {
            HandlerCategory::Help => Ok(Some(self.help())),
            HandlerCategory::Status => Ok(Some(self.status(ctx))),
            _ => bail!(
                "no player attached to handle '{}' ({} category)",
                command.action(),
                category
            ),
        }
    }
}
