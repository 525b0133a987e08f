// src/config.rs

//! Manages server configuration: loading from TOML, defaults and validation.

use crate::core::protocol::codec::DEFAULT_CHUNK_SIZE;
use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use std::fs;
use tracing::warn;

/// Identifies the protocol in the greeting banner (`OK <name> <version>`).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ProtocolConfig {
    #[serde(default = "default_protocol_name")]
    pub name: String,
    #[serde(default = "default_protocol_version")]
    pub version: String,
}

impl Default for ProtocolConfig {
    fn default() -> Self {
        Self {
            name: default_protocol_name(),
            version: default_protocol_version(),
        }
    }
}

fn default_protocol_name() -> String {
    "feeluown".to_string()
}
fn default_protocol_version() -> String {
    "1.0.0".to_string()
}

/// Configuration for the Prometheus metrics exporter.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct MetricsConfig {
    /// If true, an HTTP server will be started to expose Prometheus metrics.
    #[serde(default)]
    pub enabled: bool,
    /// The port for the Prometheus metrics server.
    #[serde(default = "default_metrics_port")]
    pub port: u16,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            port: default_metrics_port(),
        }
    }
}

fn default_metrics_port() -> u16 {
    23334
}

/// A raw representation of the config file before validation.
#[derive(Deserialize)]
struct RawConfig {
    #[serde(default = "default_host")]
    host: String,
    #[serde(default = "default_port")]
    port: u16,
    #[serde(default = "default_log_level")]
    log_level: String,
    #[serde(default = "default_max_clients")]
    max_clients: usize,
    #[serde(default = "default_read_chunk_size")]
    read_chunk_size: usize,
    #[serde(default)]
    protocol: ProtocolConfig,
    #[serde(default)]
    metrics: MetricsConfig,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}
fn default_port() -> u16 {
    23333
}
fn default_log_level() -> String {
    "info".to_string()
}
fn default_max_clients() -> usize {
    1024
}
fn default_read_chunk_size() -> usize {
    DEFAULT_CHUNK_SIZE
}

/// Represents the final, validated server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub log_level: String,
    /// Connections beyond this number are closed right after being accepted.
    pub max_clients: usize,
    /// The most bytes read and treated as one command.
    pub read_chunk_size: usize,
    #[serde(default)]
    pub protocol: ProtocolConfig,
    #[serde(default)]
    pub metrics: MetricsConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            log_level: default_log_level(),
            max_clients: default_max_clients(),
            read_chunk_size: default_read_chunk_size(),
            protocol: ProtocolConfig::default(),
            metrics: MetricsConfig::default(),
        }
    }
}

impl Config {
    /// Creates a new `Config` instance by reading and parsing a TOML file.
    pub fn from_file(path: &str) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file at '{path}'"))?;
        Self::from_toml_str(&contents).with_context(|| format!("Invalid config in '{path}'"))
    }

    /// Parses and validates configuration from TOML text.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let raw_config: RawConfig =
            toml::from_str(contents).context("Failed to parse TOML configuration")?;

        let config = Config {
            host: raw_config.host,
            port: raw_config.port,
            log_level: raw_config.log_level,
            max_clients: raw_config.max_clients,
            read_chunk_size: raw_config.read_chunk_size,
            protocol: raw_config.protocol,
            metrics: raw_config.metrics,
        };

        // Only embedders binding programmatically may ask for an ephemeral port.
        if config.port == 0 {
            return Err(anyhow!("port cannot be 0"));
        }
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration to ensure logical consistency.
    ///
    /// Port 0 passes and binds an ephemeral port.
    pub fn validate(&self) -> Result<()> {
        if self.host.trim().is_empty() {
            return Err(anyhow!("host cannot be empty"));
        }
        if self.max_clients == 0 {
            return Err(anyhow!("max_clients cannot be 0"));
        }
        if self.read_chunk_size == 0 {
            return Err(anyhow!("read_chunk_size cannot be 0"));
        }
        if self.read_chunk_size < 64 {
            warn!(
                "read_chunk_size is only {} bytes; longer commands will be split.",
                self.read_chunk_size
            );
        }
        if self.protocol.name.trim().is_empty() || self.protocol.name.contains(char::is_whitespace) {
            return Err(anyhow!("protocol.name must be a single non-empty word"));
        }
        if self.protocol.version.trim().is_empty()
            || self.protocol.version.contains(char::is_whitespace)
        {
            return Err(anyhow!("protocol.version must be a single non-empty word"));
        }

        if self.metrics.enabled {
            if self.metrics.port == 0 {
                return Err(anyhow!("metrics.port cannot be 0"));
            }
            if self.metrics.port == self.port {
                return Err(anyhow!(
                    "metrics.port cannot be the same as the main server port"
                ));
            }
        }
        Ok(())
    }
}
