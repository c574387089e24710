//! Routing configuration sources
//!
//! The router asks for its configuration exactly once and waits for the
//! single answer. There is no timeout: a source that never answers keeps the
//! router resolving, since no route table is a safe default.

use async_trait::async_trait;
use std::path::PathBuf;
use tokio::sync::{mpsc, oneshot};
use tracing::debug;
use webc_core::RoutingConfig;

use crate::error::ConfigSourceError;

/// Anything that can answer a routing configuration request
#[async_trait]
pub trait ConfigSource: Send + Sync {
    /// Fetch the routing configuration
    async fn routing_config(&self) -> Result<RoutingConfig, ConfigSourceError>;

    /// Source name for logging
    fn name(&self) -> &'static str;
}

/// In-memory configuration
#[derive(Debug, Clone)]
pub struct StaticConfigSource {
    config: RoutingConfig,
}

impl StaticConfigSource {
    pub fn new(config: RoutingConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl ConfigSource for StaticConfigSource {
    async fn routing_config(&self) -> Result<RoutingConfig, ConfigSourceError> {
        Ok(self.config.clone())
    }

    fn name(&self) -> &'static str {
        "Static"
    }
}

/// Configuration read from a JSON file
#[derive(Debug, Clone)]
pub struct FileConfigSource {
    path: PathBuf,
}

impl FileConfigSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ConfigSource for FileConfigSource {
    async fn routing_config(&self) -> Result<RoutingConfig, ConfigSourceError> {
        Ok(RoutingConfig::load(&self.path).await?)
    }

    fn name(&self) -> &'static str {
        "File"
    }
}

/// A pending configuration request, answered exactly once
#[derive(Debug)]
pub struct ConfigRequest {
    reply: oneshot::Sender<Result<RoutingConfig, String>>,
}

impl ConfigRequest {
    /// Answer with a configuration
    pub fn respond(self, config: RoutingConfig) {
        // The requester may have gone away; nothing to do then
        let _ = self.reply.send(Ok(config));
    }

    /// Refuse the request
    pub fn reject(self, reason: impl Into<String>) {
        let _ = self.reply.send(Err(reason.into()));
    }
}

/// Configuration obtained by emitting a request and awaiting the reply
#[derive(Debug, Clone)]
pub struct ChannelConfigSource {
    requests: mpsc::UnboundedSender<ConfigRequest>,
}

impl ChannelConfigSource {
    /// Create a source and the receiving end a provider answers on
    pub fn new() -> (Self, mpsc::UnboundedReceiver<ConfigRequest>) {
        let (requests, rx) = mpsc::unbounded_channel();
        (Self { requests }, rx)
    }
}

#[async_trait]
impl ConfigSource for ChannelConfigSource {
    async fn routing_config(&self) -> Result<RoutingConfig, ConfigSourceError> {
        let (reply, response) = oneshot::channel();
        self.requests
            .send(ConfigRequest { reply })
            .map_err(|_| ConfigSourceError::NoProvider)?;

        debug!("Routing configuration requested");

        match response.await {
            Ok(Ok(config)) => Ok(config),
            Ok(Err(reason)) => Err(ConfigSourceError::Rejected(reason)),
            Err(_) => Err(ConfigSourceError::Dropped),
        }
    }

    fn name(&self) -> &'static str {
        "Channel"
    }
}
