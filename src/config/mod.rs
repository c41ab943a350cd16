//! Configuration for SnowNode allocators

mod builder;

use std::env;

use chrono::{DateTime, Utc};

pub use builder::SnowNodeConfigBuilder;
use builder::{DEFAULT_EPOCH_MILLIS, DEFAULT_GLOBAL_FLAG};

use crate::error::SnowNodeError;
use crate::layout::Layout;

/// Environment variable read when no node ID is configured
pub const NODE_ID_ENV: &str = "SNOWFLAKE_NODE_ID";

/// Default epoch: 2019-01-01T00:00:00Z
pub fn default_epoch() -> DateTime<Utc> {
    DateTime::from_timestamp_millis(DEFAULT_EPOCH_MILLIS).unwrap_or_default()
}

/// Configuration for a SnowNode allocator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnowNodeConfig {
    epoch: DateTime<Utc>,
    node: Option<u64>,
    node_bits: u8,
    global: bool,
}

impl SnowNodeConfig {
    /// Create config from builder
    pub(crate) fn from_builder(b: SnowNodeConfigBuilder) -> Self {
        Self {
            epoch: b.epoch,
            node: b.node,
            node_bits: b.node_bits,
            global: b.global,
        }
    }

    /// Create a new configuration builder
    pub fn builder() -> SnowNodeConfigBuilder {
        SnowNodeConfigBuilder::new()
    }

    #[inline(always)]
    pub const fn epoch(&self) -> DateTime<Utc> {
        self.epoch
    }

    /// Explicitly configured node ID, if any
    #[inline(always)]
    pub const fn node(&self) -> Option<u64> {
        self.node
    }

    #[inline(always)]
    pub const fn node_bits(&self) -> u8 {
        self.node_bits
    }

    #[inline(always)]
    pub const fn global(&self) -> bool {
        self.global
    }

    /// Bit layout described by this configuration
    pub fn layout(&self) -> Result<Layout, SnowNodeError> {
        Layout::new(self.node_bits, self.epoch)
    }

    /// Node ID to allocate with: the configured one, else [`NODE_ID_ENV`], else 0
    pub fn resolve_node(&self) -> Result<u64, SnowNodeError> {
        self.resolve_node_with(|key| env::var(key).ok())
    }

    pub(crate) fn resolve_node_with<F>(&self, lookup: F) -> Result<u64, SnowNodeError>
    where
        F: FnOnce(&str) -> Option<String>,
    {
        if let Some(node) = self.node {
            return Ok(node);
        }
        match lookup(NODE_ID_ENV) {
            Some(value) if !value.trim().is_empty() => value
                .trim()
                .parse::<u64>()
                .map_err(|source| SnowNodeError::InvalidNodeEnv { value, source }),
            _ => Ok(0),
        }
    }
}

impl Default for SnowNodeConfig {
    fn default() -> Self {
        Self {
            epoch: default_epoch(),
            node: None,
            node_bits: Layout::DEFAULT_NODE_BITS,
            global: DEFAULT_GLOBAL_FLAG,
        }
    }
}
