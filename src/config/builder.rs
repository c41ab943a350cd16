//! SnowNodeConfig builder for constructing configuration

use chrono::{DateTime, Utc};

use super::{default_epoch, SnowNodeConfig};
use crate::error::SnowNodeError;
use crate::layout::Layout;

/// Default configuration values
pub(super) const DEFAULT_EPOCH_MILLIS: i64 = 1546300800000; // January 1, 2019 UTC
pub(super) const DEFAULT_GLOBAL_FLAG: bool = false;

/// Builder for SnowNodeConfig
#[derive(Debug)]
pub struct SnowNodeConfigBuilder {
    pub(super) epoch: DateTime<Utc>,
    pub(super) node: Option<u64>,
    pub(super) node_bits: u8,
    pub(super) global: bool,
}

impl SnowNodeConfigBuilder {
    /// Create a new SnowNodeConfigBuilder with default values
    pub fn new() -> Self {
        Self {
            epoch: default_epoch(),
            node: None,
            node_bits: Layout::DEFAULT_NODE_BITS,
            global: DEFAULT_GLOBAL_FLAG,
        }
    }

    /// Set the reference instant timestamps are counted from
    pub const fn epoch(mut self, epoch: DateTime<Utc>) -> Self {
        self.epoch = epoch;
        self
    }

    /// Set the node ID. Range is checked when the allocator is built,
    /// since it depends on the node bits.
    pub const fn node(mut self, node: u64) -> Self {
        self.node = Some(node);
        self
    }

    /// Set the number of bits for node ID (0-20)
    /// Step bits will be automatically set to (21 - node_bits)
    pub fn node_bits(mut self, bits: u8) -> Result<Self, SnowNodeError> {
        if bits > Layout::MAX_NODE_BITS {
            return Err(SnowNodeError::InvalidNodeBits { bits });
        }
        self.node_bits = bits;
        Ok(self)
    }

    /// Tag every minted ID with the global flag
    pub const fn global(mut self, global: bool) -> Self {
        self.global = global;
        self
    }

    /// Build the final SnowNodeConfig
    pub fn build(self) -> SnowNodeConfig {
        SnowNodeConfig::from_builder(self)
    }
}

impl Default for SnowNodeConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
