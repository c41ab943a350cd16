//! # SnowNode
//!
//! A Rust implementation of a Snowflake-like ID allocator with a 41-bit
//! timestamp and a global flag bit.
//!
//! Generate 64-bit unique identifiers that are:
//! - 📈 Time-sorted
//! - 🔄 Ordered by `(time, step)` per node, even when the clock goes backward
//! - 🔒 Thread-safe
//! - 💾 Restart-safe with an optional persisted logical time
//! - 🌐 Distributed-ready
//!
//! ```
//! use snownode::{SnowNode, SnowNodeConfig};
//!
//! let config = SnowNodeConfig::builder().node(1).global(true).build();
//! let node = SnowNode::new(config)?;
//!
//! let id = node.generate()?;
//! assert_eq!(id.node(node.layout()), 1);
//! assert!(id.is_global(node.layout()));
//! # Ok::<(), snownode::SnowNodeError>(())
//! ```

#![forbid(unsafe_code)]

mod config;
pub mod encoding;
mod error;
pub mod global;
mod id;
mod layout;
mod node;
pub mod storage;
pub mod time;

#[cfg(test)]
pub mod tests;

// Re-export main types
pub use config::{default_epoch, SnowNodeConfig, SnowNodeConfigBuilder, NODE_ID_ENV};
pub use encoding::DecodeError;
pub use error::SnowNodeError;
pub use id::SnowID;
pub use layout::{mask_for, Layout};
pub use node::SnowNode;
pub use storage::{FileStorage, Storage, StorageError};
pub use time::{ManualClock, SystemClock, TimeSource};
