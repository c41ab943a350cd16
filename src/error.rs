use std::num::ParseIntError;

use thiserror::Error;

use crate::storage::StorageError;

/// Represents errors that can occur during SnowNode operations
#[derive(Debug, Error)]
pub enum SnowNodeError {
    /// Error when node ID exceeds the maximum allowed value
    #[error("Node ID {node} is invalid. Maximum allowed value is {max}")]
    InvalidNodeId { node: u64, max: u64 },
    /// Error when the node bit width leaves no room for a step field
    #[error("Node bits {bits} must be between 0 and 20")]
    InvalidNodeBits { bits: u8 },
    /// Error when the node ID environment variable does not hold a number
    #[error("Node ID environment value {value:?} is not a valid number")]
    InvalidNodeEnv {
        value: String,
        #[source]
        source: ParseIntError,
    },
    /// Error when a requested step is zero or larger than the step field allows
    #[error("Step {step} is out of range. Allowed values are 1 to {max}")]
    StepOutOfRange { step: u64, max: u64 },
    /// Error when the logical time no longer fits the 41-bit timestamp field
    #[error("Timestamp {time} exceeds the maximum of {max} ms since the epoch")]
    TimestampOverflow { time: u64, max: u64 },
    /// Error raised by the backing store
    #[error(transparent)]
    Storage(#[from] StorageError),
    /// Error when the process-wide default node is used before being installed
    #[error("Default SnowNode has not been installed")]
    NotInstalled,
}
