//! Persisted logical time
//!
//! A store remembers the last logical millisecond an allocator jumped to, so a
//! restarted process never starts below it. `get` is called once when a
//! [`SnowNode`](crate::SnowNode) is built; `save` every time the logical clock
//! catches up with the wall clock.

mod file;

use std::path::PathBuf;

use thiserror::Error;

pub use file::FileStorage;

/// Backing store for the logical time of one allocator
pub trait Storage: Send {
    /// Last persisted time, in milliseconds since the allocator epoch
    fn get(&mut self) -> Result<u64, StorageError>;

    /// Persist `millis`, replacing the previous value
    fn save(&mut self, millis: u64) -> Result<(), StorageError>;
}

impl<S: Storage + ?Sized> Storage for Box<S> {
    fn get(&mut self) -> Result<u64, StorageError> {
        (**self).get()
    }

    fn save(&mut self, millis: u64) -> Result<(), StorageError> {
        (**self).save(millis)
    }
}

/// Errors raised by a [`Storage`] backend
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading or writing the backing file failed
    #[error("Storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
    /// Nothing has been persisted yet
    #[error("The file {} storing time information is empty", .path.display())]
    Empty { path: PathBuf },
    /// The persisted value is not a millisecond count
    #[error("The file {} holds {value:?}, which is not a valid time", .path.display())]
    Parse {
        path: PathBuf,
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
    /// Error from a custom backend
    #[error("Storage backend failed: {0}")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl StorageError {
    /// Wrap an arbitrary backend error
    pub fn backend<E>(err: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        Self::Backend(err.into())
    }

    /// True when the store simply holds no value yet
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty { .. })
    }
}
