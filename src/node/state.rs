//! Mutable allocation state
//!
//! Only ever touched with the allocator lock held.

use std::fmt;

use tracing::trace;

use crate::error::SnowNodeError;
use crate::layout::{mask_for, Layout};
use crate::storage::Storage;

/// Largest logical time the timestamp field holds
pub(crate) const TIME_MAX: u64 = mask_for(Layout::TIME_BITS);

/// Logical clock, step counter and optional backing store of one allocator
pub(crate) struct State {
    /// Last logical millisecond an ID was minted in
    pub(crate) time: u64,
    /// Next free step within `time`
    pub(crate) step: u64,
    pub(crate) storage: Option<Box<dyn Storage>>,
}

impl State {
    pub(crate) fn new(time: u64, storage: Option<Box<dyn Storage>>) -> Self {
        Self {
            time,
            step: 0,
            storage,
        }
    }

    /// Reserve `step` consecutive steps, returning the logical time and the
    /// first reserved step.
    ///
    /// When `now` is at or behind the logical time the block comes out of the
    /// current millisecond, borrowing the next one if it is full. When `now`
    /// is ahead the logical time jumps to it and is persisted. A storage
    /// failure leaves the jump applied and returns the error.
    ///
    /// Neither a borrow nor a jump may move past [`TIME_MAX`]; that fails with
    /// [`SnowNodeError::TimestampOverflow`] and changes nothing.
    pub(crate) fn reserve(
        &mut self,
        now: u64,
        step: u64,
        step_max: u64,
    ) -> Result<(u64, u64), SnowNodeError> {
        loop {
            if now <= self.time {
                if self.step + step <= step_max {
                    let start = self.step;
                    self.step += step;
                    return Ok((self.time, start));
                }
                if self.time >= TIME_MAX {
                    return Err(SnowNodeError::TimestampOverflow {
                        time: self.time.saturating_add(1),
                        max: TIME_MAX,
                    });
                }
                trace!(
                    time = self.time,
                    now,
                    used = self.step,
                    "step space exhausted, borrowing next millisecond"
                );
                self.step = 0;
                self.time += 1;
            } else {
                if now > TIME_MAX {
                    return Err(SnowNodeError::TimestampOverflow {
                        time: now,
                        max: TIME_MAX,
                    });
                }
                self.step = 0;
                self.time = now;
                if let Some(storage) = self.storage.as_mut() {
                    storage.save(now)?;
                }
            }
        }
    }
}

impl fmt::Debug for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("State")
            .field("time", &self.time)
            .field("step", &self.step)
            .field("storage", &self.storage.is_some())
            .finish()
    }
}
