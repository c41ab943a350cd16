//! ID allocation
//!
//! [`SnowNode::alloc`] is the only operation that mutates allocator state;
//! everything else here wraps it.

use tracing::{instrument, warn};

use super::SnowNode;
use crate::error::SnowNodeError;
use crate::id::SnowID;
use crate::time::TimeSource;

impl<C: TimeSource> SnowNode<C> {
    /// Generate a new SnowID
    #[inline]
    pub fn generate(&self) -> Result<SnowID, SnowNodeError> {
        self.alloc(1)
    }

    /// Generate a new SnowID, panicking on failure
    pub fn must_generate(&self) -> SnowID {
        self.generate().unwrap_or_else(|err| panic!("{err}"))
    }

    /// Reserve `step` consecutive steps and return the ID of the first one.
    ///
    /// The block covers steps `[id.step(), id.step() + step)` of the returned
    /// ID's millisecond; the caller derives the rest of the IDs itself.
    ///
    /// # Errors
    /// - [`SnowNodeError::StepOutOfRange`] when `step` is 0 or above the step
    ///   field maximum. Nothing is changed.
    /// - [`SnowNodeError::TimestampOverflow`] when the logical time would have
    ///   to move past the timestamp field. Nothing is changed.
    /// - [`SnowNodeError::Storage`] when persisting a new logical time fails.
    ///   No ID is returned, but the logical time has already moved.
    #[instrument(level = "trace", skip(self), fields(node = self.node))]
    pub fn alloc(&self, step: u64) -> Result<SnowID, SnowNodeError> {
        let max = self.layout.step_max();
        if step == 0 || step > max {
            return Err(SnowNodeError::StepOutOfRange { step, max });
        }

        let mut state = self.state.lock();
        let now = self.now_ms();
        let (time, start) = state.reserve(now, step, max).inspect_err(|err| {
            warn!(error = %err, now, "failed to reserve steps");
        })?;

        Ok(self.layout.encode(time, self.global, self.node, start))
    }

    /// Reserve `step` consecutive steps, panicking on failure
    pub fn must_alloc(&self, step: u64) -> SnowID {
        self.alloc(step).unwrap_or_else(|err| panic!("{err}"))
    }
}
