//! Core SnowNode allocator
//!
//! Split into modules for testability:
//! - `state` - Logical time, step counter and backing store behind the lock
//! - `alloc` - ID allocation entry points

mod alloc;
mod state;

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use tracing::debug;

use crate::config::SnowNodeConfig;
use crate::error::SnowNodeError;
use crate::id::SnowID;
use crate::layout::Layout;
use crate::storage::Storage;
use crate::time::{SystemClock, TimeSource};

use state::State;

/// Thread-safe ID allocator for one node
///
/// All allocation state sits behind a single lock, held for the whole of an
/// allocation including the backing store write.
#[derive(Debug)]
pub struct SnowNode<C = SystemClock> {
    state: Mutex<State>,
    layout: Layout,
    node: u64,
    global: bool,
    epoch_millis: i64,
    clock: C,
}

impl SnowNode<SystemClock> {
    /// Create with the wall clock and no backing store
    pub fn new(config: SnowNodeConfig) -> Result<Self, SnowNodeError> {
        Self::with_clock(config, SystemClock, None)
    }

    /// Create with the wall clock, seeding and persisting logical time in `storage`
    pub fn with_storage<S>(config: SnowNodeConfig, storage: S) -> Result<Self, SnowNodeError>
    where
        S: Storage + 'static,
    {
        Self::with_clock(config, SystemClock, Some(Box::new(storage)))
    }
}

impl<C: TimeSource> SnowNode<C> {
    /// Create with a custom time source
    pub fn with_clock(
        config: SnowNodeConfig,
        clock: C,
        storage: Option<Box<dyn Storage>>,
    ) -> Result<Self, SnowNodeError> {
        let layout = config.layout()?;
        let node = config.resolve_node()?;
        Self::validate_node_id(node, &layout)?;

        let epoch_millis = layout.epoch().timestamp_millis();
        let now = clock.millis_since(epoch_millis);
        Self::validate_time(now, &layout)?;
        let state = Self::seed_state(now, storage, &layout)?;

        debug!(
            node,
            node_bits = layout.node_bits(),
            step_bits = layout.step_bits(),
            global = config.global(),
            time = state.time,
            "snownode initialized"
        );

        Ok(Self {
            state: Mutex::new(state),
            layout,
            node,
            global: config.global(),
            epoch_millis,
            clock,
        })
    }

    fn validate_node_id(node: u64, layout: &Layout) -> Result<(), SnowNodeError> {
        let max = layout.node_max();
        if node > max {
            return Err(SnowNodeError::InvalidNodeId { node, max });
        }
        Ok(())
    }

    /// An epoch too far in the past leaves no room in the timestamp field
    fn validate_time(time: u64, layout: &Layout) -> Result<(), SnowNodeError> {
        let max = layout.time_max();
        if time > max {
            return Err(SnowNodeError::TimestampOverflow { time, max });
        }
        Ok(())
    }

    /// Start from `now`, or from the persisted time when it is ahead.
    ///
    /// A previous process may already have used steps of the persisted
    /// millisecond, so adopting it marks that millisecond as full.
    fn seed_state(
        now: u64,
        mut storage: Option<Box<dyn Storage>>,
        layout: &Layout,
    ) -> Result<State, SnowNodeError> {
        let persisted = match storage.as_mut().map(|s| s.get()) {
            None => None,
            Some(Ok(time)) => Some(time),
            Some(Err(err)) if err.is_empty() => {
                debug!("no persisted time yet, starting from the clock");
                None
            }
            Some(Err(err)) => return Err(err.into()),
        };

        let mut state = State::new(now, storage);
        if let Some(time) = persisted.filter(|&time| time > now) {
            Self::validate_time(time, layout)?;
            debug!(persisted = time, now, "adopting persisted logical time");
            state.time = time;
            state.step = layout.step_max();
        }
        Ok(state)
    }

    #[inline(always)]
    pub(crate) fn now_ms(&self) -> u64 {
        self.clock.millis_since(self.epoch_millis)
    }

    /// Bit layout IDs from this node are minted with
    #[inline(always)]
    pub const fn layout(&self) -> &Layout {
        &self.layout
    }

    #[inline(always)]
    pub const fn node(&self) -> u64 {
        self.node
    }

    #[inline(always)]
    pub const fn is_global(&self) -> bool {
        self.global
    }

    #[inline(always)]
    pub const fn node_bits(&self) -> u8 {
        self.layout.node_bits()
    }

    #[inline(always)]
    pub const fn step_bits(&self) -> u8 {
        self.layout.step_bits()
    }

    #[inline(always)]
    pub const fn max_node_id(&self) -> u64 {
        self.layout.node_max()
    }

    #[inline(always)]
    pub const fn max_step(&self) -> u64 {
        self.layout.step_max()
    }

    #[inline(always)]
    pub fn epoch(&self) -> DateTime<Utc> {
        self.layout.epoch()
    }

    /// Current logical time, which can run ahead of the clock
    pub fn logical_time(&self) -> u64 {
        self.state.lock().time
    }

    /// Decompose an ID minted by this node into timestamp, global flag, node and step
    #[inline]
    pub fn decompose(&self, id: SnowID) -> (u64, bool, u64, u64) {
        self.layout.decompose(id)
    }
}
