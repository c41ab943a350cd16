//! Bit layout of a SnowID
//!
//! From most to least significant bit:
//!
//! ```text
//! | 1 reserved (0) | 41 timestamp | 1 global flag | node_bits node | step_bits step |
//! ```
//!
//! Field widths are not stored in the ID. Decoding only gives correct values
//! with the same layout that minted the ID.

use chrono::{DateTime, TimeDelta, Utc};

use crate::error::SnowNodeError;
use crate::id::SnowID;

/// Bits available below the reserved bit
const USABLE_BITS: u8 = 63;

/// Mask of the lowest `bits` bits. `mask_for(0)` is 0, `mask_for(64)` is `u64::MAX`.
#[inline(always)]
pub const fn mask_for(bits: u8) -> u64 {
    if bits >= 64 {
        u64::MAX
    } else {
        (1u64 << bits) - 1
    }
}

/// Field widths, limits and shifts for one allocator configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    epoch: DateTime<Utc>,
    node_bits: u8,
    step_bits: u8,
    node_max: u64,
    step_max: u64,
    node_shift: u8,
    global_flag_shift: u8,
    time_shift: u8,
}

impl Layout {
    pub const TIME_BITS: u8 = 41;
    pub const GLOBAL_FLAG_BITS: u8 = 1;
    pub const DEFAULT_NODE_BITS: u8 = 6;
    /// Keeps at least one step bit
    pub const MAX_NODE_BITS: u8 = USABLE_BITS - Self::TIME_BITS - Self::GLOBAL_FLAG_BITS - 1;

    /// Compute a layout for `node_bits` node bits
    pub fn new(node_bits: u8, epoch: DateTime<Utc>) -> Result<Self, SnowNodeError> {
        if node_bits > Self::MAX_NODE_BITS {
            return Err(SnowNodeError::InvalidNodeBits { bits: node_bits });
        }
        Ok(Self::build(node_bits, epoch))
    }

    fn build(node_bits: u8, epoch: DateTime<Utc>) -> Self {
        let step_bits = USABLE_BITS - Self::TIME_BITS - Self::GLOBAL_FLAG_BITS - node_bits;
        Self {
            epoch,
            node_bits,
            step_bits,
            node_max: mask_for(node_bits),
            step_max: mask_for(step_bits),
            node_shift: step_bits,
            global_flag_shift: step_bits + node_bits,
            time_shift: step_bits + node_bits + Self::GLOBAL_FLAG_BITS,
        }
    }

    #[inline(always)]
    pub const fn epoch(&self) -> DateTime<Utc> {
        self.epoch
    }

    #[inline(always)]
    pub const fn node_bits(&self) -> u8 {
        self.node_bits
    }

    #[inline(always)]
    pub const fn step_bits(&self) -> u8 {
        self.step_bits
    }

    #[inline(always)]
    pub const fn node_max(&self) -> u64 {
        self.node_max
    }

    #[inline(always)]
    pub const fn step_max(&self) -> u64 {
        self.step_max
    }

    #[inline(always)]
    pub const fn time_max(&self) -> u64 {
        mask_for(Self::TIME_BITS)
    }

    #[inline(always)]
    pub const fn node_shift(&self) -> u8 {
        self.node_shift
    }

    #[inline(always)]
    pub const fn global_flag_shift(&self) -> u8 {
        self.global_flag_shift
    }

    #[inline(always)]
    pub const fn time_shift(&self) -> u8 {
        self.time_shift
    }

    /// Pack the fields into an ID.
    ///
    /// Callers must keep `time`, `node` and `step` within their field widths;
    /// nothing is masked or checked here.
    #[inline(always)]
    pub const fn encode(&self, time: u64, global_flag: bool, node: u64, step: u64) -> SnowID {
        SnowID::from_u64(
            (time << self.time_shift)
                | ((global_flag as u64) << self.global_flag_shift)
                | (node << self.node_shift)
                | step,
        )
    }

    /// Milliseconds since the epoch
    #[inline(always)]
    pub const fn decode_timestamp(&self, id: SnowID) -> u64 {
        (id.as_u64() >> self.time_shift) & mask_for(Self::TIME_BITS)
    }

    #[inline(always)]
    pub const fn decode_global_flag(&self, id: SnowID) -> bool {
        (id.as_u64() >> self.global_flag_shift) & 1 == 1
    }

    #[inline(always)]
    pub const fn decode_node(&self, id: SnowID) -> u64 {
        (id.as_u64() >> self.node_shift) & self.node_max
    }

    /// The step field sits at the bottom so it needs no shift
    #[inline(always)]
    pub const fn decode_step(&self, id: SnowID) -> u64 {
        id.as_u64() & self.step_max
    }

    /// Absolute instant the ID was minted at
    pub fn decode_time(&self, id: SnowID) -> DateTime<Utc> {
        // 41 bits of milliseconds always fit in a TimeDelta
        self.epoch + TimeDelta::milliseconds(self.decode_timestamp(id) as i64)
    }

    /// Decompose an ID into timestamp, global flag, node and step
    #[inline]
    pub const fn decompose(&self, id: SnowID) -> (u64, bool, u64, u64) {
        (
            self.decode_timestamp(id),
            self.decode_global_flag(id),
            self.decode_node(id),
            self.decode_step(id),
        )
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::build(Self::DEFAULT_NODE_BITS, crate::config::default_epoch())
    }
}
