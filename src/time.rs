//! Time sources for SnowNode
//!
//! An allocator reads "now" from a [`TimeSource`] and converts it to
//! milliseconds since its own epoch.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

/// Source of the current time
pub trait TimeSource: Send + Sync {
    /// Milliseconds since the Unix epoch
    fn unix_millis(&self) -> u64;

    /// Milliseconds elapsed since `epoch_millis` (Unix milliseconds), clamped at zero
    #[inline]
    fn millis_since(&self, epoch_millis: i64) -> u64 {
        (self.unix_millis() as i64).saturating_sub(epoch_millis).max(0) as u64
    }
}

/// Wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl TimeSource for SystemClock {
    #[inline(always)]
    fn unix_millis(&self) -> u64 {
        unix_time_ms()
    }
}

/// Get current wall-clock time in milliseconds since Unix epoch
#[inline(always)]
pub fn unix_time_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// A clock that only moves when told to.
///
/// Clones share the same reading, so a test can keep a handle while the
/// allocator owns another and move time forward or backward at will.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Arc<AtomicU64>,
}

impl ManualClock {
    /// Start at `unix_millis`
    pub fn new(unix_millis: u64) -> Self {
        Self {
            now: Arc::new(AtomicU64::new(unix_millis)),
        }
    }

    pub fn set(&self, unix_millis: u64) {
        self.now.store(unix_millis, Ordering::SeqCst);
    }

    pub fn advance(&self, millis: u64) {
        self.now.fetch_add(millis, Ordering::SeqCst);
    }

    /// Move the clock backward, stopping at zero
    pub fn rewind(&self, millis: u64) {
        let _ = self
            .now
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |now| {
                Some(now.saturating_sub(millis))
            });
    }
}

impl TimeSource for ManualClock {
    #[inline]
    fn unix_millis(&self) -> u64 {
        self.now.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unix_time_is_reasonable() {
        let now = unix_time_ms();
        // Should be after 2024-01-01
        assert!(now > 1704067200000);
        // Should be before 2100-01-01
        assert!(now < 4102444800000);
    }

    #[test]
    fn test_millis_since_epoch() {
        let epoch = 1546300800000i64; // 2019-01-01
        let ts = SystemClock.millis_since(epoch);
        assert!(ts > 0);
        assert!(ts < 100 * 365 * 24 * 60 * 60 * 1000);
    }

    #[test]
    fn test_future_epoch_clamps_to_zero() {
        let clock = ManualClock::new(1_000);
        assert_eq!(clock.millis_since(5_000), 0);
    }

    #[test]
    fn test_manual_clock_shared_between_clones() {
        let clock = ManualClock::new(1_000);
        let handle = clock.clone();

        handle.advance(5);
        assert_eq!(clock.unix_millis(), 1_005);

        handle.rewind(10);
        assert_eq!(clock.unix_millis(), 995);

        handle.rewind(10_000);
        assert_eq!(clock.unix_millis(), 0);

        handle.set(42);
        assert_eq!(clock.unix_millis(), 42);
    }
}
