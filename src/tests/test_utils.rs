//! Shared test utilities for SnowNode tests

use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;

use crate::storage::{Storage, StorageError};
use crate::{default_epoch, ManualClock, SnowID, SnowNode, SnowNodeConfig};

/// Unix milliseconds of the default epoch
pub fn epoch_ms() -> u64 {
    default_epoch().timestamp_millis() as u64
}

/// A clock frozen `offset` milliseconds after the default epoch
pub fn clock_at(offset: u64) -> ManualClock {
    ManualClock::new(epoch_ms() + offset)
}

/// Node 1 with the global flag set, driven by `clock`
pub fn fixed_node(clock: &ManualClock) -> SnowNode<ManualClock> {
    let config = SnowNodeConfig::builder().node(1).global(true).build();
    SnowNode::with_clock(config, clock.clone(), None).unwrap()
}

/// A file path under the temp dir that no other test uses
pub fn temp_path(name: &str) -> PathBuf {
    static COUNTER: AtomicUsize = AtomicUsize::new(0);
    let n = COUNTER.fetch_add(1, Ordering::SeqCst);
    std::env::temp_dir().join(format!(
        "snownode-{}-{}-{}.time",
        std::process::id(),
        name,
        n
    ))
}

#[derive(Debug, Default)]
struct MemoryInner {
    value: Option<u64>,
    saved: Vec<u64>,
    fail_saves: bool,
    fail_gets: bool,
}

/// In-memory [`Storage`] whose clones share state, so tests can inspect
/// what an allocator persisted.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    inner: Arc<Mutex<MemoryInner>>,
}

impl MemoryStorage {
    pub fn with_value(value: u64) -> Self {
        let storage = Self::default();
        storage.inner.lock().value = Some(value);
        storage
    }

    pub fn saved(&self) -> Vec<u64> {
        self.inner.lock().saved.clone()
    }

    pub fn fail_saves(&self, fail: bool) {
        self.inner.lock().fail_saves = fail;
    }

    pub fn fail_gets(&self, fail: bool) {
        self.inner.lock().fail_gets = fail;
    }
}

impl Storage for MemoryStorage {
    fn get(&mut self) -> Result<u64, StorageError> {
        let inner = self.inner.lock();
        if inner.fail_gets {
            return Err(StorageError::backend("store unavailable"));
        }
        inner.value.ok_or_else(|| StorageError::Empty {
            path: PathBuf::from("memory"),
        })
    }

    fn save(&mut self, millis: u64) -> Result<(), StorageError> {
        let mut inner = self.inner.lock();
        if inner.fail_saves {
            return Err(StorageError::backend("store is read-only"));
        }
        inner.value = Some(millis);
        inner.saved.push(millis);
        Ok(())
    }
}

/// Assert that all IDs in the collection are unique
pub fn assert_unique_ids(ids: &[SnowID], expected_count: usize) {
    let set: HashSet<_> = ids.iter().copied().collect();
    assert_eq!(
        set.len(),
        expected_count,
        "Expected {} unique IDs, but got {} (duplicates detected)",
        expected_count,
        set.len()
    );
}

/// Assert IDs strictly increase in the order they were minted
pub fn assert_strictly_increasing(ids: &[SnowID]) {
    for i in 1..ids.len() {
        assert!(
            ids[i] > ids[i - 1],
            "ID at position {} ({}) is not greater than previous ID ({})",
            i,
            ids[i],
            ids[i - 1]
        );
    }
}

/// Assert `(time, step)` pairs strictly increase in minting order
pub fn assert_time_step_ordered(node: &SnowNode<impl crate::TimeSource>, ids: &[SnowID]) {
    let layout = node.layout();
    for pair in ids.windows(2) {
        let a = (pair[0].timestamp(layout), pair[0].step(layout));
        let b = (pair[1].timestamp(layout), pair[1].step(layout));
        assert!(a < b, "(time, step) {:?} is not before {:?}", a, b);
    }
}
