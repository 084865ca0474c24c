//! [`HitCounter`]: lock-free, process-wide request counter.

use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};

/// Shared request counter.
///
/// Clones share the same underlying atomic. All operations are sequentially
/// consistent, so a reset and the increments around it are observed in one
/// total order by every reader.
#[derive(Clone, Debug, Default)]
pub struct HitCounter {
    inner: Arc<AtomicU64>,
}

impl HitCounter {
    /// Create a counter starting at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one hit and return the new total.
    pub fn increment(&self) -> u64 {
        self.inner.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Current total, without modifying it.
    pub fn report(&self) -> u64 {
        self.inner.load(Ordering::SeqCst)
    }

    /// Set the total back to zero.
    pub fn reset(&self) {
        self.inner.store(0, Ordering::SeqCst);
    }
}
