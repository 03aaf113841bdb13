//! Lazy derived-value cache
//!
//! Every shape owns raw geometric parameters plus a block of derived
//! properties (vertices, area, AABB, ...) that is expensive enough to be
//! worth caching between mutations. [`Cached`] is the shared contract:
//! mutators call [`invalidate`](Cached::invalidate), derived getters go
//! through [`get_or_refresh`](Cached::get_or_refresh), and the rebuild
//! closure recomputes every derived field in dependency order.
//!
//! The cache starts stale, so a freshly constructed shape computes its
//! derived block on first read.

/// A lazily recomputed block of derived values
///
/// `Cached<T>` is `None` while stale. The refresh counter is observable so
/// tests can assert that a rebuild runs exactly once per stale period.
#[derive(Clone, Debug)]
pub struct Cached<T> {
    value: Option<T>,
    refreshes: u64,
}

impl<T> Cached<T> {
    /// Create a new, stale cache
    pub fn new() -> Self {
        Self {
            value: None,
            refreshes: 0,
        }
    }

    /// Mark the cached value stale
    ///
    /// Every mutator of raw shape state must call this before returning.
    #[inline]
    pub fn invalidate(&mut self) {
        self.value = None;
    }

    /// True when the next read will trigger a rebuild
    #[inline]
    pub fn is_stale(&self) -> bool {
        self.value.is_none()
    }

    /// Get the cached value, rebuilding it first if stale
    ///
    /// `rebuild` runs at most once per stale period; repeated reads between
    /// mutations return the same stored value.
    pub fn get_or_refresh(&mut self, rebuild: impl FnOnce() -> T) -> &T {
        if self.value.is_none() {
            self.value = Some(rebuild());
            self.refreshes += 1;
        }
        // The branch above guarantees the value is present
        match &self.value {
            Some(value) => value,
            None => unreachable!(),
        }
    }

    /// Number of rebuilds performed over this cache's lifetime
    ///
    /// Diagnostic accessor; shapes expose it so tests can verify the
    /// dirty/clean invariant without instrumenting the rebuild itself.
    #[inline]
    pub fn refresh_count(&self) -> u64 {
        self.refreshes
    }
}

impl<T> Default for Cached<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_stale() {
        let cache: Cached<i32> = Cached::new();
        assert!(cache.is_stale());
        assert_eq!(cache.refresh_count(), 0);
    }

    #[test]
    fn test_refresh_runs_once_per_stale_period() {
        let mut cache = Cached::new();
        assert_eq!(*cache.get_or_refresh(|| 42), 42);
        assert_eq!(*cache.get_or_refresh(|| panic!("must not rebuild")), 42);
        assert_eq!(cache.refresh_count(), 1);
    }

    #[test]
    fn test_invalidate_triggers_rebuild() {
        let mut cache = Cached::new();
        assert_eq!(*cache.get_or_refresh(|| 1), 1);

        cache.invalidate();
        assert!(cache.is_stale());
        assert_eq!(*cache.get_or_refresh(|| 2), 2);
        assert_eq!(cache.refresh_count(), 2);
    }

    #[test]
    fn test_repeated_invalidate_is_idempotent() {
        let mut cache = Cached::new();
        cache.get_or_refresh(|| 7);
        cache.invalidate();
        cache.invalidate();
        assert_eq!(*cache.get_or_refresh(|| 8), 8);
        assert_eq!(cache.refresh_count(), 2);
    }
}
