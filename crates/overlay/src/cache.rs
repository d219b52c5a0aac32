use serde::Serialize;
use std::{
    collections::BTreeMap,
    sync::{
        Arc, RwLock,
        atomic::{AtomicUsize, Ordering},
    },
};

///
/// ResolverCache
///
/// Type-keyed resolution cache. Populated lazily with insert-if-absent
/// semantics; entries are never updated or evicted. Concurrent first-touch
/// on the same key may compute the value redundantly and only the first
/// inserted entry is retained. Resolved values are pure functions of the
/// key, so losing the race is harmless.
///

pub(crate) struct ResolverCache<K, V> {
    entries: RwLock<BTreeMap<K, Arc<V>>>,
    hits: AtomicUsize,
    misses: AtomicUsize,
}

impl<K, V> Default for ResolverCache<K, V> {
    fn default() -> Self {
        Self {
            entries: RwLock::new(BTreeMap::new()),
            hits: AtomicUsize::new(0),
            misses: AtomicUsize::new(0),
        }
    }
}

impl<K: Ord + Copy, V> ResolverCache<K, V> {
    pub fn get_or_resolve(&self, key: K, resolve: impl FnOnce() -> V) -> Arc<V> {
        if let Some(found) = self
            .entries
            .read()
            .expect("resolver cache lock poisoned")
            .get(&key)
        {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return Arc::clone(found);
        }
        self.misses.fetch_add(1, Ordering::Relaxed);

        // Resolve outside the write lock; a losing racer drops its copy.
        let resolved = Arc::new(resolve());
        let mut entries = self.entries.write().expect("resolver cache lock poisoned");

        Arc::clone(entries.entry(key).or_insert(resolved))
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            size: self
                .entries
                .read()
                .expect("resolver cache lock poisoned")
                .len(),
        }
    }
}

///
/// CacheStats
///

// Counters are best-effort only.
// Relaxed atomics are sufficient because stats are not used for correctness.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct CacheStats {
    pub hits: usize,
    pub misses: usize,
    pub size: usize,
}

///
/// CacheReport
///
/// Point-in-time view of both engine caches.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct CacheReport {
    pub pairs: CacheStats,
    pub policies: CacheStats,
}

///
/// TESTS
///
