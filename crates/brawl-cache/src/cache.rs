//! Thread-safe cache keyed by string with per-entry expiration.

use std::collections::HashMap;
use std::sync::{Arc, Weak};
use std::time::{Duration, Instant};

use parking_lot::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, trace};

use crate::entry::{CacheEntry, Lookup};

type Store<V> = RwLock<HashMap<String, CacheEntry<V>>>;

/// In-memory cache where every entry expires independently.
///
/// Cloning is cheap and yields a handle to the same storage, so one cache
/// can be shared by concurrent tasks. Reads take a shared lock; writes and
/// lazy removal of expired entries take the exclusive lock. For a single
/// key the last completed [`set`](Self::set) wins.
pub struct TtlCache<V> {
    inner: Arc<Store<V>>,
}

impl<V: Clone> TtlCache<V> {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Look up a key, distinguishing live, expired and missing entries.
    ///
    /// An expired entry found here is removed.
    pub fn lookup(&self, key: &str) -> Lookup<V> {
        {
            let store = self.inner.read();
            match store.get(key) {
                None => return Lookup::Absent,
                Some(entry) if entry.is_live_at(Instant::now()) => {
                    trace!(key = %key, "Cache hit");
                    return Lookup::Present(entry.value.clone());
                }
                Some(_) => {}
            }
        }

        // Re-check under the write lock: a concurrent set may have replaced
        // the stale entry since the read lock was released.
        let mut store = self.inner.write();
        let now = Instant::now();
        match store.get(key).map(|entry| entry.is_live_at(now)) {
            None => Lookup::Absent,
            Some(true) => store
                .get(key)
                .map_or(Lookup::Absent, |entry| Lookup::Present(entry.value.clone())),
            Some(false) => {
                store.remove(key);
                debug!(key = %key, "Cache entry expired, removed");
                Lookup::Expired
            }
        }
    }

    /// Get a live value.
    pub fn get(&self, key: &str) -> Option<V> {
        self.lookup(key).into_option()
    }

    /// Whether a live value is stored under `key`.
    ///
    /// Unlike [`lookup`](Self::lookup) this never removes anything.
    pub fn contains(&self, key: &str) -> bool {
        self.inner
            .read()
            .get(key)
            .is_some_and(|entry| entry.is_live_at(Instant::now()))
    }

    /// Store a value for `ttl`, replacing any existing entry for the key.
    ///
    /// A zero `ttl` stores an entry that is already expired.
    pub fn set(&self, key: impl Into<String>, value: V, ttl: Duration) {
        let key = key.into();
        trace!(key = %key, ttl_secs = ttl.as_secs(), "Cache set");
        self.inner.write().insert(key, CacheEntry::new(value, ttl));
    }

    /// Remove one key. Returns whether an entry (live or expired) was removed.
    pub fn clear(&self, key: &str) -> bool {
        self.inner.write().remove(key).is_some()
    }

    /// Remove every entry.
    pub fn clear_all(&self) {
        let mut store = self.inner.write();
        let count = store.len();
        store.clear();
        debug!(count = count, "Cache cleared");
    }

    /// Remove all expired entries and return how many were dropped.
    pub fn sweep_expired(&self) -> usize {
        sweep(&self.inner)
    }

    /// Number of stored entries, including expired ones not yet swept.
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Whether nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Keys of all live entries.
    pub fn keys(&self) -> Vec<String> {
        let now = Instant::now();
        self.inner
            .read()
            .iter()
            .filter(|(_, entry)| entry.is_live_at(now))
            .map(|(key, _)| key.clone())
            .collect()
    }
}

impl<V: Clone + Send + Sync + 'static> TtlCache<V> {
    /// Start a background task that sweeps expired entries every `interval`.
    ///
    /// The task holds only a weak reference and exits on the first tick
    /// after the last cache handle is dropped. Must be called from within a
    /// tokio runtime.
    pub fn spawn_sweeper(&self, interval: Duration) -> JoinHandle<()> {
        let weak: Weak<Store<V>> = Arc::downgrade(&self.inner);
        let period = interval.max(Duration::from_millis(1));

        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            // The first tick completes immediately.
            ticker.tick().await;

            loop {
                ticker.tick().await;
                let Some(store) = weak.upgrade() else {
                    debug!("Cache dropped, stopping sweeper");
                    break;
                };
                sweep(&store);
            }
        })
    }
}

fn sweep<V>(store: &Store<V>) -> usize {
    let now = Instant::now();
    let mut store = store.write();
    let before = store.len();
    store.retain(|_, entry| entry.is_live_at(now));
    let count = before - store.len();

    if count > 0 {
        debug!(count = count, "Swept expired cache entries");
    }

    count
}

impl<V> Clone for TtlCache<V> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<V: Clone> Default for TtlCache<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> std::fmt::Debug for TtlCache<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TtlCache")
            .field("entries", &self.inner.read().len())
            .finish()
    }
}
