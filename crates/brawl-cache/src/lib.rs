//! In-memory cache with per-entry expiration.
//!
//! Each entry carries its own absolute deadline, set when the value is
//! stored. An entry is visible only while the current time is strictly
//! before that deadline. Expired entries are dropped lazily on lookup, by an
//! explicit [`TtlCache::sweep_expired`] call, or by the optional background
//! sweeper.
//!
//! There is no capacity bound and no LRU ordering: entries leave the cache
//! only through expiry or explicit invalidation.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use brawl_cache::{Lookup, TtlCache};
//!
//! let cache = TtlCache::new();
//! cache.set("players/#2Q0VVCJ2", vec![1, 2, 3], Duration::from_secs(60));
//!
//! assert_eq!(cache.get("players/#2Q0VVCJ2"), Some(vec![1, 2, 3]));
//! assert!(matches!(cache.lookup("clubs/#ABC"), Lookup::Absent));
//! ```

mod cache;
mod config;
mod entry;

pub use cache::TtlCache;
pub use config::CacheConfig;
pub use entry::{CacheEntry, Lookup, MAX_LIFETIME};
