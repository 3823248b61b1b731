//! Cache entries and lookup results.

use std::time::{Duration, Instant};

/// Longest lifetime an entry can be given (one year).
pub const MAX_LIFETIME: Duration = Duration::from_secs(365 * 24 * 60 * 60);

/// A stored value with its absolute expiration deadline.
///
/// Entries are never updated in place; storing under the same key replaces
/// the entry wholesale.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// Cached value.
    pub value: V,

    /// The entry is visible strictly before this instant.
    pub expires_at: Instant,
}

impl<V> CacheEntry<V> {
    /// Create an entry that expires `ttl` from now.
    ///
    /// Lifetimes too large to represent are capped at [`MAX_LIFETIME`].
    pub fn new(value: V, ttl: Duration) -> Self {
        let now = Instant::now();
        let expires_at = now.checked_add(ttl.min(MAX_LIFETIME)).unwrap_or(now);
        Self { value, expires_at }
    }

    /// Whether the entry is still visible at `now`.
    pub fn is_live_at(&self, now: Instant) -> bool {
        now < self.expires_at
    }

    /// Whether the entry has expired.
    pub fn is_expired(&self) -> bool {
        !self.is_live_at(Instant::now())
    }

    /// Time left before expiry, zero once expired.
    pub fn remaining(&self) -> Duration {
        self.expires_at.saturating_duration_since(Instant::now())
    }
}

/// Result of a cache lookup.
///
/// A stored value is a hit regardless of its content: an empty list, zero,
/// or `false` are all returned as [`Lookup::Present`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup<V> {
    /// Key present and unexpired.
    Present(V),
    /// Key was present but its deadline has passed.
    Expired,
    /// Key was never stored or has been removed.
    Absent,
}

impl<V> Lookup<V> {
    /// Whether this lookup found a live value.
    pub fn is_hit(&self) -> bool {
        matches!(self, Lookup::Present(_))
    }

    /// Convert into the live value, if any.
    pub fn into_option(self) -> Option<V> {
        match self {
            Lookup::Present(value) => Some(value),
            Lookup::Expired | Lookup::Absent => None,
        }
    }
}
