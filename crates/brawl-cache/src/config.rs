//! Configuration for the response cache.

use std::time::Duration;

/// Configuration for the response cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Whether responses are cached at all.
    pub enabled: bool,

    /// Interval for the background sweeper.
    /// With `None`, expired entries are only dropped when they are looked up.
    pub check_interval: Option<Duration>,

    /// Upper bound for the lifetime of a single entry.
    /// Server supplied lifetimes longer than this are clamped.
    pub max_ttl: Option<Duration>,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            check_interval: None,
            max_ttl: None,
        }
    }
}

impl CacheConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration with caching turned off.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    /// Enable or disable caching.
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Run a background sweep of expired entries at this interval.
    pub fn with_check_interval(mut self, interval: Duration) -> Self {
        self.check_interval = Some(interval);
        self
    }

    /// Cap entry lifetimes at `max`.
    pub fn with_max_ttl(mut self, max: Duration) -> Self {
        self.max_ttl = Some(max);
        self
    }

    /// Apply the configured upper bound to a lifetime.
    pub fn clamp_ttl(&self, ttl: Duration) -> Duration {
        match self.max_ttl {
            Some(max) => ttl.min(max),
            None => ttl,
        }
    }
}
