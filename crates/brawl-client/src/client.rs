//! Main client implementation.

use std::sync::Arc;
use std::time::Duration;

use brawl_cache::{CacheConfig, Lookup, TtlCache};
use parking_lot::RwLock;
use reqwest::header::{ACCEPT, CACHE_CONTROL, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tokio::task::JoinHandle;
use tracing::{debug, warn};
use url::Url;

use crate::api::{BrawlersApi, ClubsApi, EventsApi, PlayersApi, RankingsApi};
use crate::error::{Error, Result};
use crate::freshness::{FreshnessFn, max_age_ttl};
use crate::query::{QueryParams, request_key};

/// Production API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.brawlstars.com/v1";

/// Environment variable holding the API token for [`BrawlClient::from_env`].
pub const TOKEN_ENV: &str = "BRAWL_API_TOKEN";

/// Environment variable overriding the base URL for [`BrawlClient::from_env`].
pub const BASE_URL_ENV: &str = "BRAWL_API_URL";

/// Default transport timeout for requests.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Brawl Stars API client.
///
/// Every request goes through [`fetch_resource`](Self::fetch_resource),
/// which answers from the response cache while an entry is fresh and
/// otherwise performs one authenticated GET. Responses are cached for as
/// long as their `Cache-Control: max-age` allows.
///
/// Clones share the HTTP connection pool, token and cache.
///
/// # Example
///
/// ```no_run
/// use brawl_client::BrawlClient;
///
/// # async fn example() -> brawl_client::Result<()> {
/// let client = BrawlClient::builder().token("secret").build()?;
///
/// let player = client.players().get("#2Q0VVCJ2").await?;
/// println!("{} has {} trophies", player.name, player.trophies);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct BrawlClient {
    /// Inner shared state.
    inner: Arc<ClientInner>,
}

/// Inner client state (shared across clones).
struct ClientInner {
    /// HTTP client.
    http: reqwest::Client,
    /// Base URL, without trailing slash.
    base_url: String,
    /// Bearer token; may be rotated at runtime.
    token: RwLock<String>,
    /// Response cache; `None` when caching is disabled.
    cache: Option<TtlCache<Value>>,
    /// Cache tuning.
    cache_config: CacheConfig,
    /// Maps `Cache-Control` to a lifetime in seconds.
    freshness: FreshnessFn,
    /// Background sweeper for a cache this client created.
    sweeper: Option<JoinHandle<()>>,
}

impl BrawlClient {
    /// Create a new client builder.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Create a client with default settings and the given token.
    pub fn new(token: impl Into<String>) -> Result<Self> {
        Self::builder().token(token).build()
    }

    /// Create a client from `BRAWL_API_TOKEN` and, if set, `BRAWL_API_URL`.
    pub fn from_env() -> Result<Self> {
        let token = std::env::var(TOKEN_ENV)
            .map_err(|_| Error::Config(format!("{} is not set", TOKEN_ENV)))?;

        let mut builder = Self::builder().token(token);
        if let Ok(base_url) = std::env::var(BASE_URL_ENV) {
            builder = builder.base_url(base_url);
        }
        builder.build()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    /// Replace the bearer token used for subsequent requests.
    pub fn set_token(&self, token: impl Into<String>) -> Result<()> {
        let token = token.into();
        validate_token(&token)?;
        *self.inner.token.write() = token;
        debug!("API token rotated");
        Ok(())
    }

    /// Whether responses are cached.
    pub fn cache_enabled(&self) -> bool {
        self.inner.cache.is_some()
    }

    /// The response cache, if caching is enabled.
    pub fn cache(&self) -> Option<&TtlCache<Value>> {
        self.inner.cache.as_ref()
    }

    /// Whether this client runs a background sweeper for its cache.
    pub fn sweeper_running(&self) -> bool {
        self.inner
            .sweeper
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    /// Number of live cached responses.
    pub fn cached_entries(&self) -> usize {
        self.inner
            .cache
            .as_ref()
            .map_or(0, |cache| cache.keys().len())
    }

    /// Drop the cached response for one request. Returns whether one was cached.
    pub fn invalidate(&self, path: &str, query: &QueryParams) -> bool {
        let key = self.request_key(path, query);
        self.inner
            .cache
            .as_ref()
            .is_some_and(|cache| cache.clear(&key))
    }

    /// Drop every cached response.
    pub fn clear_cache(&self) {
        if let Some(cache) = &self.inner.cache {
            cache.clear_all();
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // API accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Access the players API.
    pub fn players(&self) -> PlayersApi {
        PlayersApi::new(self.clone())
    }

    /// Access the clubs API.
    pub fn clubs(&self) -> ClubsApi {
        ClubsApi::new(self.clone())
    }

    /// Access the rankings API.
    pub fn rankings(&self) -> RankingsApi {
        RankingsApi::new(self.clone())
    }

    /// Access the brawlers API.
    pub fn brawlers(&self) -> BrawlersApi {
        BrawlersApi::new(self.clone())
    }

    /// Access the events API.
    pub fn events(&self) -> EventsApi {
        EventsApi::new(self.clone())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Cached fetch
    // ─────────────────────────────────────────────────────────────────────────

    /// Canonical key (and URL) for a request.
    pub fn request_key(&self, path: &str, query: &QueryParams) -> String {
        request_key(&self.inner.base_url, path, query)
    }

    /// Fetch a resource, serving it from cache while fresh.
    ///
    /// `path` is relative to the base URL and must already be
    /// percent-encoded. A non-success status fails with [`Error::Api`]
    /// without reading the body; a body that is not valid JSON, or does not
    /// decode as `T`, fails with [`Error::Decode`]. Nothing is cached on
    /// failure. Concurrent misses for the same key each hit the network.
    pub async fn fetch_resource<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &QueryParams,
    ) -> Result<T> {
        let key = self.request_key(path, query);

        if let Some(cache) = &self.inner.cache {
            match cache.lookup(&key) {
                Lookup::Present(value) => {
                    debug!(key = %key, "Serving cached response");
                    return Ok(T::deserialize(&value)?);
                }
                Lookup::Expired => debug!(key = %key, "Cached response expired"),
                Lookup::Absent => debug!(key = %key, "Cache miss"),
            }
        }

        let (value, ttl_secs) = self.fetch_uncached(&key).await?;
        let decoded = T::deserialize(&value)?;
        self.store(key, value, ttl_secs);
        Ok(decoded)
    }

    /// Fetch a resource as raw JSON.
    pub async fn fetch_value(&self, path: &str, query: &QueryParams) -> Result<Value> {
        self.fetch_resource(path, query).await
    }

    /// Fetch a resource that takes no query parameters.
    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.fetch_resource(path, &QueryParams::new()).await
    }

    /// Perform the GET and return the decoded body with its lifetime.
    async fn fetch_uncached(&self, url: &str) -> Result<(Value, u64)> {
        let token = self.inner.token.read().clone();
        let response = self.inner.http.get(url).bearer_auth(token).send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!(url = %url, status = status.as_u16(), "API request failed");
            return Err(Error::from_status(status));
        }

        let cache_control = response
            .headers()
            .get(CACHE_CONTROL)
            .and_then(|value| value.to_str().ok());
        let ttl_secs = (self.inner.freshness)(cache_control);

        let body = response.bytes().await?;
        let value: Value = serde_json::from_slice(&body)?;
        Ok((value, ttl_secs))
    }

    /// Cache a response if it has a positive lifetime.
    fn store(&self, key: String, value: Value, ttl_secs: u64) {
        let Some(cache) = &self.inner.cache else {
            return;
        };
        if ttl_secs == 0 {
            debug!(key = %key, "Response not cacheable");
            return;
        }

        let ttl = self
            .inner
            .cache_config
            .clamp_ttl(Duration::from_secs(ttl_secs));
        if ttl.is_zero() {
            return;
        }

        debug!(key = %key, ttl_secs = ttl.as_secs(), "Caching response");
        cache.set(key, value, ttl);
    }
}

impl std::fmt::Debug for BrawlClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BrawlClient")
            .field("base_url", &self.inner.base_url)
            .field("cache", &self.inner.cache)
            .finish_non_exhaustive()
    }
}

fn validate_token(token: &str) -> Result<()> {
    if token.trim().is_empty() {
        return Err(Error::Config("API token is required".to_string()));
    }
    HeaderValue::from_str(&format!("Bearer {}", token))
        .map_err(|_| Error::Config("Invalid API token".to_string()))?;
    Ok(())
}

/// Builder for creating a BrawlClient.
pub struct ClientBuilder {
    token: Option<String>,
    base_url: String,
    cache_config: CacheConfig,
    shared_cache: Option<TtlCache<Value>>,
    timeout: Duration,
    user_agent: Option<String>,
    freshness: FreshnessFn,
}

impl ClientBuilder {
    /// Create a new builder with defaults.
    pub fn new() -> Self {
        Self {
            token: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            cache_config: CacheConfig::default(),
            shared_cache: None,
            timeout: DEFAULT_TIMEOUT,
            user_agent: None,
            freshness: max_age_ttl,
        }
    }

    /// Set the API token.
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Override the base URL.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the cache configuration.
    pub fn cache_config(mut self, config: CacheConfig) -> Self {
        self.cache_config = config;
        self
    }

    /// Enable or disable response caching.
    pub fn cache_enabled(mut self, enabled: bool) -> Self {
        self.cache_config.enabled = enabled;
        self
    }

    /// Store responses in an existing cache shared with other clients.
    ///
    /// Without this every client gets its own cache. A shared cache is never
    /// swept by the client; its owner calls `sweep_expired` or
    /// `spawn_sweeper` once.
    pub fn shared_cache(mut self, cache: TtlCache<Value>) -> Self {
        self.shared_cache = Some(cache);
        self
    }

    /// Set the transport timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set a custom user agent.
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Replace the `Cache-Control` interpretation.
    pub fn freshness(mut self, freshness: FreshnessFn) -> Self {
        self.freshness = freshness;
        self
    }

    /// Build the client.
    ///
    /// Starts the background cache sweeper when a check interval is
    /// configured and a tokio runtime is running.
    pub fn build(self) -> Result<BrawlClient> {
        let token = self
            .token
            .ok_or_else(|| Error::Config("API token is required".to_string()))?;
        validate_token(&token)?;

        // Parse to validate; keys are built from the normalised string.
        let base_url = Url::parse(&self.base_url)?;
        let base_url = base_url.as_str().trim_end_matches('/').to_string();

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let user_agent = self
            .user_agent
            .unwrap_or_else(|| format!("brawl-client/{}", env!("CARGO_PKG_VERSION")));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(user_agent)
            .timeout(self.timeout)
            .build()?;

        let (cache, sweeper) = match (self.cache_config.enabled, self.shared_cache) {
            (false, _) => (None, None),
            (true, Some(shared)) => (Some(shared), None),
            (true, None) => {
                let cache = TtlCache::new();
                let sweeper = self
                    .cache_config
                    .check_interval
                    .and_then(|interval| start_sweeper(&cache, interval));
                (Some(cache), sweeper)
            }
        };

        Ok(BrawlClient {
            inner: Arc::new(ClientInner {
                http,
                base_url,
                token: RwLock::new(token),
                cache,
                cache_config: self.cache_config,
                freshness: self.freshness,
                sweeper,
            }),
        })
    }
}

fn start_sweeper(cache: &TtlCache<Value>, interval: Duration) -> Option<JoinHandle<()>> {
    if tokio::runtime::Handle::try_current().is_err() {
        warn!("No tokio runtime, cache sweeper not started");
        return None;
    }
    Some(cache.spawn_sweeper(interval))
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ClientBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientBuilder")
            .field("base_url", &self.base_url)
            .field("cache_config", &self.cache_config)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_requires_token() {
        let result = ClientBuilder::new().build();
        assert!(matches!(result, Err(Error::Config(_))));

        let result = ClientBuilder::new().token("  ").build();
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_builder_rejects_invalid_token() {
        let result = ClientBuilder::new().token("bad\ntoken").build();
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_builder_rejects_invalid_url() {
        let result = ClientBuilder::new()
            .token("secret")
            .base_url("not a url")
            .build();
        assert!(matches!(result, Err(Error::InvalidUrl(_))));
    }

    #[test]
    fn test_default_base_url() {
        let client = BrawlClient::new("secret").unwrap();
        assert_eq!(client.base_url(), DEFAULT_BASE_URL);
        assert!(client.cache_enabled());
    }

    #[test]
    fn test_base_url_trailing_slash_normalised() {
        let client = ClientBuilder::new()
            .token("secret")
            .base_url("http://localhost:8080/v1/")
            .build()
            .unwrap();

        assert_eq!(client.base_url(), "http://localhost:8080/v1");
        assert_eq!(
            client.request_key("/brawlers", &QueryParams::new()),
            "http://localhost:8080/v1/brawlers"
        );
    }

    #[test]
    fn test_cache_disabled() {
        let client = ClientBuilder::new()
            .token("secret")
            .cache_enabled(false)
            .build()
            .unwrap();

        assert!(!client.cache_enabled());
        assert!(client.cache().is_none());
        assert_eq!(client.cached_entries(), 0);
    }

    #[test]
    fn test_clients_do_not_share_cache_by_default() {
        let first = BrawlClient::new("token-a").unwrap();
        let second = BrawlClient::new("token-b").unwrap();

        first
            .cache()
            .unwrap()
            .set("key", Value::Bool(true), Duration::from_secs(60));

        assert_eq!(first.cached_entries(), 1);
        assert_eq!(second.cached_entries(), 0);
    }

    #[test]
    fn test_shared_cache() {
        let shared = TtlCache::new();
        let first = ClientBuilder::new()
            .token("token-a")
            .shared_cache(shared.clone())
            .build()
            .unwrap();
        let second = ClientBuilder::new()
            .token("token-b")
            .shared_cache(shared.clone())
            .build()
            .unwrap();

        shared.set("key", Value::Null, Duration::from_secs(60));
        assert_eq!(first.cached_entries(), 1);
        assert_eq!(second.cached_entries(), 1);
    }

    #[tokio::test]
    async fn test_sweeper_only_for_owned_cache() {
        let config = CacheConfig::new().with_check_interval(Duration::from_secs(60));
        let owned = ClientBuilder::new()
            .token("secret")
            .cache_config(config.clone())
            .build()
            .unwrap();
        assert!(owned.sweeper_running());

        let shared = TtlCache::new();
        let first = ClientBuilder::new()
            .token("token-a")
            .cache_config(config.clone())
            .shared_cache(shared.clone())
            .build()
            .unwrap();
        let second = ClientBuilder::new()
            .token("token-b")
            .cache_config(config)
            .shared_cache(shared)
            .build()
            .unwrap();
        assert!(!first.sweeper_running());
        assert!(!second.sweeper_running());
    }

    #[test]
    fn test_no_sweeper_without_runtime() {
        let config = CacheConfig::new().with_check_interval(Duration::from_secs(60));
        let client = ClientBuilder::new()
            .token("secret")
            .cache_config(config)
            .build()
            .unwrap();
        assert!(!client.sweeper_running());
        assert!(client.cache_enabled());
    }

    #[test]
    fn test_set_token_validates() {
        let client = BrawlClient::new("secret").unwrap();
        assert!(client.set_token("rotated").is_ok());
        assert!(client.set_token("").is_err());
    }

    #[test]
    fn test_invalidate() {
        let client = BrawlClient::new("secret").unwrap();
        let key = client.request_key("/brawlers", &QueryParams::new());
        client
            .cache()
            .unwrap()
            .set(key, Value::Array(Vec::new()), Duration::from_secs(60));

        assert!(client.invalidate("/brawlers", &QueryParams::new()));
        assert!(!client.invalidate("/brawlers", &QueryParams::new()));
    }
}
