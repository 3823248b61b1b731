//! Cached HTTP client for the Brawl Stars API.
//!
//! All requests pass through one cached fetch path: the request key is
//! built from the base URL, the resource path and the sorted query
//! parameters; a fresh cached response is returned without touching the
//! network; otherwise a single authenticated GET is made and the response
//! is cached for as long as its `Cache-Control: max-age` allows.
//!
//! # Example
//!
//! ```no_run
//! use brawl_client::{BrawlClient, PageQuery, Result};
//!
//! # async fn example() -> Result<()> {
//! let client = BrawlClient::builder()
//!     .token("secret")
//!     .build()?;
//!
//! let player = client.players().get("#2Q0VVCJ2").await?;
//! println!("3v3 wins: {}", player.three_vs_three_victories);
//!
//! let top = client.rankings().players("global", PageQuery::new().limit(10)).await?;
//! for entry in top.items {
//!     println!("{:>3}. {} ({})", entry.rank, entry.name, entry.trophies);
//! }
//!
//! // Second call within the max-age window is served from cache
//! let again = client.players().get("#2Q0VVCJ2").await?;
//! assert_eq!(again.tag, player.tag);
//! # Ok(())
//! # }
//! ```
//!
//! # API Coverage
//!
//! - **Players**: profile, battle log
//! - **Clubs**: profile, members
//! - **Rankings**: players, clubs, per-brawler
//! - **Brawlers**: catalog, single brawler
//! - **Events**: current rotation

pub mod api;
pub mod client;
pub mod error;
pub mod freshness;
pub mod query;
pub mod tag;
pub mod types;

pub use brawl_cache::{CacheConfig, TtlCache};
pub use client::{BrawlClient, ClientBuilder, DEFAULT_BASE_URL};
pub use error::{Error, Result};
pub use freshness::{FreshnessFn, max_age_ttl};
pub use query::{PageQuery, QueryParams};
pub use tag::clean_tag;
pub use types::*;
