//! CLI command handlers.

pub mod brawlers;
pub mod clubs;
pub mod events;
pub mod players;
pub mod rankings;

use std::time::Duration;

use anyhow::{Context as _, Result};
use brawl_client::{BrawlClient, CacheConfig, PageQuery};
use clap::Args;
use console::Style;
use serde::Serialize;
use tracing::debug;

/// Shared context for all commands.
#[derive(Debug, Clone)]
pub struct Context {
    /// API token, if given on the command line or in the environment.
    pub token: Option<String>,
    /// Base URL override.
    pub base_url: Option<String>,
    /// Disable response caching.
    pub no_cache: bool,
    /// Upper bound for cached response lifetimes, in seconds.
    pub max_ttl: Option<u64>,
    /// Output as JSON for scripting.
    pub json_output: bool,
    /// Verbose output enabled.
    pub verbose: bool,
}

impl Context {
    /// Build an API client from the global options.
    pub fn client(&self) -> Result<BrawlClient> {
        let token = self
            .token
            .clone()
            .context("No API token: pass --token or set BRAWL_API_TOKEN")?;

        let mut cache = CacheConfig::new().with_enabled(!self.no_cache);
        if let Some(secs) = self.max_ttl {
            cache = cache.with_max_ttl(Duration::from_secs(secs));
        }

        debug!(
            base_url = ?self.base_url,
            cache_enabled = cache.enabled,
            max_ttl_secs = ?self.max_ttl,
            "Building API client"
        );

        let mut builder = BrawlClient::builder().token(token).cache_config(cache);
        if let Some(url) = &self.base_url {
            builder = builder.base_url(url.clone());
        }
        Ok(builder.build()?)
    }
}

/// Cursor paging options shared by list commands.
#[derive(Args, Debug, Clone, Default)]
pub struct PageArgs {
    /// Maximum number of items
    #[arg(short, long)]
    pub limit: Option<u32>,

    /// Return items before this cursor
    #[arg(long)]
    pub before: Option<String>,

    /// Return items after this cursor
    #[arg(long)]
    pub after: Option<String>,
}

impl From<PageArgs> for PageQuery {
    fn from(args: PageArgs) -> Self {
        PageQuery {
            before: args.before,
            after: args.after,
            limit: args.limit,
        }
    }
}

/// Print a value as pretty JSON.
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print a section header.
pub fn print_header(title: &str) {
    let dim = Style::new().dim();
    println!("{}", Style::new().bold().apply_to(title));
    println!("{}", dim.apply_to("─".repeat(50)));
}

/// Print paging cursors when more pages exist.
pub fn print_cursors(cursors: &brawl_client::Cursors) {
    let dim = Style::new().dim();
    if let Some(before) = &cursors.before {
        let hint = format!("previous page: --before {}", before);
        println!("{}", dim.apply_to(hint));
    }
    if let Some(after) = &cursors.after {
        let hint = format!("next page: --after {}", after);
        println!("{}", dim.apply_to(hint));
    }
}
