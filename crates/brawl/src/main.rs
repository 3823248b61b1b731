//! brawl - browse the Brawl Stars API from the terminal
//!
//! Main entry point for the brawl CLI.

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;

use commands::{brawlers, clubs, events, players, rankings};

// ─────────────────────────────────────────────────────────────────────────────
// CLI Structure
// ─────────────────────────────────────────────────────────────────────────────

/// brawl - browse the Brawl Stars API from the terminal
#[derive(Parser)]
#[command(name = "brawl")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output (debug logging, cache activity)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output as JSON (for scripting)
    #[arg(long, global = true)]
    pub json: bool,

    /// API token
    #[arg(long, global = true, env = "BRAWL_API_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// API base URL (default: https://api.brawlstars.com/v1)
    #[arg(long, global = true, env = "BRAWL_API_URL")]
    pub base_url: Option<String>,

    /// Disable response caching
    #[arg(long, global = true)]
    pub no_cache: bool,

    /// Upper bound in seconds for how long a response is cached
    #[arg(long, global = true, value_name = "SECS")]
    pub max_ttl: Option<u64>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Player profiles and battle logs
    Player(players::PlayerArgs),

    /// Club profiles and members
    Club(clubs::ClubArgs),

    /// Player, club and brawler leaderboards
    Rankings(rankings::RankingsArgs),

    /// Brawler catalog
    Brawlers(brawlers::BrawlersArgs),

    /// Current event rotation
    Events(events::EventsArgs),
}

// ─────────────────────────────────────────────────────────────────────────────
// Main
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "brawl=debug,brawl_client=debug,brawl_cache=debug,info"
    } else {
        "warn"
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let ctx = commands::Context {
        token: cli.token,
        base_url: cli.base_url,
        no_cache: cli.no_cache,
        max_ttl: cli.max_ttl,
        json_output: cli.json,
        verbose: cli.verbose,
    };

    match cli.command {
        Commands::Player(args) => players::run(args, &ctx).await,
        Commands::Club(args) => clubs::run(args, &ctx).await,
        Commands::Rankings(args) => rankings::run(args, &ctx).await,
        Commands::Brawlers(args) => brawlers::run(args, &ctx).await,
        Commands::Events(args) => events::run(args, &ctx).await,
    }
}
