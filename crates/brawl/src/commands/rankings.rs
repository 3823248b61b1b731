//! Rankings command - leaderboards.

use anyhow::Result;
use clap::{Args, Subcommand};
use console::Style;

use super::{Context, PageArgs, print_cursors, print_header, print_json};

/// Arguments for the rankings command.
#[derive(Args, Debug)]
pub struct RankingsArgs {
    /// Country code, or `global`
    #[arg(short, long, default_value = "global", global = true)]
    pub country: String,

    #[command(subcommand)]
    pub command: RankingsCommand,
}

#[derive(Subcommand, Debug)]
pub enum RankingsCommand {
    /// Top players by trophies
    Players {
        #[command(flatten)]
        page: PageArgs,
    },

    /// Top clubs by trophies
    Clubs {
        #[command(flatten)]
        page: PageArgs,
    },

    /// Top players for one brawler
    Brawler {
        /// Brawler ID, e.g. 16000000
        id: u64,

        #[command(flatten)]
        page: PageArgs,
    },
}

/// Run the rankings command.
pub async fn run(args: RankingsArgs, ctx: &Context) -> Result<()> {
    let client = ctx.client()?;
    let rankings = client.rankings();
    let dim = Style::new().dim();

    match args.command {
        RankingsCommand::Players { page } => {
            let list = rankings.players(&args.country, page.into()).await?;
            if ctx.json_output {
                return print_json(&list);
            }

            print_header(&format!("Top players ({})", args.country));
            for entry in &list.items {
                let club = entry.club.as_ref().map(|c| c.name.as_str()).unwrap_or("");
                println!(
                    "{:>4}. {:<20} {:>6} {}",
                    entry.rank,
                    entry.name,
                    entry.trophies,
                    dim.apply_to(club)
                );
            }
            print_cursors(&list.paging.cursors);
        }
        RankingsCommand::Clubs { page } => {
            let list = rankings.clubs(&args.country, page.into()).await?;
            if ctx.json_output {
                return print_json(&list);
            }

            print_header(&format!("Top clubs ({})", args.country));
            for entry in &list.items {
                println!(
                    "{:>4}. {:<20} {:>8} {}",
                    entry.rank,
                    entry.name,
                    entry.trophies,
                    dim.apply_to(format!("{} members", entry.member_count))
                );
            }
            print_cursors(&list.paging.cursors);
        }
        RankingsCommand::Brawler { id, page } => {
            let list = rankings.brawlers(&args.country, id, page.into()).await?;
            if ctx.json_output {
                return print_json(&list);
            }

            let title = format!("Top players for brawler {} ({})", id, args.country);
            print_header(&title);
            for entry in &list.items {
                println!(
                    "{:>4}. {:<20} {:>6}",
                    entry.rank, entry.name, entry.trophies
                );
            }
            print_cursors(&list.paging.cursors);
        }
    }

    Ok(())
}
