//! Brawlers command - brawler catalog.

use anyhow::Result;
use clap::{Args, Subcommand};
use console::Style;

use super::{Context, PageArgs, print_header, print_json};

/// Arguments for the brawlers command.
#[derive(Args, Debug)]
pub struct BrawlersArgs {
    #[command(subcommand)]
    pub command: BrawlersCommand,
}

#[derive(Subcommand, Debug)]
pub enum BrawlersCommand {
    /// List all brawlers
    List {
        #[command(flatten)]
        page: PageArgs,
    },

    /// Show one brawler
    Show {
        /// Brawler ID
        id: u64,
    },
}

/// Run the brawlers command.
pub async fn run(args: BrawlersArgs, ctx: &Context) -> Result<()> {
    let client = ctx.client()?;
    let dim = Style::new().dim();

    match args.command {
        BrawlersCommand::List { page } => {
            let list = client.brawlers().list(page.into()).await?;
            if ctx.json_output {
                return print_json(&list);
            }

            print_header("Brawlers");
            for brawler in &list.items {
                println!("{:<16} {}", brawler.name, dim.apply_to(brawler.id));
            }
        }
        BrawlersCommand::Show { id } => {
            let brawler = client.brawlers().get(id).await?;
            if ctx.json_output {
                return print_json(&brawler);
            }

            print_header(&brawler.name);
            println!("Star powers:");
            for item in &brawler.star_powers {
                println!("  {}", item.name);
            }
            println!("Gadgets:");
            for item in &brawler.gadgets {
                println!("  {}", item.name);
            }
        }
    }

    Ok(())
}
