//! Club command - club profiles and members.

use anyhow::Result;
use clap::{Args, Subcommand};
use console::Style;

use super::{Context, PageArgs, print_cursors, print_header, print_json};

/// Arguments for the club command.
#[derive(Args, Debug)]
pub struct ClubArgs {
    #[command(subcommand)]
    pub command: ClubCommand,
}

#[derive(Subcommand, Debug)]
pub enum ClubCommand {
    /// Show a club profile
    Show {
        /// Club tag
        tag: String,
    },

    /// List club members
    Members {
        /// Club tag
        tag: String,

        #[command(flatten)]
        page: PageArgs,
    },
}

/// Run the club command.
pub async fn run(args: ClubArgs, ctx: &Context) -> Result<()> {
    let client = ctx.client()?;
    let dim = Style::new().dim();

    match args.command {
        ClubCommand::Show { tag } => {
            let club = client.clubs().get(&tag).await?;
            if ctx.json_output {
                return print_json(&club);
            }

            print_header(&format!("{} {}", club.name, dim.apply_to(&club.tag)));
            if let Some(description) = &club.description {
                println!("{}", description);
                println!();
            }
            println!("Trophies:  {}", club.trophies);
            println!("Required:  {}", club.required_trophies);
            println!("Type:      {}", club.club_type.as_deref().unwrap_or("-"));
            println!("Members:   {}", club.members.len());
        }
        ClubCommand::Members { tag, page } => {
            let members = client.clubs().members(&tag, page.into()).await?;
            if ctx.json_output {
                return print_json(&members);
            }

            print_header("Members");
            for member in &members.items {
                println!(
                    "{:<20} {:>6} {}",
                    member.name,
                    member.trophies,
                    dim.apply_to(&member.role)
                );
            }
            print_cursors(&members.paging.cursors);
        }
    }

    Ok(())
}
