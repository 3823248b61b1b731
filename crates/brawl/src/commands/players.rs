//! Player command - profiles and battle logs.

use anyhow::Result;
use clap::{Args, Subcommand};
use console::{Style, style};

use super::{Context, print_header, print_json};

/// Arguments for the player command.
#[derive(Args, Debug)]
pub struct PlayerArgs {
    #[command(subcommand)]
    pub command: PlayerCommand,
}

#[derive(Subcommand, Debug)]
pub enum PlayerCommand {
    /// Show a player profile
    Show {
        /// Player tag, e.g. #2Q0VVCJ2
        tag: String,
    },

    /// Show a player's recent battles
    Battles {
        /// Player tag
        tag: String,
    },
}

/// Run the player command.
pub async fn run(args: PlayerArgs, ctx: &Context) -> Result<()> {
    let client = ctx.client()?;
    let dim = Style::new().dim();

    match args.command {
        PlayerCommand::Show { tag } => {
            let player = client.players().get(&tag).await?;
            if ctx.json_output {
                return print_json(&player);
            }

            print_header(&format!("{} {}", player.name, dim.apply_to(&player.tag)));
            println!(
                "Trophies:      {} (best {})",
                player.trophies, player.highest_trophies
            );
            println!("Level:         {}", player.exp_level);
            println!("3v3 victories: {}", player.three_vs_three_victories);
            println!(
                "Solo / Duo:    {} / {}",
                player.solo_victories, player.duo_victories
            );
            match player.club.as_ref().and_then(|c| c.name.as_deref()) {
                Some(name) => println!("Club:          {}", name),
                None => println!("Club:          {}", dim.apply_to("none")),
            }
            println!("Brawlers:      {}", player.brawlers.len());

            if ctx.verbose {
                println!();
                let mut brawlers = player.brawlers.clone();
                brawlers.sort_by(|a, b| b.trophies.cmp(&a.trophies));
                for brawler in brawlers {
                    println!(
                        "  {:<16} {:>5} {}",
                        brawler.name,
                        brawler.trophies,
                        dim.apply_to(format!("power {}", brawler.power))
                    );
                }
            }
        }
        PlayerCommand::Battles { tag } => {
            let log = client.players().battle_log(&tag).await?;
            if ctx.json_output {
                return print_json(&log);
            }

            print_header("Battle Log");
            if log.items.is_empty() {
                println!("{}", dim.apply_to("No recent battles"));
            }
            for entry in &log.items {
                let mode = entry
                    .event
                    .mode
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| "unknown".to_string());
                let result = entry.battle["result"].as_str().unwrap_or("-");
                println!(
                    "{} {:<14} {:<20} {}",
                    dim.apply_to(&entry.battle_time),
                    mode,
                    entry.event.map.as_deref().unwrap_or(""),
                    style(result).bold()
                );
            }
        }
    }

    Ok(())
}
