//! Events command - current event rotation.

use anyhow::Result;
use clap::Args;
use console::Style;

use super::{Context, print_header, print_json};

/// Arguments for the events command.
#[derive(Args, Debug)]
pub struct EventsArgs {}

/// Run the events command.
pub async fn run(_args: EventsArgs, ctx: &Context) -> Result<()> {
    let client = ctx.client()?;
    let rotation = client.events().rotation().await?;

    if ctx.json_output {
        return print_json(&rotation);
    }

    let dim = Style::new().dim();
    print_header("Event Rotation");
    for slot in &rotation {
        println!(
            "{:<14} {:<24} {}",
            slot.event.mode,
            slot.event.map.as_deref().unwrap_or(""),
            dim.apply_to(format!("until {}", slot.end_time))
        );
    }

    Ok(())
}
