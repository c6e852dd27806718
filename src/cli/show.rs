//! Show command implementation.

use clap::Args;

use crate::error::{MapError, Result};
use crate::output::Printer;
use crate::types::MapDescriptor;

use super::context::Context;

/// Show a single map descriptor
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Registry base path (e.g. Maps\Multiplayer\island) or .map file
    pub map: String,

    /// Print the descriptor as JSON on stdout
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: ShowArgs, context: &Context, printer: &Printer) -> Result<()> {
    let map = context.load_map(&args.map)?;

    if args.json {
        let json = serde_json::to_string_pretty(&map).map_err(|e| MapError::Parse {
            message: format!("Failed to serialize {}: {}", map.base_path(), e),
            help: None,
        })?;
        println!("{}", json);
        return Ok(());
    }

    print_details(&map, printer);
    Ok(())
}

fn print_details(map: &MapDescriptor, printer: &Printer) {
    println!("{}", printer.map_summary(map));

    if !map.author().is_empty() {
        println!("  Author:     {}", map.author());
    }
    println!("  Modes:      {}", map.game_modes().join(", "));
    println!("  Checksum:   {}", printer.dim(map.checksum()));

    if let Some(preview) = map.preview_path() {
        println!("  Preview:    {}", preview.display());
    }
    if let Some(credits) = map.credits() {
        println!("  Credits:    {}", credits);
    }
    if let Some(units) = map.unit_count() {
        println!("  Units:      {}", units);
    }

    for (index, location) in map.starting_locations().iter().enumerate() {
        println!("  Start {}:    ({}, {})", index + 1, location.x, location.y);
    }

    if let Some(coop) = map.coop_info() {
        println!("  Enemies:    {}", coop.enemy_house_count());
        for house in &coop.enemy_houses {
            println!(
                "    side {} colour {} start {}",
                house.side, house.color, house.starting_location
            );
        }
    }

    let forced = map.forced_options();
    for (key, value) in &forced.checkboxes {
        println!("  Forced:     {}={}", key, value);
    }
    for (key, value) in &forced.dropdowns {
        println!("  Forced:     {}={}", key, value);
    }

    if !map.briefing().is_empty() {
        println!();
        for line in map.briefing().lines() {
            println!("  {}", printer.dim(line));
        }
    }
}
