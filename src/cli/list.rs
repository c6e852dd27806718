//! List command implementation.
//!
//! Loads the registry and custom maps and prints them grouped by game mode.

use clap::Args;

use crate::catalog::MapCatalog;
use crate::error::Result;
use crate::output::{plural, Printer};

use super::context::Context;

/// List all registry and custom maps by game mode
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only list maps supporting this game mode
    #[arg(long, short = 'm')]
    pub mode: Option<String>,

    /// Skip the custom maps directory
    #[arg(long)]
    pub no_custom: bool,
}

pub fn run(args: ListArgs, context: &Context, printer: &Printer) -> Result<()> {
    let registry = context.manifest.registry_path();
    printer.status("Loading", &registry.display().to_string());

    let mut catalog = MapCatalog::new();
    catalog.load_registry_file(&registry, &context.options)?;

    if !args.no_custom {
        let custom = context.manifest.custom_maps_path();
        if custom.is_dir() {
            printer.status("Scanning", &custom.display().to_string());
            catalog.load_custom_maps(&custom);
        }
    }

    let modes: Vec<String> = match &args.mode {
        Some(mode) => vec![mode.clone()],
        None => catalog.game_modes().into_iter().map(str::to_string).collect(),
    };

    for mode in &modes {
        let maps: Vec<_> = catalog.maps_for_game_mode(mode).collect();
        if maps.is_empty() {
            continue;
        }
        printer.info(mode, &plural(maps.len(), "map", "maps"));
        for map in maps {
            println!("  {}", printer.map_summary(map));
        }
    }

    for failure in catalog.failures() {
        printer.warning("Skipped", &format!("{}: {}", failure.path, failure.reason));
    }

    printer.status(
        "Finished",
        &format!(
            "{}, {}",
            plural(catalog.len(), "map", "maps"),
            plural(catalog.failures().len(), "failure", "failures")
        ),
    );

    Ok(())
}
