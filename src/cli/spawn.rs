//! Spawn command implementation.
//!
//! Writes the spawn configuration for a map to a file, or to stdout.

use std::path::PathBuf;

use clap::Args;

use crate::error::Result;
use crate::output::{plural, Printer};
use crate::spawn::{generate_spawn_ini, SpawnParams};

use super::context::Context;

/// Generate a spawn configuration for a map
#[derive(Args, Debug)]
pub struct SpawnArgs {
    /// Registry base path (e.g. Maps\Multiplayer\island) or .map file
    pub map: String,

    /// Total number of players in the game
    #[arg(long, short = 'p')]
    pub players: i32,

    /// Number of AI players
    #[arg(long, default_value_t = 0)]
    pub ai: i32,

    /// AI difficulty, used as the enemy house handicap
    #[arg(long, short = 'd', default_value_t = 0)]
    pub difficulty: i32,

    /// Output file (default: stdout)
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}

pub fn run(args: SpawnArgs, context: &Context, printer: &Printer) -> Result<()> {
    let map = context.load_map(&args.map)?;
    let params = SpawnParams::new(args.players, args.ai, args.difficulty);
    let spawn = generate_spawn_ini(&map, &params)?;

    match &args.output {
        Some(path) => {
            spawn.save(path)?;
            let houses = map.coop_info().map_or(0, |coop| coop.enemy_house_count());
            printer.status(
                "Generated",
                &format!(
                    "{} ({})",
                    path.display(),
                    plural(houses, "enemy house", "enemy houses")
                ),
            );
        }
        None => print!("{}", spawn.to_ini_string()),
    }

    Ok(())
}
