use clap::Parser;
use miette::Result;
use mapinfo::cli::context::Context;
use mapinfo::cli::{completions, list, preview, show, spawn, Cli, Commands};
use mapinfo::logging::init_logging;
use mapinfo::output::Printer;

fn main() -> Result<()> {
    let Cli {
        config,
        game_path,
        verbose,
        command,
    } = Cli::parse();
    init_logging(verbose);

    let printer = Printer::new();
    let context = || Context::resolve(config.as_deref(), game_path.clone());

    match command {
        Commands::List(args) => list::run(args, &context()?, &printer)?,
        Commands::Show(args) => show::run(args, &context()?, &printer)?,
        Commands::Spawn(args) => spawn::run(args, &context()?, &printer)?,
        Commands::Preview(args) => preview::run(args, &context()?, &printer)?,
        Commands::Completions(args) => completions::run(args)?,
    }

    Ok(())
}
