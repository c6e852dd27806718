//! Preview command implementation.

use std::path::PathBuf;

use clap::Args;

use crate::error::Result;
use crate::output::Printer;
use crate::preview::{load_preview_image, render_start_markers, write_png};

use super::context::Context;

/// Render a map preview with starting locations
#[derive(Args, Debug)]
pub struct PreviewArgs {
    /// Registry base path (e.g. Maps\Multiplayer\island) or .map file
    pub map: String,

    /// Output PNG file
    #[arg(long, short = 'o')]
    pub output: PathBuf,

    /// Skip the starting location markers
    #[arg(long)]
    pub no_markers: bool,
}

pub fn run(args: PreviewArgs, context: &Context, printer: &Printer) -> Result<()> {
    let map = context.load_map(&args.map)?;
    let preview = match map.preview() {
        Some(img) => img.clone(),
        None => load_preview_image(&map, &context.options),
    };

    let img = if args.no_markers {
        preview
    } else {
        render_start_markers(&preview, map.starting_locations())
    };

    write_png(&img, &args.output)?;
    printer.status(
        "Rendered",
        &format!("{} ({}x{})", args.output.display(), img.width(), img.height()),
    );

    Ok(())
}
