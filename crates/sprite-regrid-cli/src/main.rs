use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::{ArgAction, Parser};
use image::ImageReader;
use sprite_regrid_core::config::{LayoutMode, SheetConfig};
use sprite_regrid_core::{regrid, to_json};
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "sprite-regrid",
    about = "Extract sprites from an irregular spritesheet and repack them into a uniform grid",
    version
)]
struct Cli {
    // Input/Output
    /// Input spritesheet image
    #[arg(help_heading = "Input/Output")]
    input: PathBuf,
    /// Output spritesheet image (format chosen from the extension)
    #[arg(help_heading = "Input/Output")]
    output: PathBuf,
    /// Write the JSON sheet map to this path
    #[arg(long, help_heading = "Input/Output")]
    map: Option<PathBuf>,

    // Layout
    /// Minimum bounding-box area (px) for a region to count as a sprite
    #[arg(long, default_value_t = 50, help_heading = "Layout")]
    min_area: u32,
    /// Sheet layout: grid | row
    #[arg(long, value_parser = ["grid", "row"], default_value = "grid", help_heading = "Layout")]
    layout: String,

    // Logging/UX
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = ArgAction::Count, help_heading = "Logging/UX")]
    verbose: u8,
    /// Quiet mode (overrides verbose)
    #[arg(short, long, default_value_t = false, help_heading = "Logging/UX")]
    quiet: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing_with_level(cli.quiet, cli.verbose);
    run(&cli)
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    if !cli.input.is_file() {
        anyhow::bail!("input file '{}' does not exist", cli.input.display());
    }

    let layout: LayoutMode = cli
        .layout
        .parse()
        .map_err(|_| anyhow::anyhow!("unknown layout: {}", cli.layout))?;
    let cfg = SheetConfig {
        min_area: cli.min_area,
        layout,
    };

    let img = ImageReader::open(&cli.input)
        .with_context(|| format!("open {}", cli.input.display()))?
        .decode()
        .with_context(|| format!("decode {}", cli.input.display()))?;

    let out = regrid(&img, &cfg)?;

    out.rgba
        .save(&cli.output)
        .with_context(|| format!("write {}", cli.output.display()))?;

    if let Some(map_path) = &cli.map {
        let json = serde_json::to_string_pretty(&to_json(&out.map))?;
        fs::write(map_path, json).with_context(|| format!("write {}", map_path.display()))?;
        info!(?map_path, "sheet map written");
    }

    info!(
        output = ?cli.output,
        regions = out.map.frames.len(),
        stats = out.stats().summary(),
        "spritesheet generated"
    );
    Ok(())
}

fn init_tracing_with_level(quiet: bool, verbose: u8) {
    let level = if quiet {
        "error".to_string()
    } else {
        match verbose {
            0 => "info".into(),
            1 => "debug".into(),
            _ => "trace".into(),
        }
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(level)
        .with_target(false)
        .try_init();
}
