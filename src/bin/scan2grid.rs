//! Build an occupancy grid from a scan dump and write a PNG preview.
//!
//! Usage:
//!   scan2grid data.txt --output grid.png
//!   RUST_LOG=debug scan2grid data.txt --resolution 2 --symmetric-fill

use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use log::info;

use scan_grid::visualization::save_preview;
use scan_grid::{CellState, ErrorPolicy, FloodFillMode, GridBuilder, MapperConfig};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Scan dump to read
    scan: PathBuf,

    /// YAML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// World units per cell (overrides the config file)
    #[arg(short, long)]
    resolution: Option<f64>,

    /// Output image path
    #[arg(short, long, default_value = "grid.png")]
    output: PathBuf,

    /// Fail when a ray leaves the grid instead of stopping silently
    #[arg(long)]
    strict: bool,

    /// Use the classic 4-connected flood fill
    #[arg(long)]
    symmetric_fill: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => scan_grid::load_config(path)?,
        None => MapperConfig::default(),
    };
    if let Some(resolution) = args.resolution {
        config.resolution = resolution;
    }
    if args.strict {
        config.grid.error_policy = ErrorPolicy::Strict;
    }
    if args.symmetric_fill {
        config.grid.flood_fill = FloodFillMode::Symmetric;
    }
    config.validate()?;

    let scan = scan_grid::load_scan(&args.scan, &config.scan)?;
    info!("loaded {} samples from {}", scan.len(), args.scan.display());

    let (xs, ys) = scan.to_obstacles();
    let grid = GridBuilder::new(config.grid.clone()).generate(&xs, &ys, config.resolution)?;
    let geometry = grid.geometry();
    info!(
        "grid {}x{} at resolution {}, x [{}, {}], y [{}, {}]",
        geometry.width,
        geometry.height,
        geometry.resolution,
        geometry.min.x,
        geometry.max.x,
        geometry.min.y,
        geometry.max.y
    );
    info!(
        "free {}, occupied {}, unknown {}",
        grid.count(CellState::Free),
        grid.count(CellState::Occupied),
        grid.count(CellState::Unknown)
    );

    save_preview(&grid, &args.output)?;
    info!("wrote {}", args.output.display());

    Ok(())
}
