//! Command-line interface for generating, inspecting and previewing maps

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::io::configuration::{
    DEFAULT_MAP_SIZE, DEFAULT_MINIMAP_SCALE, DEFAULT_ROCK_DENSITY, DEFAULT_SEED,
    DEFAULT_TREE_DENSITY, DEFAULT_WATER_DENSITY, MINIMAP_SUFFIX,
};
use crate::io::error::Result;
use crate::io::file::{load_tilemap, save_tilemap};
use crate::io::image::export_minimap;
use crate::spatial::Tilemap;
use crate::terrain::TerrainFlag;
use crate::terrain::generation::{GenerationConfig, generate_tilemap};

#[derive(Parser)]
#[command(name = "citygrid")]
#[command(author, version, about = "Generate, inspect and preview terrain tilemaps")]
/// Command-line arguments for the map tool
pub struct Cli {
    /// Operation to run
    #[command(subcommand)]
    pub command: Command,

    /// Log debug events to stderr (overrides `RUST_LOG`)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Map tool operations
#[derive(Subcommand)]
pub enum Command {
    /// Generate a random map and save it
    Generate {
        /// Output map file
        #[arg(value_name = "OUTPUT")]
        output: PathBuf,

        /// Map dimension in tiles
        #[arg(short = 'n', long, default_value_t = DEFAULT_MAP_SIZE)]
        size: usize,

        /// Random seed for reproducible generation
        #[arg(short, long, default_value_t = DEFAULT_SEED)]
        seed: u64,

        /// Probability that a tile is water
        #[arg(long, default_value_t = DEFAULT_WATER_DENSITY)]
        water: f64,

        /// Probability that a tile is rock
        #[arg(long, default_value_t = DEFAULT_ROCK_DENSITY)]
        rock: f64,

        /// Probability that a tile holds a tree
        #[arg(long, default_value_t = DEFAULT_TREE_DENSITY)]
        tree: f64,
    },

    /// Print the size and terrain counts of a saved map
    Inspect {
        /// Map file to read
        #[arg(value_name = "MAP")]
        map: PathBuf,
    },

    /// Export a saved map as a PNG minimap
    Minimap {
        /// Map file to read
        #[arg(value_name = "MAP")]
        map: PathBuf,

        /// Output PNG (defaults to `<MAP>_minimap.png`)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Pixels per tile edge
        #[arg(long, default_value_t = DEFAULT_MINIMAP_SCALE)]
        scale: u32,
    },
}

/// Install the stderr log subscriber for the binary
///
/// `RUST_LOG` is honoured unless `verbose` forces debug output; the default
/// level is `warn`. Calling this twice keeps the first subscriber.
pub fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .ok();
}

/// Terrain statistics printed by `inspect`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapSummary {
    /// Map dimension
    pub size: usize,
    /// Tiles free for construction
    pub constructible: usize,
    /// Tile count per flag, in bit order
    pub flags: Vec<(TerrainFlag, usize)>,
}

impl MapSummary {
    /// Count terrain classes across the whole map
    pub fn from_tilemap(map: &Tilemap) -> Self {
        Self {
            size: map.size(),
            constructible: map.count_constructible(),
            flags: TerrainFlag::ALL
                .iter()
                .map(|&flag| (flag, map.count_flag(flag)))
                .collect(),
        }
    }

    /// Multi-line human readable report
    pub fn render(&self) -> String {
        let mut lines = vec![
            format!("size: {0}x{0}", self.size),
            format!("constructible: {}", self.constructible),
        ];
        lines.extend(
            self.flags
                .iter()
                .map(|(flag, count)| format!("{flag}: {count}")),
        );
        lines.join("\n")
    }
}

// Allow print for the report the user asked for
#[allow(clippy::print_stdout)]
fn print_report(report: &str) {
    println!("{report}");
}

/// Runs one CLI command
pub struct CommandRunner {
    cli: Cli,
}

impl CommandRunner {
    /// Create a runner for the parsed arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Execute the selected command
    ///
    /// # Errors
    ///
    /// Returns an error if parameters are invalid or a file cannot be read
    /// or written
    pub fn run(&self) -> Result<()> {
        match &self.cli.command {
            Command::Generate {
                output,
                size,
                seed,
                water,
                rock,
                tree,
            } => {
                let config = GenerationConfig {
                    size: *size,
                    seed: *seed,
                    water: *water,
                    rock: *rock,
                    tree: *tree,
                };
                let map = generate_tilemap(&config)?;
                save_tilemap(output, &map)?;
                info!(path = %output.display(), size, seed, "map generated");
                Ok(())
            }
            Command::Inspect { map } => {
                let summary = MapSummary::from_tilemap(&load_tilemap(map)?);
                print_report(&summary.render());
                Ok(())
            }
            Command::Minimap { map, output, scale } => {
                let tilemap = load_tilemap(map)?;
                let output_path = output.clone().unwrap_or_else(|| Self::get_minimap_path(map));
                export_minimap(&tilemap, &output_path, *scale)?;
                info!(path = %output_path.display(), "minimap exported");
                Ok(())
            }
        }
    }

    /// Default minimap path next to the map file
    pub fn get_minimap_path(map_path: &Path) -> PathBuf {
        let stem = map_path.file_stem().unwrap_or_default();
        let minimap_name = format!("{}{}.png", stem.to_string_lossy(), MINIMAP_SUFFIX);

        if let Some(parent) = map_path.parent() {
            parent.join(minimap_name)
        } else {
            PathBuf::from(minimap_name)
        }
    }
}
