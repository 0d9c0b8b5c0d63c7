//! Map limits and tooling defaults

// Safety limit to prevent excessive memory allocation from corrupt streams
/// Maximum allowed map dimension
pub const MAX_MAP_SIZE: usize = 4096;

/// Map dimension used by the generator when none is given
pub const DEFAULT_MAP_SIZE: usize = 64;

/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;

// Generation densities, rolled once per tile in this order
/// Default probability of a water tile
pub const DEFAULT_WATER_DENSITY: f64 = 0.12;
/// Default probability of a rock tile
pub const DEFAULT_ROCK_DENSITY: f64 = 0.05;
/// Default probability of a tree tile
pub const DEFAULT_TREE_DENSITY: f64 = 0.18;

// Minimap settings
/// Pixels per tile edge in exported minimaps
pub const DEFAULT_MINIMAP_SCALE: u32 = 4;
/// Largest accepted pixels per tile edge
pub const MAX_MINIMAP_SCALE: u32 = 32;
/// Largest accepted minimap edge in pixels (map size times scale)
pub const MAX_MINIMAP_EDGE: u32 = 16_384;
/// Suffix added to minimap filenames
pub const MINIMAP_SUFFIX: &str = "_minimap";

// Minimap colors (RGBA), first matching flag wins in this order
/// Open water
pub const WATER_COLOR: [u8; 4] = [48, 96, 168, 255];
/// Rock
pub const ROCK_COLOR: [u8; 4] = [120, 116, 110, 255];
/// Building footprint cell
pub const BUILDING_COLOR: [u8; 4] = [176, 64, 48, 255];
/// Road
pub const ROAD_COLOR: [u8; 4] = [196, 172, 120, 255];
/// Tree
pub const TREE_COLOR: [u8; 4] = [40, 112, 48, 255];
/// Free land
pub const LAND_COLOR: [u8; 4] = [150, 180, 96, 255];
