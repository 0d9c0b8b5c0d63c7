//! Square terrain tile grid for city-building simulations
//!
//! Each cell tracks five terrain flags packed into a small integer, an optional
//! overlay reference and a master tile link used by structures spanning several
//! cells. The map answers bounds-checked lookups and rectangular region
//! queries for placement logic, and persists as a flat stream of integers.

#![forbid(unsafe_code)]

/// Persistence, error handling and tooling
pub mod io;
/// Grid cells, the tilemap and region queries
pub mod spatial;
/// Per-cell terrain flags and generation
pub mod terrain;

pub use io::error::{MapError, Result};
pub use io::stream::{InputSerialStream, OutputSerialStream, Serializable};
pub use spatial::{PictureHandle, Rect, Tile, TilePos, Tilemap};
pub use terrain::{OverlayId, OverlayRegistry, TerrainFlag, TerrainTile};
