//! Spatial data structures for the tile grid
//!
//! This module contains spatial-related functionality including:
//! - Grid cells with coordinates and master tile links
//! - The square tilemap and its region queries
//! - Rectangle traversal and multi-tile footprints

/// Multi-tile footprint placement and linking
pub mod footprint;
/// Rectangles and deterministic cell traversal
pub mod region;
/// Grid cells
pub mod tile;
/// Square tile grid
pub mod tilemap;

pub use region::Rect;
pub use tile::{PictureHandle, Tile, TilePos};
pub use tilemap::Tilemap;
