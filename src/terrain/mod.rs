//! Terrain classification of single map cells
//!
//! This module contains terrain-related functionality including:
//! - The fixed-order flag enumeration and packed bitset conversion
//! - Per-cell terrain state and overlay references
//! - Seeded random terrain generation

/// Terrain flags and packed encoding
pub mod flags;
/// Random terrain generation
pub mod generation;
/// Per-cell terrain state
pub mod tile;

pub use flags::TerrainFlag;
pub use tile::{OverlayId, OverlayRegistry, TerrainTile};
