//! Minimap PNG export of terrain classes

use std::path::Path;

use image::{ImageBuffer, Rgba};

use crate::io::configuration::{
    BUILDING_COLOR, LAND_COLOR, MAX_MINIMAP_EDGE, MAX_MINIMAP_SCALE, ROAD_COLOR, ROCK_COLOR, TREE_COLOR,
    WATER_COLOR,
};
use crate::io::error::{MapError, Result, invalid_parameter};
use crate::spatial::Tilemap;
use crate::terrain::TerrainTile;

/// Minimap color of a terrain tile
///
/// Permanent terrain wins over features, and buildings over roads and trees.
pub fn terrain_color(terrain: &TerrainTile) -> [u8; 4] {
    if terrain.is_water() {
        WATER_COLOR
    } else if terrain.is_rock() {
        ROCK_COLOR
    } else if terrain.is_building() {
        BUILDING_COLOR
    } else if terrain.is_road() {
        ROAD_COLOR
    } else if terrain.is_tree() {
        TREE_COLOR
    } else {
        LAND_COLOR
    }
}

/// Export the map as a PNG with `scale` pixels per tile edge
///
/// Rows run down the image and columns across it.
///
/// # Errors
///
/// Returns an error if:
/// - The map is uninitialized
/// - `scale` is zero or above [`MAX_MINIMAP_SCALE`]
/// - The image edge would exceed [`MAX_MINIMAP_EDGE`] pixels
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_minimap(map: &Tilemap, output_path: impl AsRef<Path>, scale: u32) -> Result<()> {
    let output_path = output_path.as_ref();
    if map.size() == 0 {
        return Err(invalid_parameter(
            "map",
            &"<empty>",
            &"cannot export an uninitialized map",
        ));
    }
    if scale == 0 || scale > MAX_MINIMAP_SCALE {
        return Err(invalid_parameter(
            "scale",
            &scale,
            &format!("must be within 1..={MAX_MINIMAP_SCALE}"),
        ));
    }

    let edge = u32::try_from(map.size())
        .ok()
        .and_then(|size| size.checked_mul(scale))
        .filter(|&edge| edge <= MAX_MINIMAP_EDGE)
        .ok_or_else(|| {
            invalid_parameter(
                "scale",
                &scale,
                &format!(
                    "a {0}x{0} map at this scale exceeds {MAX_MINIMAP_EDGE} pixels per edge",
                    map.size()
                ),
            )
        })?;
    let mut img = ImageBuffer::new(edge, edge);

    for tile in map.tiles() {
        let color = Rgba(terrain_color(tile.terrain()));
        let x0 = tile.j() as u32 * scale;
        let y0 = tile.i() as u32 * scale;
        for dy in 0..scale {
            for dx in 0..scale {
                img.put_pixel(x0 + dx, y0 + dy, color);
            }
        }
    }

    if let Some(parent) = output_path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| MapError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path).map_err(|e| MapError::ImageExport {
        path: output_path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}
