//! Multi-tile footprints anchored at a master tile
//!
//! A footprint is the `size` x `size` square whose top-left cell is the
//! master tile. Every operation checks the whole square against the map
//! before touching any tile, so a rejected request leaves the map unchanged.

use num_traits::ToPrimitive;
use tracing::debug;

use crate::io::error::{MapError, Result, invalid_parameter, out_of_bounds};
use crate::spatial::region::Rect;
use crate::spatial::tile::TilePos;
use crate::spatial::tilemap::Tilemap;
use crate::terrain::OverlayId;

impl Tilemap {
    /// Square covered by a footprint, validated against the map bounds
    ///
    /// # Errors
    ///
    /// Returns [`MapError::InvalidParameter`] for a zero size and
    /// [`MapError::OutOfBounds`] when any cell falls outside the map
    pub fn footprint(&self, i: i32, j: i32, size: usize) -> Result<Rect> {
        if size == 0 {
            return Err(invalid_parameter(
                "size",
                &size,
                &"footprint must cover at least one tile",
            ));
        }

        let extent = size.to_i32().ok_or_else(|| out_of_bounds(i, j, self.size()))?;
        let rect = Rect::square(i, j, extent);
        for corner in [rect.min, rect.max] {
            if !self.is_inside(corner.i, corner.j) {
                return Err(out_of_bounds(corner.i, corner.j, self.size()));
            }
        }
        Ok(rect)
    }

    /// Whole footprint lies inside the map and every cell is free land
    pub fn is_footprint_constructible(&self, i: i32, j: i32, size: usize) -> bool {
        self.footprint(i, j, size).is_ok_and(|rect| {
            rect.cells()
                .filter_map(|pos| self.get(pos.i, pos.j))
                .all(|tile| tile.terrain().is_constructible())
        })
    }

    /// Link every cell of the footprint to the master tile at `(i, j)`
    ///
    /// # Errors
    ///
    /// Returns the validation error of [`Self::footprint`]
    pub fn link_footprint(&mut self, i: i32, j: i32, size: usize) -> Result<()> {
        let rect = self.footprint(i, j, size)?;
        let master = TilePos::new(i, j);
        for tile in self.get_filled_rectangle_mut(rect.min.i, rect.min.j, rect.max.i, rect.max.j) {
            tile.set_master_tile(master);
        }
        debug!(%master, size, "footprint linked");
        Ok(())
    }

    /// Relink every cell of the footprint to itself
    ///
    /// # Errors
    ///
    /// Returns the validation error of [`Self::footprint`]
    pub fn unlink_footprint(&mut self, i: i32, j: i32, size: usize) -> Result<()> {
        let rect = self.footprint(i, j, size)?;
        for tile in self.get_filled_rectangle_mut(rect.min.i, rect.min.j, rect.max.i, rect.max.j) {
            tile.reset_master_tile();
        }
        debug!(master = %TilePos::new(i, j), size, "footprint unlinked");
        Ok(())
    }

    /// Occupy a constructible footprint with an overlay
    ///
    /// Marks every cell as a building referencing `overlay` and links the
    /// footprint to its master tile at `(i, j)`.
    ///
    /// # Errors
    ///
    /// Returns the validation error of [`Self::footprint`], or
    /// [`MapError::FootprintBlocked`] when a cell is not constructible
    pub fn place_overlay(&mut self, i: i32, j: i32, size: usize, overlay: OverlayId) -> Result<()> {
        let rect = self.footprint(i, j, size)?;
        if !self.is_footprint_constructible(i, j, size) {
            return Err(MapError::FootprintBlocked { i, j, size });
        }

        let master = TilePos::new(i, j);
        for tile in self.get_filled_rectangle_mut(rect.min.i, rect.min.j, rect.max.i, rect.max.j) {
            let terrain = tile.terrain_mut();
            terrain.set_building(true);
            terrain.set_overlay(Some(overlay));
            tile.set_master_tile(master);
        }
        debug!(%overlay, %master, size, "overlay placed");
        Ok(())
    }

    /// Remove the building and overlay from a footprint and unlink it
    ///
    /// Other terrain flags are kept.
    ///
    /// # Errors
    ///
    /// Returns the validation error of [`Self::footprint`]
    pub fn clear_footprint(&mut self, i: i32, j: i32, size: usize) -> Result<()> {
        let rect = self.footprint(i, j, size)?;
        for tile in self.get_filled_rectangle_mut(rect.min.i, rect.min.j, rect.max.i, rect.max.j) {
            let terrain = tile.terrain_mut();
            terrain.set_building(false);
            terrain.set_overlay(None);
            tile.reset_master_tile();
        }
        debug!(master = %TilePos::new(i, j), size, "footprint cleared");
        Ok(())
    }
}
