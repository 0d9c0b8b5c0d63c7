//! Square map of tiles with checked access and rectangular region queries
//!
//! Tiles live in a single row-major `Array2`, so every row has the same
//! length by construction and `(i, j)` maps to the `[i, j]` element. A map is
//! either uninitialized (size 0) or ready (size N, N² tiles); [`Tilemap::init`]
//! is the only transition and always produces a fresh grid.

use ndarray::{Array2, Axis, Slice};
use num_traits::ToPrimitive;
use tracing::debug;

use crate::io::configuration::MAX_MAP_SIZE;
use crate::io::error::{MapError, Result, StreamContext, out_of_bounds};
use crate::io::stream::{InputSerialStream, OutputSerialStream, Serializable};
use crate::spatial::region::Rect;
use crate::spatial::tile::{Tile, TilePos};
use crate::terrain::{OverlayId, TerrainFlag};

/// Square grid of tiles
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tilemap {
    tiles: Array2<Tile>,
}

impl Default for Tilemap {
    fn default() -> Self {
        Self::new()
    }
}

impl Tilemap {
    /// Create an uninitialized map of size 0
    pub fn new() -> Self {
        Self {
            tiles: Array2::from_elem((0, 0), Tile::new(0, 0)),
        }
    }

    /// Create a map and initialize it to `size` x `size` tiles
    ///
    /// # Errors
    ///
    /// Returns [`MapError::InvalidSize`] when `size` exceeds [`MAX_MAP_SIZE`]
    pub fn with_size(size: usize) -> Result<Self> {
        let mut map = Self::new();
        map.init(size)?;
        Ok(map)
    }

    /// Replace the grid with `size` x `size` fresh tiles
    ///
    /// Every tile gets its own coordinates, default terrain, no picture and a
    /// master link to itself. Any previous grid is discarded without merging.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::InvalidSize`] when `size` exceeds [`MAX_MAP_SIZE`];
    /// the current grid is left untouched in that case
    pub fn init(&mut self, size: usize) -> Result<()> {
        if size > MAX_MAP_SIZE {
            return Err(MapError::InvalidSize {
                size: size.to_i64().unwrap_or(i64::MAX),
                max: MAX_MAP_SIZE,
            });
        }

        if self.size() > 0 {
            debug!(previous = self.size(), size, "discarding tilemap on re-init");
        }

        // MAX_MAP_SIZE keeps every coordinate well inside i32
        self.tiles = Array2::from_shape_fn((size, size), |(i, j)| Tile::new(i as i32, j as i32));
        debug!(size, cells = size * size, "tilemap initialized");
        Ok(())
    }

    /// Map dimension N (0 when uninitialized)
    pub fn size(&self) -> usize {
        self.tiles.nrows()
    }

    /// Coordinates lie in `[0, size)` on both axes
    pub fn is_inside(&self, i: i32, j: i32) -> bool {
        self.index(i, j).is_some()
    }

    fn index(&self, i: i32, j: i32) -> Option<[usize; 2]> {
        let row = i.to_usize()?;
        let col = j.to_usize()?;
        let size = self.size();
        (row < size && col < size).then_some([row, col])
    }

    /// Tile at `(i, j)`, `None` outside the map
    pub fn get(&self, i: i32, j: i32) -> Option<&Tile> {
        let index = self.index(i, j)?;
        self.tiles.get(index)
    }

    /// Mutable tile at `(i, j)`, `None` outside the map
    pub fn get_mut(&mut self, i: i32, j: i32) -> Option<&mut Tile> {
        let index = self.index(i, j)?;
        self.tiles.get_mut(index)
    }

    /// Tile at `(i, j)`
    ///
    /// # Errors
    ///
    /// Returns [`MapError::OutOfBounds`] outside the map
    pub fn at(&self, i: i32, j: i32) -> Result<&Tile> {
        let size = self.size();
        self.get(i, j).ok_or_else(|| out_of_bounds(i, j, size))
    }

    /// Mutable tile at `(i, j)`
    ///
    /// # Errors
    ///
    /// Returns [`MapError::OutOfBounds`] outside the map
    pub fn at_mut(&mut self, i: i32, j: i32) -> Result<&mut Tile> {
        let size = self.size();
        self.get_mut(i, j).ok_or_else(|| out_of_bounds(i, j, size))
    }

    /// Master tile of the footprint containing `(i, j)`
    ///
    /// # Errors
    ///
    /// Returns [`MapError::OutOfBounds`] when `(i, j)` or its master link lies
    /// outside the map
    pub fn master_of(&self, i: i32, j: i32) -> Result<&Tile> {
        let master = self.at(i, j)?.master_tile();
        self.at(master.i, master.j)
    }

    /// All tiles in row-major order
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    /// All tiles in row-major order, mutably
    pub fn tiles_mut(&mut self) -> impl Iterator<Item = &mut Tile> {
        self.tiles.iter_mut()
    }

    /// Tiles on the border of the rectangle spanned by two corners
    ///
    /// Corners may be given in any order. Cells outside the map are skipped.
    /// With `corners` false the four corner cells are excluded. The order is
    /// the one documented on [`Rect::perimeter`].
    pub fn get_rectangle(&self, i1: i32, j1: i32, i2: i32, j2: i32, corners: bool) -> Vec<&Tile> {
        let rect = Rect::new(i1, j1, i2, j2);
        let Some(visible) = rect.clip_to(self.size()) else {
            return Vec::new();
        };
        rect.perimeter_within(corners, visible)
            .into_iter()
            .filter_map(|pos| self.get(pos.i, pos.j))
            .collect()
    }

    /// Every tile in the closed rectangle spanned by two corners, row-major
    ///
    /// Corners may be given in any order. Cells outside the map are skipped.
    pub fn get_filled_rectangle(&self, i1: i32, j1: i32, i2: i32, j2: i32) -> Vec<&Tile> {
        match self.clipped_window(Rect::new(i1, j1, i2, j2)) {
            Some([rows, cols]) => self
                .tiles
                .view()
                .slice_axis_move(Axis(0), Slice::from(rows.0..rows.1))
                .slice_axis_move(Axis(1), Slice::from(cols.0..cols.1))
                .into_iter()
                .collect(),
            None => Vec::new(),
        }
    }

    /// Mutable variant of [`Self::get_filled_rectangle`], same order
    pub fn get_filled_rectangle_mut(&mut self, i1: i32, j1: i32, i2: i32, j2: i32) -> Vec<&mut Tile> {
        match self.clipped_window(Rect::new(i1, j1, i2, j2)) {
            Some([rows, cols]) => self
                .tiles
                .view_mut()
                .slice_axis_move(Axis(0), Slice::from(rows.0..rows.1))
                .slice_axis_move(Axis(1), Slice::from(cols.0..cols.1))
                .into_iter()
                .collect(),
            None => Vec::new(),
        }
    }

    // Half-open row and column index ranges of the rectangle clipped to the map
    fn clipped_window(&self, rect: Rect) -> Option<[(usize, usize); 2]> {
        let clipped = rect.clip_to(self.size())?;
        let [top, left] = self.index(clipped.min.i, clipped.min.j)?;
        let [bottom, right] = self.index(clipped.max.i, clipped.max.j)?;
        Some([(top, bottom + 1), (left, right + 1)])
    }

    /// Number of tiles carrying `flag`
    pub fn count_flag(&self, flag: TerrainFlag) -> usize {
        self.tiles.iter().filter(|tile| tile.terrain().flag(flag)).count()
    }

    /// Number of tiles free for construction
    pub fn count_constructible(&self) -> usize {
        self.tiles
            .iter()
            .filter(|tile| tile.terrain().is_constructible())
            .count()
    }

    /// Drop every reference to `overlay`, returning how many tiles held one
    ///
    /// Overlay owners call this before destroying an overlay so no tile keeps
    /// a stale id.
    pub fn clear_overlay(&mut self, overlay: OverlayId) -> usize {
        let mut cleared = 0;
        for tile in self.tiles.iter_mut() {
            if tile.terrain().overlay() == Some(overlay) {
                tile.terrain_mut().set_overlay(None);
                cleared += 1;
            }
        }
        debug!(%overlay, cleared, "overlay references cleared");
        cleared
    }

    /// Positions of every tile linked to a master other than itself
    pub fn linked_positions(&self) -> Vec<TilePos> {
        self.tiles
            .iter()
            .filter(|tile| !tile.is_master())
            .map(Tile::pos)
            .collect()
    }
}

// Layout: size, then one terrain bitset per tile in row-major order
// (i outer, j inner). Pictures and overlays are not persisted.
impl Serializable for Tilemap {
    fn serialize(&self, stream: &mut dyn OutputSerialStream) -> Result<()> {
        let size = self.size();
        debug!(size, "serializing tilemap");
        // init caps the size at MAX_MAP_SIZE
        stream.write_int(size as i32).stream_context("write map size")?;
        for tile in &self.tiles {
            tile.terrain().serialize(stream)?;
        }
        Ok(())
    }

    fn unserialize(&mut self, stream: &mut dyn InputSerialStream) -> Result<()> {
        let raw_size = stream.read_int().stream_context("read map size")?;
        let size = raw_size.to_usize().ok_or(MapError::InvalidSize {
            size: i64::from(raw_size),
            max: MAX_MAP_SIZE,
        })?;
        self.init(size)?;
        debug!(size, "unserializing tilemap");
        for tile in &mut self.tiles {
            tile.terrain_mut().unserialize(stream)?;
        }
        Ok(())
    }
}
