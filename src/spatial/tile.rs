//! Grid cell wrapping coordinates, terrain and multi-tile links

use std::fmt;

use crate::terrain::TerrainTile;

/// Cell coordinates in the tile grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TilePos {
    /// Row coordinate
    pub i: i32,
    /// Column coordinate
    pub j: i32,
}

impl TilePos {
    /// Create a position from row and column coordinates
    pub const fn new(i: i32, j: i32) -> Self {
        Self { i, j }
    }
}

impl fmt::Display for TilePos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.i, self.j)
    }
}

/// Opaque handle to an externally owned display resource
///
/// The tile stores and returns the handle; it never loads, frees or
/// interprets the picture behind it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PictureHandle(u32);

impl PictureHandle {
    /// Wrap a raw resource identifier
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Raw resource identifier
    pub const fn raw(self) -> u32 {
        self.0
    }
}

/// A single cell of the tilemap
///
/// Multi-tile structures are represented by their master tile (the top-left
/// cell of the footprint). Every other cell of the footprint links to it;
/// a standalone tile links to itself. The link is stored as coordinates so the
/// grid storage can move without invalidating it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    pos: TilePos,
    master: TilePos,
    terrain: TerrainTile,
    picture: Option<PictureHandle>,
}

impl Tile {
    /// Create a standalone tile at the given coordinates
    pub fn new(i: i32, j: i32) -> Self {
        let pos = TilePos::new(i, j);
        Self {
            pos,
            master: pos,
            terrain: TerrainTile::new(),
            picture: None,
        }
    }

    /// Row coordinate
    pub const fn i(&self) -> i32 {
        self.pos.i
    }

    /// Column coordinate
    pub const fn j(&self) -> i32 {
        self.pos.j
    }

    /// Coordinates of this tile
    pub const fn pos(&self) -> TilePos {
        self.pos
    }

    /// Assign the displayed picture
    pub const fn set_picture(&mut self, picture: PictureHandle) {
        self.picture = Some(picture);
    }

    /// Forget the displayed picture
    pub const fn clear_picture(&mut self) {
        self.picture = None;
    }

    /// Displayed picture, `None` until one is assigned
    pub const fn picture(&self) -> Option<PictureHandle> {
        self.picture
    }

    /// Coordinates of the master tile of the footprint this tile belongs to
    pub const fn master_tile(&self) -> TilePos {
        self.master
    }

    /// Link this tile to the master tile of a footprint
    pub const fn set_master_tile(&mut self, master: TilePos) {
        self.master = master;
    }

    /// Relink this tile to itself
    pub const fn reset_master_tile(&mut self) {
        self.master = self.pos;
    }

    /// Tile is standalone or the anchor of its footprint
    pub fn is_master(&self) -> bool {
        self.master == self.pos
    }

    /// Terrain state of this tile
    pub const fn terrain(&self) -> &TerrainTile {
        &self.terrain
    }

    /// Mutable terrain state of this tile
    pub const fn terrain_mut(&mut self) -> &mut TerrainTile {
        &mut self.terrain
    }

    /// No building stands here, so the ground is drawn flat
    pub fn is_flat(&self) -> bool {
        !self.terrain.is_building()
    }
}
