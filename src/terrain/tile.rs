//! Per-cell terrain state with packed flag encoding
//!
//! A terrain tile carries five independent flags and an optional reference to
//! an overlay (a placed structure). The overlay is referenced by id only: the
//! system that owns overlays resolves ids through an [`OverlayRegistry`] and
//! must clear stale ids (see [`crate::Tilemap::clear_overlay`]) before
//! destroying an overlay.

use std::collections::HashMap;
use std::fmt;

use crate::io::error::{Result, StreamContext};
use crate::io::stream::{InputSerialStream, OutputSerialStream, Serializable};
use crate::terrain::flags::{FlagBits, TerrainFlag, pack, unpack};

/// Identity of an externally owned overlay structure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OverlayId(u32);

impl OverlayId {
    /// Wrap a raw overlay identifier
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Raw identifier value
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Display for OverlayId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "overlay#{}", self.0)
    }
}

/// Resolves overlay ids to the structures that own them
pub trait OverlayRegistry {
    /// Overlay type held by the registry
    type Overlay;

    /// Look up a live overlay, `None` when the id is unknown or destroyed
    fn overlay(&self, id: OverlayId) -> Option<&Self::Overlay>;
}

impl<T> OverlayRegistry for HashMap<OverlayId, T> {
    type Overlay = T;

    fn overlay(&self, id: OverlayId) -> Option<&T> {
        self.get(&id)
    }
}

/// Terrain flags and overlay reference of a single map cell
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TerrainTile {
    flags: FlagBits,
    overlay: Option<OverlayId>,
}

impl TerrainTile {
    /// Create a tile with every flag cleared and no overlay
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear every flag and drop the overlay reference
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Read a single flag
    pub fn flag(&self, flag: TerrainFlag) -> bool {
        self.flags.get(flag.bit()).as_deref() == Some(&true)
    }

    /// Assign a single flag, leaving the others untouched
    pub fn set_flag(&mut self, flag: TerrainFlag, value: bool) {
        self.flags.set(flag.bit(), value);
    }

    /// Tile is open water
    pub fn is_water(&self) -> bool {
        self.flag(TerrainFlag::Water)
    }

    /// Tile is rock
    pub fn is_rock(&self) -> bool {
        self.flag(TerrainFlag::Rock)
    }

    /// Tile holds a tree
    pub fn is_tree(&self) -> bool {
        self.flag(TerrainFlag::Tree)
    }

    /// Tile is occupied by a building
    pub fn is_building(&self) -> bool {
        self.flag(TerrainFlag::Building)
    }

    /// Tile is a road
    pub fn is_road(&self) -> bool {
        self.flag(TerrainFlag::Road)
    }

    /// Set or clear the water flag
    pub fn set_water(&mut self, value: bool) {
        self.set_flag(TerrainFlag::Water, value);
    }

    /// Set or clear the rock flag
    pub fn set_rock(&mut self, value: bool) {
        self.set_flag(TerrainFlag::Rock, value);
    }

    /// Set or clear the tree flag
    pub fn set_tree(&mut self, value: bool) {
        self.set_flag(TerrainFlag::Tree, value);
    }

    /// Set or clear the building flag
    pub fn set_building(&mut self, value: bool) {
        self.set_flag(TerrainFlag::Building, value);
    }

    /// Set or clear the road flag
    pub fn set_road(&mut self, value: bool) {
        self.set_flag(TerrainFlag::Road, value);
    }

    /// Free land: no water, rock, tree, building or road
    pub fn is_constructible(&self) -> bool {
        self.flags.not_any()
    }

    /// Holds a removable feature (tree, building or road) on removable ground
    ///
    /// Water and rock are permanent and take precedence: a road across rock
    /// is not destructible. Empty land is never destructible, so this never
    /// agrees with [`Self::is_constructible`].
    pub fn is_destructible(&self) -> bool {
        let removable = self.is_tree() || self.is_building() || self.is_road();
        let permanent = self.is_water() || self.is_rock();
        removable && !permanent
    }

    /// Attach or detach the overlay occupying this tile
    pub const fn set_overlay(&mut self, overlay: Option<OverlayId>) {
        self.overlay = overlay;
    }

    /// Overlay occupying this tile, if any
    pub const fn overlay(&self) -> Option<OverlayId> {
        self.overlay
    }

    /// Resolve the overlay reference through its owning registry
    pub fn resolve_overlay<'r, R: OverlayRegistry>(&self, registry: &'r R) -> Option<&'r R::Overlay> {
        self.overlay.and_then(|id| registry.overlay(id))
    }

    /// Packed flag bitset (bit order documented in [`crate::terrain::flags`])
    pub fn encode(&self) -> i32 {
        pack(&self.flags)
    }

    /// Overwrite all five flags from a packed bitset; the overlay is kept
    pub fn decode(&mut self, bitset: i32) {
        self.flags = unpack(bitset);
    }
}

// The overlay reference is not persisted; the overlay loader re-links it.
impl Serializable for TerrainTile {
    fn serialize(&self, stream: &mut dyn OutputSerialStream) -> Result<()> {
        stream.write_int(self.encode()).stream_context("write terrain")
    }

    fn unserialize(&mut self, stream: &mut dyn InputSerialStream) -> Result<()> {
        let bitset = stream.read_int().stream_context("read terrain")?;
        self.decode(bitset);
        Ok(())
    }
}
