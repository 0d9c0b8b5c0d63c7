//! Fixed-order terrain flag enumeration and packed bitset conversion
//!
//! Each terrain flag owns one bit of a small integer. The bit positions are
//! part of the persisted format and must not be reordered:
//!
//! | bit | flag       |
//! |-----|------------|
//! | 0   | `Water`    |
//! | 1   | `Rock`     |
//! | 2   | `Tree`     |
//! | 3   | `Building` |
//! | 4   | `Road`     |

use bitvec::prelude::*;
use std::fmt;

/// Number of terrain flags stored per tile
pub const FLAG_COUNT: usize = 5;

/// Mask selecting the bits that carry terrain flags in a packed value
pub const FLAG_MASK: i32 = (1 << FLAG_COUNT) - 1;

/// Backing storage for the five terrain flags of one tile
pub type FlagBits = BitArr!(for FLAG_COUNT, in u8, Lsb0);

/// Independent ground classification flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum TerrainFlag {
    /// Open water, permanent terrain
    Water = 0,
    /// Rock, permanent terrain
    Rock = 1,
    /// Tree, removable feature
    Tree = 2,
    /// Occupied by a building
    Building = 3,
    /// Road surface
    Road = 4,
}

impl TerrainFlag {
    /// Every flag in bit order
    pub const ALL: [Self; FLAG_COUNT] = [
        Self::Water,
        Self::Rock,
        Self::Tree,
        Self::Building,
        Self::Road,
    ];

    /// Bit position of this flag in the packed encoding
    pub const fn bit(self) -> usize {
        self as usize
    }

    /// Single-bit mask for this flag in the packed encoding
    pub const fn mask(self) -> i32 {
        1 << (self as u8)
    }

    /// Lowercase name used in summaries and CLI output
    pub const fn name(self) -> &'static str {
        match self {
            Self::Water => "water",
            Self::Rock => "rock",
            Self::Tree => "tree",
            Self::Building => "building",
            Self::Road => "road",
        }
    }
}

impl fmt::Display for TerrainFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Pack flag storage into its integer encoding
pub fn pack(bits: &FlagBits) -> i32 {
    let byte = bits.as_raw_slice().first().copied().unwrap_or(0);
    i32::from(byte) & FLAG_MASK
}

/// Unpack an integer encoding into flag storage
///
/// Bits above [`FLAG_MASK`] are ignored.
pub fn unpack(bitset: i32) -> FlagBits {
    // Masked to five bits so the narrowing is lossless
    BitArray::new([(bitset & FLAG_MASK) as u8])
}

/// Encode a list of flags directly, without going through a tile
pub fn pack_flags(flags: &[TerrainFlag]) -> i32 {
    flags.iter().fold(0, |acc, flag| acc | flag.mask())
}

/// Decode an integer encoding into the flags it carries, in bit order
pub fn unpack_flags(bitset: i32) -> Vec<TerrainFlag> {
    let bits = unpack(bitset);
    bits.iter_ones()
        .filter_map(|index| TerrainFlag::ALL.get(index).copied())
        .collect()
}
