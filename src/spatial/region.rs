//! Axis-aligned rectangles and their deterministic cell traversals
//!
//! Rectangles are closed on both ends and are not tied to any map, so the
//! traversals may yield coordinates outside a map; [`crate::Tilemap`] clips
//! them against its bounds.

use crate::spatial::tile::TilePos;

/// Closed rectangle `[min.i, max.i] x [min.j, max.j]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
    /// Corner with the smallest coordinates (inclusive)
    pub min: TilePos,
    /// Corner with the largest coordinates (inclusive)
    pub max: TilePos,
}

impl Rect {
    /// Create a rectangle from two opposite corners in any order
    pub fn new(i1: i32, j1: i32, i2: i32, j2: i32) -> Self {
        Self {
            min: TilePos::new(i1.min(i2), j1.min(j2)),
            max: TilePos::new(i1.max(i2), j1.max(j2)),
        }
    }

    /// Square with its top-left corner at `(i, j)` and `extent` cells per side
    ///
    /// An `extent` of zero is treated as one.
    pub const fn square(i: i32, j: i32, extent: i32) -> Self {
        let span = if extent > 1 { extent - 1 } else { 0 };
        Self {
            min: TilePos::new(i, j),
            max: TilePos::new(i.saturating_add(span), j.saturating_add(span)),
        }
    }

    /// Number of rows covered
    pub const fn height(&self) -> u64 {
        self.max.i.abs_diff(self.min.i) as u64 + 1
    }

    /// Number of columns covered
    pub const fn width(&self) -> u64 {
        self.max.j.abs_diff(self.min.j) as u64 + 1
    }

    /// Position lies inside or on the border
    pub const fn contains(&self, pos: TilePos) -> bool {
        pos.i >= self.min.i && pos.i <= self.max.i && pos.j >= self.min.j && pos.j <= self.max.j
    }

    /// Position lies on one of the four corners
    pub const fn is_corner(&self, pos: TilePos) -> bool {
        (pos.i == self.min.i || pos.i == self.max.i) && (pos.j == self.min.j || pos.j == self.max.j)
    }

    /// Border cells in a fixed order
    ///
    /// For each row from top to bottom the cell in the first column then the
    /// cell in the last column, followed by each interior column's cell in the
    /// first row then in the last row. With `corners` false the four corner
    /// cells are skipped. One-row or one-column rectangles yield each cell
    /// once.
    pub fn perimeter(&self, corners: bool) -> Vec<TilePos> {
        self.perimeter_within(corners, *self)
    }

    /// Border cells lying inside `bounds`, in the order of [`Self::perimeter`]
    ///
    /// Only rows and columns shared with `bounds` are walked, so the cost
    /// follows the overlap rather than the size of this rectangle.
    pub fn perimeter_within(&self, corners: bool, bounds: Self) -> Vec<TilePos> {
        let delta = i32::from(!corners);
        let mut cells = Vec::new();
        let mut push = |pos: TilePos| {
            if bounds.contains(pos) {
                cells.push(pos);
            }
        };

        let first_row = self.min.i.saturating_add(delta).max(bounds.min.i);
        let last_row = self.max.i.saturating_sub(delta).min(bounds.max.i);
        for i in first_row..=last_row {
            push(TilePos::new(i, self.min.j));
            if self.max.j != self.min.j {
                push(TilePos::new(i, self.max.j));
            }
        }

        // Corner columns were covered by the row pass
        let first_col = self.min.j.saturating_add(1).max(bounds.min.j);
        let last_col = self.max.j.saturating_sub(1).min(bounds.max.j);
        for j in first_col..=last_col {
            push(TilePos::new(self.min.i, j));
            if self.max.i != self.min.i {
                push(TilePos::new(self.max.i, j));
            }
        }

        cells
    }

    /// Every cell in row-major order
    pub fn cells(&self) -> impl Iterator<Item = TilePos> {
        let Self { min, max } = *self;
        (min.i..=max.i).flat_map(move |i| (min.j..=max.j).map(move |j| TilePos::new(i, j)))
    }

    /// Intersection with the square `[0, size)` on both axes
    pub fn clip_to(&self, size: usize) -> Option<Self> {
        let last = i32::try_from(size).ok()?.checked_sub(1)?;
        let clipped = Self {
            min: TilePos::new(self.min.i.max(0), self.min.j.max(0)),
            max: TilePos::new(self.max.i.min(last), self.max.j.min(last)),
        };
        (clipped.min.i <= clipped.max.i && clipped.min.j <= clipped.max.j).then_some(clipped)
    }
}
