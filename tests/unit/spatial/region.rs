//! Tests for rectangle normalization, perimeter order and clipping

#[cfg(test)]
mod tests {
    use citygrid::{Rect, TilePos};

    fn positions(cells: &[(i32, i32)]) -> Vec<TilePos> {
        cells.iter().map(|&(i, j)| TilePos::new(i, j)).collect()
    }

    // Tests corners are normalized regardless of argument order
    #[test]
    fn test_new_normalizes_corners() {
        let rect = Rect::new(3, 1, 1, 3);

        assert_eq!(rect, Rect::new(1, 3, 3, 1));
        assert_eq!(rect.min, TilePos::new(1, 1));
        assert_eq!(rect.max, TilePos::new(3, 3));
        assert_eq!(rect.height(), 3);
        assert_eq!(rect.width(), 3);
    }

    // Tests the documented perimeter order with corners
    // Verified by emitting column cells before row cells
    #[test]
    fn test_perimeter_order_with_corners() {
        let expected = positions(&[
            (1, 1),
            (1, 3),
            (2, 1),
            (2, 3),
            (3, 1),
            (3, 3),
            (1, 2),
            (3, 2),
        ]);

        assert_eq!(Rect::new(1, 1, 3, 3).perimeter(true), expected);
    }

    // Tests corners are skipped without disturbing the remaining order
    // Verified by removing the delta on the row pass
    #[test]
    fn test_perimeter_order_without_corners() {
        let expected = positions(&[(2, 1), (2, 3), (1, 2), (3, 2)]);

        assert_eq!(Rect::new(1, 1, 3, 3).perimeter(false), expected);
    }

    // Tests degenerate rectangles yield each cell once
    // Verified by dropping the equal-column guard
    #[test]
    fn test_perimeter_of_single_row_and_column() {
        assert_eq!(
            Rect::new(2, 0, 2, 3).perimeter(true),
            positions(&[(2, 0), (2, 3), (2, 1), (2, 2)])
        );
        assert_eq!(
            Rect::new(0, 5, 2, 5).perimeter(true),
            positions(&[(0, 5), (1, 5), (2, 5)])
        );
        assert_eq!(Rect::new(4, 4, 4, 4).perimeter(true), positions(&[(4, 4)]));
        assert!(Rect::new(4, 4, 4, 4).perimeter(false).is_empty());
    }

    // Tests perimeter size matches 2(h + w) - 4 for larger rectangles
    #[test]
    fn test_perimeter_has_no_duplicates() {
        let rect = Rect::new(0, 0, 4, 6);
        let mut cells = rect.perimeter(true);
        let count = cells.len();
        cells.sort();
        cells.dedup();

        assert_eq!(count, 2 * (5 + 7) - 4);
        assert_eq!(cells.len(), count);
        assert!(cells.iter().all(|&pos| rect.contains(pos)));
        assert_eq!(rect.perimeter(false).len(), count - 4);
    }

    #[test]
    fn test_is_corner() {
        let rect = Rect::new(0, 0, 2, 2);

        assert!(rect.is_corner(TilePos::new(0, 2)));
        assert!(rect.is_corner(TilePos::new(2, 0)));
        assert!(!rect.is_corner(TilePos::new(1, 0)));
        assert!(!rect.is_corner(TilePos::new(1, 1)));
    }

    // Tests cells are produced row by row
    #[test]
    fn test_cells_are_row_major() {
        let cells: Vec<TilePos> = Rect::new(0, 0, 1, 2).cells().collect();

        assert_eq!(
            cells,
            positions(&[(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)])
        );
    }

    // Tests square footprints treat extents below one as a single cell
    #[test]
    fn test_square_extent() {
        assert_eq!(Rect::square(2, 3, 3), Rect::new(2, 3, 4, 5));
        assert_eq!(Rect::square(2, 3, 1), Rect::new(2, 3, 2, 3));
        assert_eq!(Rect::square(2, 3, 0), Rect::new(2, 3, 2, 3));
    }

    // Tests clipping to the map square
    // Verified by clipping against size instead of size - 1
    #[test]
    fn test_clip_to_map() {
        assert_eq!(
            Rect::new(-1, -1, 1, 9).clip_to(5),
            Some(Rect::new(0, 0, 1, 4))
        );
        assert_eq!(Rect::new(5, 0, 7, 2).clip_to(5), None);
        assert_eq!(Rect::new(0, 0, 0, 0).clip_to(0), None);
    }

    // Tests bounded traversal keeps the perimeter order and drops outside cells
    // Verified by walking the full rectangle before filtering
    #[test]
    fn test_perimeter_within_bounds() {
        let rect = Rect::new(-1, -1, 1, 1);
        let bounds = Rect::new(0, 0, 4, 4);

        assert_eq!(
            rect.perimeter_within(true, bounds),
            positions(&[(0, 1), (1, 1), (1, 0)])
        );
        assert_eq!(
            rect.perimeter_within(false, bounds),
            positions(&[(0, 1), (1, 0)])
        );
        assert_eq!(
            Rect::new(1, 1, 3, 3).perimeter_within(true, Rect::new(1, 1, 3, 3)),
            Rect::new(1, 1, 3, 3).perimeter(true)
        );
    }

    // Tests huge rectangles only cost as much as their overlap with the bounds
    #[test]
    fn test_perimeter_within_extreme_coordinates() {
        let bounds = Rect::new(0, 0, 3, 3);

        assert_eq!(
            Rect::new(0, 0, 0, i32::MAX).perimeter_within(true, bounds),
            positions(&[(0, 0), (0, 1), (0, 2), (0, 3)])
        );
        assert!(
            Rect::new(i32::MIN, i32::MIN, i32::MAX, i32::MAX)
                .perimeter_within(true, bounds)
                .is_empty()
        );
    }
}
