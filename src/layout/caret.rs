//! Caret positioning
//!
//! Maps a linear buffer index to a grid cell and the grid cell to a pixel
//! offset from the container's top-left corner.

use super::direction::TextDirection;
use super::metrics::LayoutMetrics;
use bevy::math::Vec2;

/// Line and column of a buffer index in the character grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GridPosition {
    pub line: usize,
    pub column: usize,
}

/// Grid cell for `index`. `None` when the grid has no width.
///
/// An index that falls exactly on a line boundary belongs to the start of the
/// next line, so a caret after a full line sits at column 0 below it.
pub fn grid_position(index: usize, chars_per_line: usize) -> Option<GridPosition> {
    if chars_per_line == 0 {
        return None;
    }
    Some(GridPosition {
        line: index / chars_per_line,
        column: index % chars_per_line,
    })
}

/// Pixel offset of the caret from the container origin.
///
/// Lines above `first_visible_line` are scrolled out of view. For
/// right-to-left text the horizontal offset is mirrored against the
/// container width, matching the right-justified display.
pub fn caret_offset(
    grid: GridPosition,
    metrics: &LayoutMetrics,
    direction: TextDirection,
    first_visible_line: usize,
) -> Vec2 {
    let advance = grid.column as f32 * metrics.char_width;
    let x = match direction {
        TextDirection::LeftToRight => advance,
        TextDirection::RightToLeft => (metrics.container.x - advance).max(0.0),
    };
    let visible_line = grid.line.saturating_sub(first_visible_line);
    let y = visible_line as f32 * metrics.line_height;
    Vec2::new(x, y)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics() -> LayoutMetrics {
        LayoutMetrics {
            chars_per_line: 10,
            max_lines: 4,
            font_size: 20.0,
            line_height: 24.0,
            char_width: 12.0,
            container: Vec2::new(125.0, 100.0),
        }
    }

    #[test]
    fn index_maps_to_line_and_column() {
        assert_eq!(
            grid_position(0, 10),
            Some(GridPosition { line: 0, column: 0 })
        );
        assert_eq!(
            grid_position(23, 10),
            Some(GridPosition { line: 2, column: 3 })
        );
        assert_eq!(
            grid_position(10, 10),
            Some(GridPosition { line: 1, column: 0 })
        );
        assert_eq!(grid_position(5, 0), None);
    }

    #[test]
    fn ltr_offset_grows_rightward() {
        let grid = GridPosition { line: 1, column: 3 };
        let offset = caret_offset(grid, &metrics(), TextDirection::LeftToRight, 0);
        assert_eq!(offset, Vec2::new(36.0, 24.0));
    }

    #[test]
    fn rtl_offset_is_mirrored() {
        let grid = GridPosition { line: 0, column: 3 };
        let offset = caret_offset(grid, &metrics(), TextDirection::RightToLeft, 0);
        assert_eq!(offset, Vec2::new(125.0 - 36.0, 0.0));

        let origin = caret_offset(
            GridPosition::default(),
            &metrics(),
            TextDirection::RightToLeft,
            0,
        );
        assert_eq!(origin.x, 125.0);
    }

    #[test]
    fn scrolled_lines_are_subtracted() {
        let grid = GridPosition { line: 5, column: 0 };
        let offset = caret_offset(grid, &metrics(), TextDirection::LeftToRight, 2);
        assert_eq!(offset.y, 72.0);
    }
}
