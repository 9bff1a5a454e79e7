//! Glyph measurement and character grid metrics
//!
//! The glyph probe measures a run of characters at some font size. Dividing by
//! that size gives ratios that hold for every size of the same monospace face,
//! which lets the font-size search evaluate candidate sizes without re-measuring.

use bevy::math::Vec2;

/// Glyph box size per pixel of font size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphMetrics {
    /// Advance width of one glyph divided by the font size
    pub width_per_px: f32,
    /// Line height divided by the font size
    pub height_per_px: f32,
}

impl GlyphMetrics {
    /// Build ratios from a probe measurement.
    ///
    /// `measured` is the box size of `sample_len` glyphs rendered at
    /// `font_size`. Returns `None` for any zero or non-finite measurement,
    /// which happens before the first UI layout pass.
    pub fn from_probe(measured: Vec2, font_size: f32, sample_len: usize) -> Option<Self> {
        if sample_len == 0 || !(font_size > 0.0) {
            return None;
        }
        let width_per_px = measured.x / sample_len as f32 / font_size;
        let height_per_px = measured.y / font_size;
        let usable = |v: f32| v.is_finite() && v > 0.0;
        if !usable(width_per_px) || !usable(height_per_px) {
            return None;
        }
        Some(Self {
            width_per_px,
            height_per_px,
        })
    }

    pub fn char_width(&self, font_size: f32) -> f32 {
        self.width_per_px * font_size
    }

    pub fn line_height(&self, font_size: f32) -> f32 {
        self.height_per_px * font_size
    }
}

/// Lower bounds that keep the grid usable in very small viewports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLimits {
    pub min_chars_per_line: usize,
    pub min_lines: usize,
}

impl Default for GridLimits {
    fn default() -> Self {
        Self {
            min_chars_per_line: 8,
            min_lines: 2,
        }
    }
}

/// Derived layout of the character grid for one font size and container
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutMetrics {
    pub chars_per_line: usize,
    pub max_lines: usize,
    pub font_size: f32,
    pub line_height: f32,
    pub char_width: f32,
    /// Container size the grid was computed for
    pub container: Vec2,
}

impl LayoutMetrics {
    /// Compute the grid for `font_size` inside `container`.
    ///
    /// Returns `None` when nothing can be laid out: an empty container or a
    /// glyph that measures zero in either dimension.
    pub fn compute(
        container: Vec2,
        glyph: &GlyphMetrics,
        font_size: f32,
        limits: GridLimits,
    ) -> Option<Self> {
        let char_width = glyph.char_width(font_size);
        let line_height = glyph.line_height(font_size);
        if !(char_width > 0.0) || !(line_height > 0.0) {
            return None;
        }
        if !(container.x > 0.0) || !(container.y > 0.0) {
            return None;
        }

        let chars_per_line = raw_cells(container.x, char_width).max(limits.min_chars_per_line);
        let max_lines = raw_cells(container.y, line_height).max(limits.min_lines);
        if chars_per_line == 0 {
            return None;
        }

        Some(Self {
            chars_per_line,
            max_lines,
            font_size,
            line_height,
            char_width,
            container,
        })
    }

    /// Total characters the visible grid holds
    pub fn capacity(&self) -> usize {
        self.chars_per_line * self.max_lines
    }
}

/// Unclamped number of whole cells of `cell` size that fit in `extent`
pub(crate) fn raw_cells(extent: f32, cell: f32) -> usize {
    if !(cell > 0.0) || !(extent > 0.0) {
        return 0;
    }
    (extent / cell).floor() as usize
}
