//! Font size selection
//!
//! Two strategies:
//! - `WordCount`: the font shrinks linearly as more words are typed
//! - `Capacity`: the largest font whose grid still holds a target number of
//!   characters in the current viewport

use super::metrics::{raw_cells, GlyphMetrics};
use bevy::math::Vec2;
use serde::{Deserialize, Serialize};

/// Strategy used to choose the display font size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FontSizing {
    #[default]
    WordCount,
    Capacity,
}

impl FontSizing {
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "word-count" | "words" => Some(Self::WordCount),
            "capacity" | "fit" => Some(Self::Capacity),
            _ => None,
        }
    }

    pub fn all_names() -> &'static [&'static str] {
        &["word-count", "capacity"]
    }
}

/// Font size bounds and shrink thresholds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontScale {
    /// Size used while the text is short
    pub initial_font_size: f32,
    /// Smallest size the font ever shrinks to
    pub min_font_size: f32,
    /// Word count at which shrinking starts
    pub shrink_start_words: usize,
    /// Word count at which the minimum size is reached
    pub shrink_end_words: usize,
}

impl FontScale {
    /// (min, max) with the bounds ordered even if configured backwards
    fn bounds(&self) -> (f32, f32) {
        let lo = self.min_font_size.min(self.initial_font_size);
        let hi = self.min_font_size.max(self.initial_font_size);
        (lo, hi)
    }
}

/// Font size for `words` typed words.
///
/// Interpolates linearly from `initial_font_size` at `shrink_start_words`
/// down to `min_font_size` at `shrink_end_words`, clamped outside that range.
pub fn font_size_for_word_count(words: usize, scale: &FontScale) -> f32 {
    let (lo, hi) = scale.bounds();
    let start = scale.shrink_start_words;
    let end = scale.shrink_end_words;

    if words <= start {
        return hi;
    }
    if words >= end {
        return lo;
    }

    let t = (words - start) as f32 / (end - start) as f32;
    (hi - (hi - lo) * t).clamp(lo, hi)
}

/// Largest whole font size whose character grid inside `container` holds at
/// least `target_capacity` characters.
///
/// Candidates are every integer size between the scale bounds, tried from the
/// largest down. Falls back to the minimum size when nothing fits.
pub fn font_size_for_capacity(
    container: Vec2,
    glyph: &GlyphMetrics,
    scale: &FontScale,
    target_capacity: usize,
) -> f32 {
    let (lo, hi) = scale.bounds();
    let first = lo.ceil().max(1.0) as u32;
    let last = hi.floor() as u32;

    for size in (first..=last).rev() {
        let size = size as f32;
        let columns = raw_cells(container.x, glyph.char_width(size));
        let rows = raw_cells(container.y, glyph.line_height(size));
        if columns * rows >= target_capacity {
            tracing::trace!(
                "Capacity search: {}px gives {}x{} for target {}",
                size,
                columns,
                rows,
                target_capacity
            );
            return size;
        }
    }

    lo
}
