//! Widget state resources
//!
//! `EditorState` owns the text. `LayoutInputs` holds the measurements that
//! feed layout, and `LayoutState` everything derived from them. The derived
//! state is rebuilt whenever the text, the glyph measurement or the window
//! size changes.

use super::text_buffer::TextBuffer;
use crate::core::config::WidgetSettings;
use crate::layout::{
    caret_offset, first_visible_line, font_size_for_capacity, font_size_for_word_count,
    grid_position, join_lines, split_lines, visible_lines, DirectionState, FontSizing,
    GlyphMetrics, GridPosition, LayoutMetrics, TextDirection,
};
use bevy::prelude::*;

/// The text being edited and its detected direction
#[derive(Resource, Debug, Clone, Default)]
pub struct EditorState {
    pub buffer: TextBuffer,
    pub direction: DirectionState,
}

impl EditorState {
    pub fn new(settings: &WidgetSettings) -> Self {
        Self {
            buffer: TextBuffer::with_max_chars(settings.max_chars),
            direction: DirectionState::default(),
        }
    }

    /// Re-run direction detection. Returns true when the direction flipped.
    pub fn refresh_direction(&mut self) -> bool {
        let text = self.buffer.text();
        self.direction.update(&text)
    }

    pub fn text_direction(&self) -> TextDirection {
        self.direction.direction()
    }
}

/// Caret placement within the laid-out grid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CaretPlacement {
    pub grid: GridPosition,
    /// Offset from the container's top-left corner
    pub offset: Vec2,
}

/// Measurements taken from the running UI
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct LayoutInputs {
    /// Glyph ratios from the probe, `None` until the first measurement
    pub glyph: Option<GlyphMetrics>,
    /// Text container size in logical pixels
    pub container: Vec2,
}

/// Layout results
#[derive(Resource, Debug, Clone, Default)]
pub struct LayoutState {
    /// Selected font size
    pub font_size: f32,
    pub metrics: Option<LayoutMetrics>,
    pub first_visible_line: usize,
    /// Visible lines joined with line breaks
    pub display_text: String,
    pub caret: Option<CaretPlacement>,
}

impl LayoutState {
    /// Font size for the current text under the configured strategy.
    ///
    /// Capacity sizing needs a glyph measurement; until one exists it falls
    /// back to the initial size.
    pub fn select_font_size(
        editor: &EditorState,
        inputs: &LayoutInputs,
        settings: &WidgetSettings,
    ) -> f32 {
        let scale = settings.font_scale();
        match (settings.sizing, inputs.glyph) {
            (FontSizing::Capacity, Some(glyph)) => font_size_for_capacity(
                inputs.container,
                &glyph,
                &scale,
                settings.target_capacity,
            ),
            (FontSizing::Capacity, None) => scale.initial_font_size,
            (FontSizing::WordCount, _) => {
                font_size_for_word_count(editor.buffer.word_count(), &scale)
            }
        }
    }

    /// Rebuild the grid, the visible text and the caret placement.
    ///
    /// Returns false when layout was skipped (no measurement yet or a
    /// degenerate container); the previous display is left untouched.
    pub fn recompute(
        &mut self,
        editor: &EditorState,
        inputs: &LayoutInputs,
        settings: &WidgetSettings,
    ) -> bool {
        self.font_size = Self::select_font_size(editor, inputs, settings);

        let Some(glyph) = inputs.glyph else {
            return false;
        };
        let Some(metrics) = LayoutMetrics::compute(
            inputs.container,
            &glyph,
            self.font_size,
            settings.grid_limits(),
        )
        else {
            self.metrics = None;
            return false;
        };
        let Some(grid) = grid_position(editor.buffer.caret(), metrics.chars_per_line) else {
            return false;
        };

        let lines = split_lines(&editor.buffer.text(), metrics.chars_per_line);
        let first = first_visible_line(grid.line, metrics.max_lines);
        let offset = caret_offset(grid, &metrics, editor.text_direction(), first);

        self.display_text = join_lines(visible_lines(&lines, first, metrics.max_lines));
        self.first_visible_line = first;
        self.caret = Some(CaretPlacement { grid, offset });
        self.metrics = Some(metrics);
        true
    }

    pub fn chars_per_line(&self) -> usize {
        self.metrics.map_or(0, |m| m.chars_per_line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> WidgetSettings {
        WidgetSettings {
            initial_font_size: 20.0,
            min_font_size: 10.0,
            shrink_start_words: 2,
            shrink_end_words: 12,
            min_chars_per_line: 1,
            min_lines: 1,
            ..default()
        }
    }

    fn measured(container: Vec2) -> LayoutInputs {
        LayoutInputs {
            // 20px font -> 10px wide glyphs, 20px lines
            glyph: Some(GlyphMetrics {
                width_per_px: 0.5,
                height_per_px: 1.0,
            }),
            container,
        }
    }

    #[test]
    fn skips_layout_until_measured() {
        let mut layout = LayoutState::default();
        let inputs = LayoutInputs {
            glyph: None,
            container: Vec2::new(100.0, 100.0),
        };
        let editor = EditorState::default();
        assert!(!layout.recompute(&editor, &inputs, &settings()));
        assert!(layout.metrics.is_none());
        assert_eq!(layout.font_size, 20.0);
    }

    #[test]
    fn lays_out_text_and_caret() {
        let inputs = measured(Vec2::new(100.0, 100.0));
        let mut layout = LayoutState::default();
        let mut editor = EditorState::default();
        editor.buffer.insert_str("abcdefghijklm");

        assert!(layout.recompute(&editor, &inputs, &settings()));
        assert_eq!(layout.chars_per_line(), 10);
        assert_eq!(layout.display_text, "abcdefghij\nklm");
        let caret = layout.caret.unwrap();
        assert_eq!(caret.grid, GridPosition { line: 1, column: 3 });
        assert_eq!(caret.offset, Vec2::new(30.0, 20.0));
    }

    #[test]
    fn scrolls_to_keep_caret_visible() {
        // 5 lines of 10 characters, only 2 fit
        let inputs = measured(Vec2::new(100.0, 40.0));
        let mut layout = LayoutState::default();
        let mut editor = EditorState::default();
        editor.buffer.insert_str(&"x".repeat(45));

        assert!(layout.recompute(&editor, &inputs, &settings()));
        assert_eq!(layout.first_visible_line, 3);
        assert_eq!(layout.display_text, format!("{}\n{}", "x".repeat(10), "x".repeat(5)));
        assert_eq!(layout.caret.unwrap().offset.y, 20.0);
    }

    #[test]
    fn rtl_caret_is_mirrored() {
        let inputs = measured(Vec2::new(100.0, 100.0));
        let mut layout = LayoutState::default();
        let mut editor = EditorState::default();
        editor.buffer.insert_str("שלו");
        assert!(editor.refresh_direction());

        assert!(layout.recompute(&editor, &inputs, &settings()));
        assert_eq!(layout.caret.unwrap().offset, Vec2::new(70.0, 0.0));
    }

    #[test]
    fn font_shrinks_with_word_count() {
        let inputs = measured(Vec2::new(400.0, 400.0));
        let mut layout = LayoutState::default();
        let mut editor = EditorState::default();
        editor.buffer.insert_str("one two");
        layout.recompute(&editor, &inputs, &settings());
        assert_eq!(layout.font_size, 20.0);

        editor.buffer.insert_str(" three four five six seven");
        layout.recompute(&editor, &inputs, &settings());
        assert!((layout.font_size - 15.0).abs() < 1e-4);
    }
}
