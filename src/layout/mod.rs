//! Text layout: font sizing, grid metrics, line formatting, caret placement
//! and direction detection.
//!
//! Everything here is a pure function of its inputs. The Bevy systems in
//! `crate::systems` feed it measurements and apply its results to the UI.

pub mod caret;
pub mod direction;
pub mod font_size;
pub mod lines;
pub mod metrics;

pub use caret::{caret_offset, grid_position, GridPosition};
pub use direction::{contains_hebrew, DirectionState, TextDirection};
pub use font_size::{font_size_for_capacity, font_size_for_word_count, FontScale, FontSizing};
pub use lines::{first_visible_line, join_lines, line_count, split_lines, visible_lines};
pub use metrics::{GlyphMetrics, GridLimits, LayoutMetrics};
