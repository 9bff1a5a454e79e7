//! Application state
//!
//! The text buffer and the layout derived from it, stored as Bevy resources.

pub mod editor_state;
pub mod text_buffer;

pub use editor_state::{CaretPlacement, EditorState, LayoutInputs, LayoutState};
pub use text_buffer::TextBuffer;
