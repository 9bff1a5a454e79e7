//! Bevy Systems and Plugins
//!
//! This module contains Bevy-specific systems and plugin configurations:
//! - Plugin management and configuration
//! - Keyboard and clipboard input
//! - Glyph measurement
//! - Layout recomputation on edits and resizes

pub mod clipboard;
pub mod glyph_probe;
pub mod keyboard_input;
pub mod layout_systems;
pub mod plugins;

// Re-export commonly used items
pub use keyboard_input::{
    apply_command, command_for_key, BufferEdited, DirectionChanged, EditCommand,
};
pub use plugins::{configure_default_plugins, TextWidgetPlugin, WidgetSystemSet};
