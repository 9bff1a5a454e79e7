//! Plugin management and configuration for Tally
//!
//! Groups the widget systems into ordered sets and configures Bevy's default
//! plugins (window, logging) for native and web builds.

use bevy::log::{Level, LogPlugin};
use bevy::prelude::*;

use super::clipboard::install_clipboard;
use super::glyph_probe::{measure_glyph_probe, spawn_glyph_probe};
use super::keyboard_input::{handle_keyboard_input, BufferEdited, DirectionChanged};
use super::layout_systems::{recompute_layout, track_container_size};
use crate::core::config::{DEFAULT_WINDOW_SIZE, WINDOW_TITLE};
use crate::core::state::{LayoutInputs, LayoutState};
use crate::logging::file_log_layer;
use crate::rendering::text_cursor::{blink_caret, position_caret, CaretBlink};
use crate::rendering::text_display::{apply_text_direction, spawn_text_widget, update_text_display};
use crate::rendering::load_widget_font;

/// Configure logging with performance optimization for release builds
pub fn configure_logging() -> LogPlugin {
    #[cfg(debug_assertions)]
    {
        LogPlugin {
            level: Level::INFO,
            filter: "tally=info,bevy_render=warn,bevy_winit=warn,wgpu=warn,winit=warn,bevy_ecs::error::handler=error".to_string(),
            custom_layer: file_log_layer,
            ..default()
        }
    }

    #[cfg(not(debug_assertions))]
    {
        LogPlugin {
            level: Level::WARN,
            filter: "tally=warn,bevy=warn,wgpu=error,winit=error,bevy_ecs::error::handler=error".to_string(),
            custom_layer: file_log_layer,
            ..default()
        }
    }
}

/// Configure default Bevy plugins for the application
pub fn configure_default_plugins() -> bevy::app::PluginGroupBuilder {
    DefaultPlugins
        .set(WindowPlugin {
            primary_window: Some(Window {
                title: WINDOW_TITLE.into(),
                resolution: (DEFAULT_WINDOW_SIZE.x, DEFAULT_WINDOW_SIZE.y).into(),
                // Tell wasm to resize the window according to the available canvas
                fit_canvas_to_parent: true,
                // Tells wasm not to override default event handling, like F5, Ctrl+R etc.
                prevent_default_event_handling: false,
                ..default()
            }),
            ..default()
        })
        .set(configure_logging())
}

/// Ordering of the per-frame widget work: input, measurement, layout, paint
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum WidgetSystemSet {
    Input,
    Measure,
    Layout,
    Render,
}

/// Main widget plugin
///
/// Expects `WidgetSettings`, `EditorState`, `CurrentTheme` and `FontSource`
/// to be inserted by the app builder.
pub struct TextWidgetPlugin;

impl Plugin for TextWidgetPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LayoutInputs>()
            .init_resource::<LayoutState>()
            .init_resource::<CaretBlink>()
            .add_event::<BufferEdited>()
            .add_event::<DirectionChanged>()
            .configure_sets(
                Update,
                (
                    WidgetSystemSet::Input,
                    WidgetSystemSet::Measure,
                    WidgetSystemSet::Layout,
                    WidgetSystemSet::Render,
                )
                    .chain(),
            )
            .add_systems(
                Startup,
                (
                    install_clipboard,
                    load_widget_font,
                    (spawn_glyph_probe, spawn_text_widget),
                )
                    .chain(),
            )
            .add_systems(
                Update,
                (
                    handle_keyboard_input.in_set(WidgetSystemSet::Input),
                    (track_container_size, measure_glyph_probe).in_set(WidgetSystemSet::Measure),
                    recompute_layout.in_set(WidgetSystemSet::Layout),
                    (
                        apply_text_direction,
                        update_text_display,
                        position_caret,
                        blink_caret,
                    )
                        .in_set(WidgetSystemSet::Render),
                ),
            );
    }
}
