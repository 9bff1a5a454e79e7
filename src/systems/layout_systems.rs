//! Layout systems
//!
//! Track the container size from the window and rebuild `LayoutState` when
//! any of its inputs change.

use crate::core::config::WidgetSettings;
use crate::core::state::{EditorState, LayoutInputs, LayoutState};
use bevy::prelude::*;
use bevy::window::{PrimaryWindow, WindowResized};

/// Update the container size on window resize (and on the first frame)
pub fn track_container_size(
    mut resize_events: EventReader<WindowResized>,
    windows: Query<&Window, With<PrimaryWindow>>,
    settings: Res<WidgetSettings>,
    mut inputs: ResMut<LayoutInputs>,
) {
    let resized = resize_events.read().count() > 0;
    if !resized && inputs.container != Vec2::ZERO && !settings.is_changed() {
        return;
    }
    let Ok(window) = windows.single() else {
        return;
    };

    let container = settings.container_size(Vec2::new(window.width(), window.height()));
    if inputs.container != container {
        debug!("Container resized to {:.0}x{:.0}", container.x, container.y);
        inputs.container = container;
    }
}

/// Rebuild the grid, visible text and caret placement
pub fn recompute_layout(
    editor: Res<EditorState>,
    inputs: Res<LayoutInputs>,
    settings: Res<WidgetSettings>,
    mut layout: ResMut<LayoutState>,
) {
    if !(editor.is_changed() || inputs.is_changed() || settings.is_changed()) {
        return;
    }

    if layout.recompute(&editor, &inputs, &settings) {
        if let Some(metrics) = layout.metrics {
            debug!(
                "Layout: {}px font, {}x{} grid, caret {:?}",
                metrics.font_size,
                metrics.chars_per_line,
                metrics.max_lines,
                layout.caret.map(|c| c.grid)
            );
        }
    }
}
