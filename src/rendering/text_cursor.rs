//! Synthetic caret rendering
//!
//! The caret is a thin absolutely-positioned node inside the text container,
//! moved to the pixel offset computed by the layout and blinked on a timer.

use crate::core::config::WidgetSettings;
use crate::core::state::{EditorState, LayoutState};
use crate::layout::TextDirection;
use crate::systems::keyboard_input::BufferEdited;
use bevy::prelude::*;

/// Component to mark the caret node
#[derive(Component)]
pub struct TextCaret;

/// Blink state of the caret
#[derive(Resource, Debug, Clone)]
pub struct CaretBlink {
    timer: Option<Timer>,
    visible: bool,
}

impl CaretBlink {
    /// Blink with a half period of `secs`; zero or negative keeps it solid
    pub fn new(secs: f32) -> Self {
        let timer = (secs > 0.0).then(|| Timer::from_seconds(secs, TimerMode::Repeating));
        Self {
            timer,
            visible: true,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Show the caret and restart the period
    pub fn reset(&mut self) {
        self.visible = true;
        if let Some(timer) = self.timer.as_mut() {
            timer.reset();
        }
    }

    /// Advance by `delta`, returning the visibility afterwards
    pub fn tick(&mut self, delta: std::time::Duration) -> bool {
        if let Some(timer) = self.timer.as_mut() {
            timer.tick(delta);
            if timer.times_finished_this_tick() % 2 == 1 {
                self.visible = !self.visible;
            }
        }
        self.visible
    }
}

impl Default for CaretBlink {
    fn default() -> Self {
        Self::new(WidgetSettings::default().caret_blink_secs)
    }
}

/// Left edge of the caret node for a caret at `offset_x`.
///
/// In right-to-left text the caret sits just left of its insertion point so
/// it stays inside the container at the right edge.
pub fn caret_node_left(offset_x: f32, direction: TextDirection, caret_width: f32) -> f32 {
    match direction {
        TextDirection::LeftToRight => offset_x,
        TextDirection::RightToLeft => (offset_x - caret_width).max(0.0),
    }
}

/// Move the caret node to the current layout position
pub fn position_caret(
    layout: Res<LayoutState>,
    editor: Res<EditorState>,
    settings: Res<WidgetSettings>,
    mut caret_query: Query<&mut Node, With<TextCaret>>,
) {
    if !layout.is_changed() {
        return;
    }
    let (Some(caret), Some(metrics)) = (layout.caret, layout.metrics) else {
        return;
    };

    let left = caret_node_left(caret.offset.x, editor.text_direction(), settings.caret_width);
    for mut node in &mut caret_query {
        node.left = Val::Px(left);
        node.top = Val::Px(caret.offset.y);
        node.height = Val::Px(metrics.line_height);
    }
}

/// Blink the caret, keeping it solid right after an edit
pub fn blink_caret(
    time: Res<Time>,
    mut blink: ResMut<CaretBlink>,
    mut edits: EventReader<BufferEdited>,
    layout: Res<LayoutState>,
    mut caret_query: Query<&mut Visibility, With<TextCaret>>,
) {
    if edits.read().count() > 0 {
        blink.reset();
    }
    let visible = blink.tick(time.delta()) && layout.caret.is_some();

    let wanted = if visible {
        Visibility::Inherited
    } else {
        Visibility::Hidden
    };
    for mut visibility in &mut caret_query {
        visibility.set_if_neq(wanted);
    }
}
