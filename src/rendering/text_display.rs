//! Text surface rendering
//!
//! The container node is sized to the window minus margins and clips its
//! children. It holds the visible lines, a placeholder prompt for the empty
//! buffer, and the caret overlay.

use super::text_cursor::TextCaret;
use super::WidgetFont;
use crate::core::config::WidgetSettings;
use crate::core::state::{EditorState, LayoutInputs, LayoutState};
use crate::layout::TextDirection;
use crate::systems::keyboard_input::DirectionChanged;
use crate::ui::CurrentTheme;
use bevy::prelude::*;
use bevy::text::LineBreak;

/// Marker for the clipping container
#[derive(Component)]
pub struct TextContainer;

/// Marker for the node showing the buffer text
#[derive(Component)]
pub struct TextDisplay;

/// Marker for the prompt shown while the buffer is empty
#[derive(Component)]
pub struct Placeholder;

/// Justification matching the text direction
pub fn justify_for(direction: TextDirection) -> JustifyText {
    match direction {
        TextDirection::LeftToRight => JustifyText::Left,
        TextDirection::RightToLeft => JustifyText::Right,
    }
}

/// Text layout for the display and placeholder nodes.
///
/// Lines are already cut to the grid width, so the break mode never adds a
/// break. A wrapping mode keeps the text bounded by the node width, which
/// right justification aligns against; `NoWrap` text is unbounded and would
/// only align within its widest line.
pub fn text_layout_for(direction: TextDirection) -> TextLayout {
    TextLayout::new(justify_for(direction), LineBreak::AnyCharacter)
}

fn text_node() -> Node {
    Node {
        position_type: PositionType::Absolute,
        left: Val::Px(0.0),
        top: Val::Px(0.0),
        width: Val::Percent(100.0),
        ..default()
    }
}

/// Spawn the camera, the container and its children
pub fn spawn_text_widget(
    mut commands: Commands,
    font: Res<WidgetFont>,
    settings: Res<WidgetSettings>,
    theme: Res<CurrentTheme>,
    editor: Res<EditorState>,
) {
    let palette = theme.palette;
    let text_layout = text_layout_for(editor.text_direction());
    let text_font = TextFont {
        font: font.0.clone(),
        font_size: settings.initial_font_size,
        ..default()
    };

    commands.spawn((Camera2d, Name::new("WidgetCamera")));

    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(settings.container_margin),
                top: Val::Px(settings.container_margin),
                width: Val::Px(0.0),
                height: Val::Px(0.0),
                overflow: Overflow::clip(),
                ..default()
            },
            TextContainer,
            Name::new("TextContainer"),
        ))
        .with_children(|parent| {
            parent.spawn((
                text_node(),
                Text::new(""),
                text_font.clone(),
                TextColor(palette.text),
                text_layout,
                TextDisplay,
                Name::new("TextDisplay"),
            ));
            parent.spawn((
                text_node(),
                Text::new(settings.placeholder.clone()),
                text_font.clone(),
                TextColor(palette.placeholder),
                text_layout,
                Visibility::Inherited,
                Placeholder,
                Name::new("Placeholder"),
            ));
            parent.spawn((
                Node {
                    position_type: PositionType::Absolute,
                    left: Val::Px(0.0),
                    top: Val::Px(0.0),
                    width: Val::Px(settings.caret_width),
                    height: Val::Px(settings.initial_font_size),
                    ..default()
                },
                BackgroundColor(palette.caret),
                Visibility::Inherited,
                TextCaret,
                Name::new("TextCaret"),
            ));
        });

    debug!("Spawned text widget with {} theme", theme.variant.name());
}

/// Push the latest layout into the container, text and placeholder nodes
#[allow(clippy::type_complexity)]
pub fn update_text_display(
    layout: Res<LayoutState>,
    inputs: Res<LayoutInputs>,
    editor: Res<EditorState>,
    mut container_query: Query<&mut Node, With<TextContainer>>,
    mut display_query: Query<
        (&mut Text, &mut TextFont),
        (With<TextDisplay>, Without<Placeholder>),
    >,
    mut placeholder_query: Query<
        (&mut Visibility, &mut TextFont),
        (With<Placeholder>, Without<TextDisplay>),
    >,
) {
    if !(layout.is_changed() || inputs.is_changed()) {
        return;
    }

    for mut node in &mut container_query {
        node.width = Val::Px(inputs.container.x);
        node.height = Val::Px(inputs.container.y);
    }

    for (mut text, mut font) in &mut display_query {
        if text.0 != layout.display_text {
            text.0.clone_from(&layout.display_text);
        }
        if font.font_size != layout.font_size && layout.font_size > 0.0 {
            font.font_size = layout.font_size;
        }
    }

    let empty = editor.buffer.is_empty();
    for (mut visibility, mut font) in &mut placeholder_query {
        let wanted = if empty {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        };
        visibility.set_if_neq(wanted);
        if font.font_size != layout.font_size && layout.font_size > 0.0 {
            font.font_size = layout.font_size;
        }
    }
}

/// Restyle the text when the direction flips
pub fn apply_text_direction(
    mut direction_events: EventReader<DirectionChanged>,
    mut text_query: Query<&mut TextLayout, Or<(With<TextDisplay>, With<Placeholder>)>>,
) {
    let Some(DirectionChanged(direction)) = direction_events.read().last().copied() else {
        return;
    };
    let justify = justify_for(direction);
    for mut text_layout in &mut text_query {
        text_layout.justify = justify;
    }
    debug!("Text justified {:?}", justify);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rtl_text_is_right_justified() {
        assert_eq!(justify_for(TextDirection::LeftToRight), JustifyText::Left);
        assert_eq!(justify_for(TextDirection::RightToLeft), JustifyText::Right);
    }

    #[test]
    fn text_is_bounded_by_the_container_width() {
        for direction in [TextDirection::LeftToRight, TextDirection::RightToLeft] {
            let layout = text_layout_for(direction);
            assert_eq!(layout.linebreak, LineBreak::AnyCharacter);
            assert_eq!(layout.justify, justify_for(direction));
        }
    }
}
