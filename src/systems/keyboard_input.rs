//! Keyboard input handling for the text widget
//!
//! Key events are translated into `EditCommand`s, which are applied to the
//! buffer by a pure function so the editing rules can be tested without a
//! running app.

use super::clipboard::SystemClipboard;
use crate::core::state::{EditorState, LayoutState, TextBuffer};
use crate::layout::TextDirection;
use bevy::input::keyboard::{Key, KeyboardInput};
use bevy::input::ButtonState;
use bevy::prelude::*;

/// A single editing action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditCommand {
    Insert(String),
    Backspace,
    Delete,
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
    Paste,
    Clear,
}

/// Sent when the buffer switches between left-to-right and right-to-left
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirectionChanged(pub TextDirection);

/// Sent after any command changed the buffer or moved the caret
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct BufferEdited;

/// Map a logical key to an edit command.
///
/// `shortcut` is true while Ctrl (or Cmd on macOS) is held. Enter is not
/// mapped: the grid has no hard line breaks.
pub fn command_for_key(key: &Key, shortcut: bool) -> Option<EditCommand> {
    match key {
        Key::Character(text) if shortcut => {
            text.eq_ignore_ascii_case("v").then_some(EditCommand::Paste)
        }
        Key::Character(text) => Some(EditCommand::Insert(text.to_string())),
        Key::Space => Some(EditCommand::Insert(" ".to_string())),
        Key::Backspace if shortcut => Some(EditCommand::Clear),
        Key::Backspace => Some(EditCommand::Backspace),
        Key::Delete => Some(EditCommand::Delete),
        Key::ArrowLeft => Some(EditCommand::Left),
        Key::ArrowRight => Some(EditCommand::Right),
        Key::ArrowUp => Some(EditCommand::Up),
        Key::ArrowDown => Some(EditCommand::Down),
        Key::Home => Some(EditCommand::Home),
        Key::End => Some(EditCommand::End),
        Key::Paste => Some(EditCommand::Paste),
        _ => None,
    }
}

/// Apply `command` to `buffer`. Returns true if the text or caret changed.
///
/// Horizontal arrows follow the visual direction, so in right-to-left text
/// the left arrow moves towards the end of the buffer. `Paste` has no text of
/// its own and must be resolved to `Insert` by the caller.
pub fn apply_command(
    buffer: &mut TextBuffer,
    command: &EditCommand,
    chars_per_line: usize,
    direction: TextDirection,
) -> bool {
    let before = (buffer.len(), buffer.caret());
    match command {
        EditCommand::Insert(text) => {
            return buffer.insert_str(text) > 0;
        }
        EditCommand::Backspace => {
            return buffer.delete_backward();
        }
        EditCommand::Delete => {
            return buffer.delete_forward();
        }
        EditCommand::Left | EditCommand::Right => {
            let forward = (*command == EditCommand::Right) != direction.is_rtl();
            if forward {
                buffer.move_right();
            } else {
                buffer.move_left();
            }
        }
        EditCommand::Up => buffer.move_up(chars_per_line),
        EditCommand::Down => buffer.move_down(chars_per_line),
        EditCommand::Home => buffer.move_to_start(),
        EditCommand::End => buffer.move_to_end(),
        EditCommand::Clear => {
            if buffer.is_empty() {
                return false;
            }
            buffer.clear();
            return true;
        }
        EditCommand::Paste => return false,
    }
    before != (buffer.len(), buffer.caret())
}

/// Read key presses and apply them to the buffer
pub fn handle_keyboard_input(
    mut key_events: EventReader<KeyboardInput>,
    keys: Res<ButtonInput<KeyCode>>,
    mut editor: ResMut<EditorState>,
    layout: Res<LayoutState>,
    mut clipboard: Option<NonSendMut<SystemClipboard>>,
    mut edited: EventWriter<BufferEdited>,
    mut direction_changed: EventWriter<DirectionChanged>,
) {
    let shortcut = keys.any_pressed([
        KeyCode::ControlLeft,
        KeyCode::ControlRight,
        KeyCode::SuperLeft,
        KeyCode::SuperRight,
    ]);

    let commands: Vec<EditCommand> = key_events
        .read()
        .filter(|ev| ev.state == ButtonState::Pressed)
        .filter_map(|ev| command_for_key(&ev.logical_key, shortcut))
        .collect();
    if commands.is_empty() {
        return;
    }

    let chars_per_line = layout.chars_per_line();
    let mut changed = false;
    for command in commands {
        let command = match command {
            EditCommand::Paste => {
                let Some(text) = clipboard.as_mut().and_then(|c| c.read_text()) else {
                    debug!("Paste requested but the clipboard has no text");
                    continue;
                };
                EditCommand::Insert(text)
            }
            other => other,
        };
        let direction = editor.text_direction();
        changed |= apply_command(&mut editor.buffer, &command, chars_per_line, direction);
    }

    if !changed {
        return;
    }
    edited.write(BufferEdited);
    if editor.refresh_direction() {
        let direction = editor.text_direction();
        info!("Text direction is now {:?}", direction);
        direction_changed.write(DirectionChanged(direction));
    }
}
