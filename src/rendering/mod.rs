//! Rendering of the text surface and the caret overlay

pub mod text_cursor;
pub mod text_display;

use bevy::prelude::*;
use std::path::PathBuf;

pub use text_cursor::{CaretBlink, TextCaret};
pub use text_display::{Placeholder, TextContainer, TextDisplay};

/// Font file requested on the command line or in settings.json
#[derive(Resource, Debug, Clone, Default)]
pub struct FontSource(pub Option<PathBuf>);

/// Font handle shared by the display and the glyph probe
#[derive(Resource, Debug, Clone, Default)]
pub struct WidgetFont(pub Handle<Font>);

/// Load the configured font, falling back to Bevy's built-in font
pub fn load_widget_font(
    mut commands: Commands,
    source: Res<FontSource>,
    mut fonts: ResMut<Assets<Font>>,
) {
    let handle = match &source.0 {
        Some(path) => match load_font_file(path) {
            Ok(font) => {
                info!("Using font {:?}", path);
                fonts.add(font)
            }
            Err(e) => {
                warn!("Failed to load font {:?}, using built-in font: {}", path, e);
                Handle::default()
            }
        },
        None => Handle::default(),
    };
    commands.insert_resource(WidgetFont(handle));
}

fn load_font_file(path: &std::path::Path) -> anyhow::Result<Font> {
    let bytes = std::fs::read(path)?;
    Font::try_from_bytes(bytes).map_err(|e| anyhow::anyhow!("{:?}", e))
}
