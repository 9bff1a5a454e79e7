//! Glyph probe
//!
//! A hidden text node holding a short run of characters. After each UI layout
//! pass its computed size is turned into per-pixel glyph ratios, which the
//! layout uses to size the character grid at any font size.

use crate::core::config::WidgetSettings;
use crate::core::state::LayoutInputs;
use crate::layout::GlyphMetrics;
use crate::rendering::WidgetFont;
use bevy::prelude::*;

/// Characters measured by the probe
pub const PROBE_TEXT: &str = "0123456789";

/// Marker for the probe node
#[derive(Component)]
pub struct GlyphProbe;

/// Spawn the hidden probe at the initial (largest) font size
pub fn spawn_glyph_probe(
    mut commands: Commands,
    font: Res<WidgetFont>,
    settings: Res<WidgetSettings>,
) {
    commands.spawn((
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(0.0),
            top: Val::Px(0.0),
            ..default()
        },
        Text::new(PROBE_TEXT),
        TextFont {
            font: font.0.clone(),
            font_size: settings.initial_font_size,
            ..default()
        },
        TextLayout::new_with_no_wrap(),
        Visibility::Hidden,
        GlyphProbe,
        Name::new("GlyphProbe"),
    ));
    debug!("Spawned glyph probe at {}px", settings.initial_font_size);
}

/// Read the probe's computed size whenever UI layout changes it
pub fn measure_glyph_probe(
    probe_query: Query<(&ComputedNode, &TextFont), (With<GlyphProbe>, Changed<ComputedNode>)>,
    mut inputs: ResMut<LayoutInputs>,
) {
    let Ok((node, text_font)) = probe_query.single() else {
        return;
    };

    let measured = node.size() * node.inverse_scale_factor();
    let sample_len = PROBE_TEXT.chars().count();
    let Some(glyph) = GlyphMetrics::from_probe(measured, text_font.font_size, sample_len) else {
        return;
    };

    if inputs.glyph != Some(glyph) {
        info!(
            "Measured glyph: {:.3} x {:.3} per px of font size",
            glyph.width_per_px, glyph.height_per_px
        );
        inputs.glyph = Some(glyph);
    }
}
