//! Widget settings
//!
//! Built-in defaults live here. The user settings file and CLI flags are
//! layered on top in `CliArgs::build_settings`.

use crate::layout::{FontScale, FontSizing, GridLimits};
use bevy::prelude::*;
use std::fmt;
use std::path::PathBuf;

pub const WINDOW_TITLE: &str = "Tally";
pub const DEFAULT_WINDOW_SIZE: Vec2 = Vec2::new(1024.0, 768.0);

/// Font size while the text is short
pub const INITIAL_FONT_SIZE: f32 = 64.0;
/// Font size once the text is long
pub const MIN_FONT_SIZE: f32 = 20.0;
/// Largest font size accepted from settings
pub const MAX_FONT_SIZE: f32 = 512.0;
/// Word count where the font starts shrinking
pub const SHRINK_START_WORDS: usize = 8;
/// Word count where the font reaches `MIN_FONT_SIZE`
pub const SHRINK_END_WORDS: usize = 120;
/// Characters the grid should hold in capacity sizing mode
pub const TARGET_CAPACITY: usize = 600;
pub const MAX_CHARS: usize = 5000;

/// Runtime settings for the text widget
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct WidgetSettings {
    pub initial_font_size: f32,
    pub min_font_size: f32,
    pub shrink_start_words: usize,
    pub shrink_end_words: usize,
    pub sizing: FontSizing,
    pub target_capacity: usize,
    pub min_chars_per_line: usize,
    pub min_lines: usize,
    pub max_chars: usize,
    /// Space between the window edge and the text container
    pub container_margin: f32,
    pub caret_width: f32,
    /// Half period of the caret blink, zero disables blinking
    pub caret_blink_secs: f32,
    pub placeholder: String,
}

impl Default for WidgetSettings {
    fn default() -> Self {
        Self {
            initial_font_size: INITIAL_FONT_SIZE,
            min_font_size: MIN_FONT_SIZE,
            shrink_start_words: SHRINK_START_WORDS,
            shrink_end_words: SHRINK_END_WORDS,
            sizing: FontSizing::default(),
            target_capacity: TARGET_CAPACITY,
            min_chars_per_line: 8,
            min_lines: 2,
            max_chars: MAX_CHARS,
            container_margin: 48.0,
            caret_width: 3.0,
            caret_blink_secs: 0.53,
            placeholder: "Start typing…".to_string(),
        }
    }
}

impl WidgetSettings {
    pub fn font_scale(&self) -> FontScale {
        FontScale {
            initial_font_size: self.initial_font_size,
            min_font_size: self.min_font_size,
            shrink_start_words: self.shrink_start_words,
            shrink_end_words: self.shrink_end_words,
        }
    }

    pub fn grid_limits(&self) -> GridLimits {
        GridLimits {
            min_chars_per_line: self.min_chars_per_line,
            min_lines: self.min_lines,
        }
    }

    /// Container size for a window of `window` logical pixels
    pub fn container_size(&self, window: Vec2) -> Vec2 {
        (window - Vec2::splat(self.container_margin * 2.0)).max(Vec2::ZERO)
    }

    /// Check the settings are internally consistent
    pub fn validate(&self) -> Result<(), String> {
        if self.min_font_size.is_nan() || self.min_font_size <= 0.0 {
            return Err(format!(
                "Minimum font size must be positive, got {}",
                self.min_font_size
            ));
        }
        if !self.initial_font_size.is_finite() || self.initial_font_size > MAX_FONT_SIZE {
            return Err(format!(
                "Initial font size must be at most {}, got {}",
                MAX_FONT_SIZE, self.initial_font_size
            ));
        }
        if self.min_font_size > self.initial_font_size {
            return Err(format!(
                "Minimum font size ({}) is larger than the initial font size ({})",
                self.min_font_size, self.initial_font_size
            ));
        }
        if self.shrink_end_words < self.shrink_start_words {
            return Err(format!(
                "shrink_end_words ({}) must not be below shrink_start_words ({})",
                self.shrink_end_words, self.shrink_start_words
            ));
        }
        Ok(())
    }
}

/// Settings rejected by `WidgetSettings::validate`
#[derive(Debug, Clone, PartialEq)]
pub struct SettingsError {
    pub reason: String,
    /// The settings file that was layered in, if any
    pub settings_file: Option<PathBuf>,
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid settings: {}", self.reason)
    }
}

impl std::error::Error for SettingsError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(WidgetSettings::default().validate().is_ok());
    }

    #[test]
    fn inverted_font_bounds_are_rejected() {
        let settings = WidgetSettings {
            min_font_size: 80.0,
            ..default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn oversized_fonts_are_rejected() {
        for initial_font_size in [MAX_FONT_SIZE + 1.0, 1e9, f32::INFINITY, f32::NAN] {
            let settings = WidgetSettings {
                initial_font_size,
                ..default()
            };
            assert!(settings.validate().is_err(), "{initial_font_size} accepted");
        }

        let largest = WidgetSettings {
            initial_font_size: MAX_FONT_SIZE,
            ..default()
        };
        assert!(largest.validate().is_ok());
    }

    #[test]
    fn container_is_window_minus_margins() {
        let settings = WidgetSettings {
            container_margin: 10.0,
            ..default()
        };
        assert_eq!(
            settings.container_size(Vec2::new(200.0, 100.0)),
            Vec2::new(180.0, 80.0)
        );
        assert_eq!(settings.container_size(Vec2::new(5.0, 5.0)), Vec2::ZERO);
    }
}
