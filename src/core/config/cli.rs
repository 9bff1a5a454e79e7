//! Command line interface for Tally
//!
//! Handles parsing command line arguments and provides validation for user
//! inputs. Flags override the user settings file, which overrides the
//! built-in defaults.

use super::settings::WidgetSettings;
use super::user_config::ConfigFile;
use crate::layout::FontSizing;
use crate::ui::ThemeVariant;
use bevy::prelude::*;
use clap::Parser;
use std::path::PathBuf;

/// Tally CLI arguments
///
/// Examples:
///   tally                               # Empty widget, dark theme
///   tally --theme light                 # Use the light theme
///   tally --font ~/Fonts/Mono.ttf       # Render with a custom monospace font
///   tally --sizing capacity             # Fit the font to a character budget
///   tally --text "שלום"                 # Start with some text
#[derive(Parser, Debug, Clone, Default)]
#[clap(
    name = "tally",
    version,
    about = "A minimalist text-entry widget built with Bevy",
    long_about = "Tally lays typed text out on a fixed-width grid, shrinks the font as the word count grows, switches to right-to-left layout for Hebrew, and draws its own caret."
)]
pub struct CliArgs {
    /// Path to a monospace font file (.ttf or .otf)
    ///
    /// The built-in font has no Hebrew glyphs; supply a font that covers
    /// the scripts you type.
    #[clap(
        long = "font",
        short = 'f',
        help = "Monospace font file to render with",
        long_help = "Path to a monospace .ttf or .otf font file. The built-in font only covers Latin text, so supply a font with Hebrew coverage for right-to-left input."
    )]
    pub font: Option<PathBuf>,

    /// Theme to use for the interface
    #[clap(
        long = "theme",
        short = 't',
        help = "Theme to use",
        long_help = "Theme to use for the interface. Available themes: dark (default), light"
    )]
    pub theme: Option<String>,

    /// Font sizing strategy
    #[clap(
        long = "sizing",
        short = 's',
        help = "Font sizing strategy: word-count or capacity",
        long_help = "How the font size is chosen. 'word-count' (default) shrinks the font linearly as more words are typed. 'capacity' picks the largest font whose grid holds the target character capacity in the current window."
    )]
    pub sizing: Option<String>,

    /// Text to start with
    #[clap(long = "text", help = "Initial text in the buffer")]
    pub text: Option<String>,

    /// Initialize user configuration directory with settings
    #[clap(
        long = "new-config",
        help = "Initialize user config directory with settings",
        long_help = "Initialize the ~/.config/tally directory with a settings.json file spelling out every default, and a logs directory."
    )]
    pub new_config: bool,

    /// Write logs to a daily rolling file in the config directory
    #[clap(
        long = "log-file",
        help = "Also write logs to ~/.config/tally/logs/",
        long_help = "Also write logs to a daily rolling file under ~/.config/tally/logs/. Not available in the browser."
    )]
    pub log_file: bool,
}

impl CliArgs {
    /// Validate the CLI arguments after parsing
    ///
    /// This ensures that all paths exist and names are known before the
    /// application starts, providing clear error messages for common mistakes.
    pub fn validate(&self) -> Result<(), String> {
        if let Some(path) = &self.font {
            if !path.is_file() {
                return Err(format!(
                    "Font file does not exist: {}\nMake sure the path is correct and points to a .ttf or .otf file.",
                    path.display()
                ));
            }
        }

        if let Some(theme_name) = &self.theme {
            if ThemeVariant::parse(theme_name).is_none() {
                let available_themes = ThemeVariant::all_names().join(", ");
                return Err(format!(
                    "Unknown theme: '{theme_name}'\nAvailable themes: {available_themes}"
                ));
            }
        }

        if let Some(sizing) = &self.sizing {
            if FontSizing::parse(sizing).is_none() {
                let available = FontSizing::all_names().join(", ");
                return Err(format!(
                    "Unknown sizing strategy: '{sizing}'\nAvailable strategies: {available}"
                ));
            }
        }

        Ok(())
    }

    /// Create default CLI args for web builds
    ///
    /// Command line arguments are not available in the browser environment.
    #[cfg(target_arch = "wasm32")]
    pub fn default_for_web() -> Self {
        Self::default()
    }

    /// Get the theme variant from CLI args, config file, or default
    ///
    /// Priority order:
    /// 1. CLI argument (--theme)
    /// 2. Config file setting (~/.config/tally/settings.json)
    /// 3. Built-in default (dark theme)
    pub fn get_theme_variant(&self, config: Option<&ConfigFile>) -> ThemeVariant {
        if let Some(variant) = self.theme.as_deref().and_then(ThemeVariant::parse) {
            debug!("Using theme from CLI: {}", variant.name());
            return variant;
        }

        if let Some(theme_name) = config.and_then(|c| c.default_theme.as_deref()) {
            if let Some(variant) = ThemeVariant::parse(theme_name) {
                debug!("Using theme from config file: {}", theme_name);
                return variant;
            }
            warn!("Ignoring unknown theme '{}' in settings.json", theme_name);
        }

        debug!("Using default theme: dark");
        ThemeVariant::default()
    }

    /// Font file from CLI args or config file
    pub fn get_font_path(&self, config: Option<&ConfigFile>) -> Option<PathBuf> {
        self.font
            .clone()
            .or_else(|| config.and_then(|c| c.font_path.clone()))
    }

    /// Build widget settings from defaults, the config file and CLI flags
    pub fn build_settings(&self, config: Option<&ConfigFile>) -> Result<WidgetSettings, String> {
        let mut settings = WidgetSettings::default();
        if let Some(config) = config {
            config.apply_to(&mut settings);
        }
        if let Some(sizing) = self.sizing.as_deref().and_then(FontSizing::parse) {
            settings.sizing = sizing;
        }
        settings.validate()?;
        Ok(settings)
    }
}
