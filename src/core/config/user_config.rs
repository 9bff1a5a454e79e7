//! User configuration file handling
//!
//! Manages settings from ~/.config/tally/settings.json

use super::settings::WidgetSettings;
use crate::layout::FontSizing;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// User configuration from ~/.config/tally/settings.json
///
/// These settings override built-in defaults but are overridden by CLI arguments
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct ConfigFile {
    /// Default theme to use ("dark" or "light")
    pub default_theme: Option<String>,
    /// Path to a monospace font file used for the text
    pub font_path: Option<PathBuf>,
    pub sizing: Option<FontSizing>,
    pub initial_font_size: Option<f32>,
    pub min_font_size: Option<f32>,
    pub shrink_start_words: Option<usize>,
    pub shrink_end_words: Option<usize>,
    pub target_capacity: Option<usize>,
    pub min_chars_per_line: Option<usize>,
    pub min_lines: Option<usize>,
    pub max_chars: Option<usize>,
    pub container_margin: Option<f32>,
    pub caret_width: Option<f32>,
    pub caret_blink_secs: Option<f32>,
    pub placeholder: Option<String>,
}

impl ConfigFile {
    /// Get the path to the tally config directory
    pub fn config_dir() -> PathBuf {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")));
        config_dir.join("tally")
    }

    /// Get the path to the user config file
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("settings.json")
    }

    /// Load configuration from the user config file
    pub fn load() -> Option<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from `path`, logging and ignoring unreadable files
    pub fn load_from(path: &Path) -> Option<Self> {
        if !path.exists() {
            return None;
        }

        match fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(config) => {
                    debug!("Loaded user settings from {:?}", path);
                    Some(config)
                }
                Err(e) => {
                    warn!("Failed to parse settings.json: {}", e);
                    None
                }
            },
            Err(e) => {
                warn!("Failed to read settings.json: {}", e);
                None
            }
        }
    }

    /// Save configuration to the user config file
    pub fn save(&self) -> anyhow::Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents)?;

        debug!("Saved settings to {:?}", path);
        Ok(())
    }

    /// Apply every field that is set onto `settings`
    pub fn apply_to(&self, settings: &mut WidgetSettings) {
        if let Some(sizing) = self.sizing {
            settings.sizing = sizing;
        }
        if let Some(size) = self.initial_font_size {
            settings.initial_font_size = size;
        }
        if let Some(size) = self.min_font_size {
            settings.min_font_size = size;
        }
        if let Some(words) = self.shrink_start_words {
            settings.shrink_start_words = words;
        }
        if let Some(words) = self.shrink_end_words {
            settings.shrink_end_words = words;
        }
        if let Some(capacity) = self.target_capacity {
            settings.target_capacity = capacity;
        }
        if let Some(chars) = self.min_chars_per_line {
            settings.min_chars_per_line = chars;
        }
        if let Some(lines) = self.min_lines {
            settings.min_lines = lines;
        }
        if let Some(max_chars) = self.max_chars {
            settings.max_chars = max_chars;
        }
        if let Some(margin) = self.container_margin {
            settings.container_margin = margin;
        }
        if let Some(width) = self.caret_width {
            settings.caret_width = width;
        }
        if let Some(blink) = self.caret_blink_secs {
            settings.caret_blink_secs = blink;
        }
        if let Some(placeholder) = &self.placeholder {
            settings.placeholder = placeholder.clone();
        }
    }

    /// Initialize the user configuration directory
    ///
    /// This creates:
    /// 1. The ~/.config/tally directory
    /// 2. A settings.json file with the built-in defaults spelled out
    /// 3. A logs/ directory for `--log-file`
    pub fn initialize_config_directory() -> anyhow::Result<()> {
        let config_dir = Self::config_dir();
        fs::create_dir_all(&config_dir)?;
        println!("Created config directory: {:?}", config_dir);

        let logs_dir = crate::logging::logs_dir();
        fs::create_dir_all(&logs_dir)?;
        println!("Created logs directory: {:?}", logs_dir);

        let settings_path = Self::config_path();
        if !settings_path.exists() {
            Self::example().save_to(&settings_path)?;
            println!("Created settings file: {:?}", settings_path);
        } else {
            println!("Settings file already exists: {:?}", settings_path);
        }

        println!("\nConfiguration initialized successfully!");
        println!("You can now:");
        println!("  - Edit settings at: {:?}", settings_path);
        println!("  - View application logs in: {:?}", logs_dir);

        Ok(())
    }

    /// A config file that spells out the built-in defaults
    pub fn example() -> Self {
        let defaults = WidgetSettings::default();
        Self {
            default_theme: Some("dark".to_string()),
            font_path: None,
            sizing: Some(defaults.sizing),
            initial_font_size: Some(defaults.initial_font_size),
            min_font_size: Some(defaults.min_font_size),
            shrink_start_words: Some(defaults.shrink_start_words),
            shrink_end_words: Some(defaults.shrink_end_words),
            target_capacity: Some(defaults.target_capacity),
            min_chars_per_line: Some(defaults.min_chars_per_line),
            min_lines: Some(defaults.min_lines),
            max_chars: Some(defaults.max_chars),
            container_margin: Some(defaults.container_margin),
            caret_width: Some(defaults.caret_width),
            caret_blink_secs: Some(defaults.caret_blink_secs),
            placeholder: Some(defaults.placeholder),
        }
    }
}
