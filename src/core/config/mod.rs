//! Application configuration management
//!
//! This module handles all configuration aspects:
//! - CLI arguments parsing
//! - User configuration files
//! - Widget settings

pub mod cli;
pub mod settings;
pub mod user_config;

pub use cli::CliArgs;
pub use settings::{SettingsError, WidgetSettings, DEFAULT_WINDOW_SIZE, WINDOW_TITLE};
pub use user_config::ConfigFile;
