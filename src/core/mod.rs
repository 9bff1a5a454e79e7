//! Core application functionality
//!
//! This module contains the core application logic, including:
//! - Application initialization and configuration
//! - State management
//! - Settings and CLI handling
//! - Platform-specific error handling

pub mod app;
pub mod config;
pub mod platform;
pub mod runner;
pub mod state;

// Re-export commonly used items
pub use app::create_app;
pub use config::{CliArgs, ConfigFile, WidgetSettings};
pub use runner::run_app;
pub use state::{EditorState, LayoutInputs, LayoutState, TextBuffer};
