//! Application logging functionality
//!
//! Handles the optional log file under ~/.config/tally/logs/. The file layer
//! is attached to Bevy's `LogPlugin` through its `custom_layer` hook.

use bevy::log::BoxedLayer;
use bevy::prelude::*;
use std::path::PathBuf;

/// Resource telling the log plugin whether to write a log file
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct LogToFile(pub bool);

/// Get the path to the logs directory
pub fn logs_dir() -> PathBuf {
    crate::core::config::ConfigFile::config_dir().join("logs")
}

/// Prefix of the daily log files
pub const LOG_FILE_PREFIX: &str = "tally.log";

/// `LogPlugin::custom_layer` hook adding a daily rolling file writer.
///
/// Runs before the log plugin installs its subscriber, so failures are
/// reported on stderr rather than through `tracing`.
pub fn file_log_layer(app: &mut App) -> Option<BoxedLayer> {
    let enabled = app
        .world()
        .get_resource::<LogToFile>()
        .is_some_and(|setting| setting.0);
    if !enabled {
        return None;
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        use tracing_subscriber::Layer;

        let dir = logs_dir();
        if let Err(e) = std::fs::create_dir_all(&dir) {
            eprintln!("Failed to create log directory {:?}: {}", dir, e);
            return None;
        }
        let appender = tracing_appender::rolling::daily(&dir, LOG_FILE_PREFIX);
        eprintln!(
            "=== Tally started at {} ===\nLogs written to: {:?}",
            chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC"),
            dir
        );
        Some(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(appender)
                .boxed(),
        )
    }

    #[cfg(target_arch = "wasm32")]
    {
        None
    }
}
