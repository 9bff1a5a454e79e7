//! Application initialization and configuration

use crate::core::config::{CliArgs, ConfigFile, SettingsError, WidgetSettings};
use crate::core::state::EditorState;
use crate::logging::LogToFile;
use crate::rendering::{CaretBlink, FontSource};
use crate::systems::{configure_default_plugins, TextWidgetPlugin};
use crate::ui::CurrentTheme;
use anyhow::Result;
use bevy::prelude::*;
use bevy::winit::WinitSettings;

/// Creates a fully configured Bevy application ready to run
pub fn create_app(cli_args: CliArgs) -> Result<App> {
    #[cfg(not(target_arch = "wasm32"))]
    cli_args
        .validate()
        .map_err(|e| anyhow::anyhow!("CLI validation failed: {}", e))?;

    let config = ConfigFile::load();
    let settings = cli_args
        .build_settings(config.as_ref())
        .map_err(|reason| SettingsError {
            reason,
            settings_file: config.as_ref().map(|_| ConfigFile::config_path()),
        })?;

    let mut app = App::new();
    configure_resources(&mut app, cli_args, config.as_ref(), settings);
    app.add_plugins(configure_default_plugins())
        .add_plugins(TextWidgetPlugin);
    Ok(app)
}

/// Build the initial editor state, seeded with `initial_text`
pub fn initial_editor_state(settings: &WidgetSettings, initial_text: Option<&str>) -> EditorState {
    let mut editor = EditorState::new(settings);
    if let Some(text) = initial_text {
        editor.buffer.insert_str(text);
    }
    editor.refresh_direction();
    editor
}

/// Sets up application resources and configuration
fn configure_resources(
    app: &mut App,
    cli_args: CliArgs,
    config: Option<&ConfigFile>,
    settings: WidgetSettings,
) {
    let current_theme = CurrentTheme::new(cli_args.get_theme_variant(config));
    let editor = initial_editor_state(&settings, cli_args.text.as_deref());

    app.insert_resource(ClearColor(current_theme.palette.background))
        .insert_resource(current_theme)
        .insert_resource(editor)
        .insert_resource(FontSource(cli_args.get_font_path(config)))
        .insert_resource(CaretBlink::new(settings.caret_blink_secs))
        .insert_resource(LogToFile(cli_args.log_file))
        .insert_resource(settings);

    // Configure platform-specific window settings. The caret blink needs
    // regular wakeups while focused.
    #[cfg(not(target_arch = "wasm32"))]
    {
        use bevy::winit::UpdateMode;
        use std::time::Duration;
        app.insert_resource(WinitSettings {
            focused_mode: UpdateMode::reactive(Duration::from_millis(50)),
            unfocused_mode: UpdateMode::reactive_low_power(Duration::from_secs(1)),
        });
    }

    #[cfg(target_arch = "wasm32")]
    app.insert_resource(WinitSettings::game());
}
