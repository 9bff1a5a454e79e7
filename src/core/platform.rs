//! Platform entry points: panic hook, startup error reporting and argument
//! parsing for native and web builds.

use crate::core::config::{CliArgs, SettingsError};

/// Install the browser console panic hook on wasm. No-op natively.
pub fn init_panic_handling() {
    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
    }
}

/// Lines describing why Tally failed to start, with a hint on how to fix it
pub fn startup_report(error: &anyhow::Error) -> Vec<String> {
    let mut lines = vec!["Error starting Tally:".to_string(), error.to_string()];
    match error.downcast_ref::<SettingsError>() {
        Some(SettingsError {
            settings_file: Some(path),
            ..
        }) => {
            lines.push(format!("Check the values in {}", path.display()));
        }
        Some(SettingsError {
            settings_file: None,
            ..
        }) => {
            lines.push("Run with --new-config to write a settings file with the defaults.".into());
        }
        None => {
            lines.push("Try running with --help for usage information.".into());
        }
    }
    lines
}

/// Report a startup error: stderr and exit code 1 natively, the browser
/// console on wasm.
pub fn handle_error(error: anyhow::Error) {
    let report = startup_report(&error);

    #[cfg(not(target_arch = "wasm32"))]
    {
        eprintln!();
        for line in &report {
            eprintln!("{line}");
        }
        eprintln!();
        std::process::exit(1);
    }
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::console::error_1(&report.join("\n").into());
    }
}

/// Parsed flags natively; the browser has no command line, so web builds
/// start from the defaults.
pub fn get_cli_args() -> CliArgs {
    #[cfg(not(target_arch = "wasm32"))]
    {
        use clap::Parser;
        CliArgs::parse()
    }
    #[cfg(target_arch = "wasm32")]
    {
        CliArgs::default_for_web()
    }
}
