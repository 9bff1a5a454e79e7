//! A minimalist text-entry widget built with Rust and Bevy.
//!
//! Type, and the words get smaller.

use tally::core;

fn main() {
    core::platform::init_panic_handling();
    let cli_args = core::platform::get_cli_args();
    match core::run_app(cli_args) {
        Ok(()) => {}
        Err(error) => core::platform::handle_error(error),
    }
}
