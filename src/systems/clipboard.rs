//! System clipboard access for paste
//!
//! Native builds keep one `arboard::Clipboard` alive for the whole session
//! (X11 drops clipboard contents owned by a dropped handle). In the browser
//! there is no synchronous clipboard API, so paste reads nothing.

use bevy::prelude::*;

/// Non-send resource wrapping the platform clipboard
#[derive(Default)]
pub struct SystemClipboard {
    #[cfg(not(target_arch = "wasm32"))]
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        {
            let inner = match arboard::Clipboard::new() {
                Ok(clipboard) => Some(clipboard),
                Err(e) => {
                    warn!("Clipboard unavailable, paste is disabled: {}", e);
                    None
                }
            };
            Self { inner }
        }
        #[cfg(target_arch = "wasm32")]
        {
            Self::default()
        }
    }

    /// Current clipboard text, if any
    pub fn read_text(&mut self) -> Option<String> {
        #[cfg(not(target_arch = "wasm32"))]
        {
            let clipboard = self.inner.as_mut()?;
            match clipboard.get_text() {
                Ok(text) if !text.is_empty() => Some(text),
                Ok(_) => None,
                Err(e) => {
                    debug!("Clipboard read failed: {:?}", e);
                    None
                }
            }
        }
        #[cfg(target_arch = "wasm32")]
        {
            None
        }
    }
}

/// Startup system installing the clipboard
pub fn install_clipboard(world: &mut World) {
    world.insert_non_send_resource(SystemClipboard::new());
}
