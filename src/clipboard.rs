use log::debug;

use crate::error::{PassforgeError, Result};

pub trait Clipboard {
    fn set_text(&mut self, text: &str) -> Result<()>;
}

#[cfg(feature = "clipboard")]
struct SystemClipboard(arboard::Clipboard);

#[cfg(feature = "clipboard")]
impl Clipboard for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        self.0
            .set_text(text.to_owned())
            .map_err(|e| PassforgeError::clipboard_unavailable(e.to_string()))
    }
}

/// Opens the system clipboard, checking availability at the point of use.
#[cfg(feature = "clipboard")]
pub fn system_clipboard() -> Result<Box<dyn Clipboard>> {
    match arboard::Clipboard::new() {
        Ok(inner) => {
            debug!("system clipboard opened");
            Ok(Box::new(SystemClipboard(inner)))
        }
        Err(e) => {
            debug!("system clipboard unavailable: {}", e);
            Err(PassforgeError::clipboard_unavailable(e.to_string()))
        }
    }
}

#[cfg(not(feature = "clipboard"))]
pub fn system_clipboard() -> Result<Box<dyn Clipboard>> {
    debug!("built without clipboard support");
    Err(PassforgeError::clipboard_unavailable(
        "built without the `clipboard` feature",
    ))
}
