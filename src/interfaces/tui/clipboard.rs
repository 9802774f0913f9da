//! System clipboard backed by arboard

use arboard::Clipboard;

use crate::errors::ShortlyError;
use crate::views::ClipboardWriter;

/// Lazily opened system clipboard.
///
/// The handle is kept for the lifetime of the app: on X11 the copied text is
/// served by the owning handle and disappears when it is dropped.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<Clipboard>,
}

impl ClipboardWriter for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ShortlyError> {
        if self.inner.is_none() {
            let clipboard = Clipboard::new()
                .map_err(|e| ShortlyError::clipboard(format!("Clipboard unavailable: {}", e)))?;
            self.inner = Some(clipboard);
        }
        let Some(clipboard) = self.inner.as_mut() else {
            return Err(ShortlyError::clipboard("Clipboard unavailable"));
        };
        clipboard
            .set_text(text)
            .map_err(|e| ShortlyError::clipboard(format!("Failed to copy: {}", e)))
    }
}
