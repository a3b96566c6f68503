use arboard::Clipboard;

use crate::domain::AppError;
use crate::ports::ClipboardWriter;

/// System clipboard backed by arboard.
///
/// The handle is opened lazily so `--copy` failures surface only when copying.
#[derive(Default)]
pub struct ArboardClipboard {
    clipboard: Option<Clipboard>,
}

impl ArboardClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    fn handle(&mut self) -> Result<&mut Clipboard, AppError> {
        if self.clipboard.is_none() {
            let clipboard =
                Clipboard::new().map_err(|e| AppError::ClipboardError(format!("{}", e)))?;
            self.clipboard = Some(clipboard);
        }
        self.clipboard
            .as_mut()
            .ok_or_else(|| AppError::ClipboardError("clipboard unavailable".to_string()))
    }
}

impl ClipboardWriter for ArboardClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), AppError> {
        log::debug!("copying {} bytes to the clipboard", text.len());
        self.handle()?.set_text(text).map_err(|e| AppError::ClipboardError(format!("{}", e)))
    }
}
