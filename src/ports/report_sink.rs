//! Destinations for the formatted branch report besides the terminal.

use crate::domain::AppError;

/// Port for writing to the system clipboard.
pub trait ClipboardWriter {
    /// Replace the clipboard contents with `text`.
    fn write_text(&mut self, text: &str) -> Result<(), AppError>;
}

/// Port for a card board that stores the report as a card description.
pub trait CardBoard {
    fn post_description(&self, text: &str) -> Result<(), AppError>;
}
