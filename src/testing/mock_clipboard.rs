use std::cell::RefCell;

use crate::domain::AppError;
use crate::ports::{CardBoard, ClipboardWriter};

/// Clipboard that records every write, or refuses them all.
#[derive(Default)]
pub struct MockClipboard {
    pub writes: Vec<String>,
    pub unavailable: bool,
}

impl MockClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self { unavailable: true, ..Self::default() }
    }

    /// Current clipboard contents.
    pub fn get_written_text(&self) -> Option<String> {
        self.writes.last().cloned()
    }
}

impl ClipboardWriter for MockClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), AppError> {
        if self.unavailable {
            return Err(AppError::ClipboardError("no display to attach to".to_string()));
        }
        self.writes.push(text.to_string());
        Ok(())
    }
}

/// Card board that keeps posted descriptions in memory.
#[derive(Default)]
pub struct FakeCardBoard {
    pub posted: RefCell<Vec<String>>,
}

impl FakeCardBoard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CardBoard for FakeCardBoard {
    fn post_description(&self, text: &str) -> Result<(), AppError> {
        self.posted.borrow_mut().push(text.to_string());
        Ok(())
    }
}
