//! Clipboard merge rules and clipboard access port.
//!
//! # Responsibility
//! - Define how pasted text joins the existing notes.
//! - Abstract system clipboard access behind `ClipboardPort` so the session
//!   logic stays platform-agnostic.
//!
//! # Invariants
//! - Merge inserts no separator between existing and pasted text.
//! - Empty existing notes are treated as absent.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ClipboardResult<T> = Result<T, ClipboardError>;

/// Clipboard access failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    /// No clipboard backend could be opened.
    Unavailable(String),
    /// Clipboard is empty, non-text, or could not be read.
    Read(String),
    /// Clipboard rejected the write.
    Write(String),
}

impl Display for ClipboardError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unavailable(details) => write!(f, "clipboard unavailable: {details}"),
            Self::Read(details) => write!(f, "clipboard read failed: {details}"),
            Self::Write(details) => write!(f, "clipboard write failed: {details}"),
        }
    }
}

impl Error for ClipboardError {}

/// Platform clipboard text primitives.
pub trait ClipboardPort {
    /// Reads the current clipboard text.
    fn read_text(&mut self) -> ClipboardResult<String>;

    /// Replaces the clipboard content with `text`.
    fn write_text(&mut self, text: &str) -> ClipboardResult<()>;
}

/// Clipboard kept in process memory.
///
/// Backs headless callers and tests. An empty clipboard reads as a
/// `ClipboardError::Read`, matching platform backends.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryClipboard {
    content: Option<String>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            content: Some(text.into()),
        }
    }

    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }
}

impl ClipboardPort for MemoryClipboard {
    fn read_text(&mut self) -> ClipboardResult<String> {
        self.content
            .clone()
            .ok_or_else(|| ClipboardError::Read("clipboard is empty".to_string()))
    }

    fn write_text(&mut self, text: &str) -> ClipboardResult<()> {
        self.content = Some(text.to_string());
        Ok(())
    }
}

/// Appends `pasted` to `existing`, or returns `pasted` when there is nothing
/// to append to.
pub fn merge_on_paste(existing: Option<&str>, pasted: &str) -> String {
    match existing {
        Some(current) if !current.is_empty() => {
            let mut merged = String::with_capacity(current.len() + pasted.len());
            merged.push_str(current);
            merged.push_str(pasted);
            merged
        }
        _ => pasted.to_string(),
    }
}

/// Returns the text to place on the clipboard for a copy action.
pub fn extract_for_copy(current: Option<&str>) -> String {
    current.unwrap_or_default().to_string()
}
