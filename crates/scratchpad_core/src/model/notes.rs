//! Notes blob model.
//!
//! # Responsibility
//! - Represent the whole persisted scratchpad state as one optional string.
//! - Own the JSON wire shape stored under the fixed key.
//!
//! # Invariants
//! - Absent notes serialize to JSON `null`, present notes to a JSON string.
//! - The empty string is a present value and round-trips as `""`.

use serde::{Deserialize, Serialize};

/// Fixed storage key holding the notes blob.
pub const NOTES_KEY: &str = "notes";

/// The entire persisted scratchpad content.
///
/// Serialized transparently, so the stored JSON is either a string or `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NotesBlob(pub Option<String>);

impl NotesBlob {
    pub fn new(notes: Option<String>) -> Self {
        Self(notes)
    }

    pub fn absent() -> Self {
        Self(None)
    }

    /// Returns the notes text, if any.
    pub fn as_deref(&self) -> Option<&str> {
        self.0.as_deref()
    }

    pub fn into_inner(self) -> Option<String> {
        self.0
    }

    /// Returns `true` when the blob has no usable text.
    ///
    /// Callers that guard transforms on presence treat `""` like absent.
    pub fn is_blank(&self) -> bool {
        self.0.as_deref().map_or(true, str::is_empty)
    }

    /// Character count used in log events in place of content.
    pub fn char_len(&self) -> usize {
        self.0.as_deref().map_or(0, |text| text.chars().count())
    }
}

impl From<Option<String>> for NotesBlob {
    fn from(value: Option<String>) -> Self {
        Self(value)
    }
}

impl From<&str> for NotesBlob {
    fn from(value: &str) -> Self {
        Self(Some(value.to_string()))
    }
}
