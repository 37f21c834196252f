//! Popover action surface.
//!
//! # Responsibility
//! - Apply at most one action to a by-value notes snapshot.
//! - Report the optional replacement text and transient notice on dismissal.
//!
//! # Invariants
//! - Every action consumes the popover; it closes after one action.
//! - Copy never produces replacement text.
//! - Transforms on blank notes return the snapshot unchanged.

use crate::clipboard::{extract_for_copy, merge_on_paste, ClipboardError, ClipboardPort};
use crate::model::notes::NotesBlob;
use crate::text::normalize::{remove_empty_lines, trim_and_collapse_whitespace};
use log::{info, warn};
use std::time::Duration;

const COPY_NOTICE_MESSAGE: &str = "Notes copied to clipboard.";
const COPY_NOTICE_DURATION: Duration = Duration::from_millis(2000);

/// Where a transient notice is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticePosition {
    Top,
    Middle,
    Bottom,
}

/// Transient confirmation shown after copying.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyNotice {
    pub message: &'static str,
    pub duration: Duration,
    pub position: NoticePosition,
}

impl Default for CopyNotice {
    fn default() -> Self {
        Self {
            message: COPY_NOTICE_MESSAGE,
            duration: COPY_NOTICE_DURATION,
            position: NoticePosition::Bottom,
        }
    }
}

/// Result handed back to the editing surface when the popover closes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PopoverOutcome {
    /// Replacement notes. `None` keeps the caller's text.
    pub notes: Option<NotesBlob>,
    pub notice: Option<CopyNotice>,
    /// Clipboard failure behind a degraded paste or copy. Hosts decide
    /// whether to surface it.
    pub clipboard_error: Option<ClipboardError>,
}

impl PopoverOutcome {
    fn replace(notes: NotesBlob) -> Self {
        Self {
            notes: Some(notes),
            ..Self::default()
        }
    }
}

/// Popover holding its own copy of the notes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Popover {
    snapshot: NotesBlob,
}

impl Popover {
    pub fn new(snapshot: NotesBlob) -> Self {
        Self { snapshot }
    }

    pub fn snapshot(&self) -> &NotesBlob {
        &self.snapshot
    }

    /// Appends clipboard text to the snapshot.
    ///
    /// A failed clipboard read pastes nothing.
    pub fn paste(self, clipboard: &mut dyn ClipboardPort) -> PopoverOutcome {
        let (pasted, clipboard_error) = match clipboard.read_text() {
            Ok(text) => (text, None),
            Err(err) => {
                warn!(
                    "event=popover_paste module=session status=degraded error_code=clipboard_read_failed error={}",
                    err
                );
                (String::new(), Some(err))
            }
        };
        let merged = merge_on_paste(self.snapshot.as_deref(), &pasted);
        info!(
            "event=popover_paste module=session status=ok pasted_chars={}",
            pasted.chars().count()
        );
        PopoverOutcome {
            clipboard_error,
            ..PopoverOutcome::replace(NotesBlob::new(Some(merged)))
        }
    }

    /// Writes the snapshot to the clipboard and closes without a result.
    ///
    /// The notice is returned even when the write fails; the failure rides
    /// along in `clipboard_error`.
    pub fn copy(self, clipboard: &mut dyn ClipboardPort) -> PopoverOutcome {
        let text = extract_for_copy(self.snapshot.as_deref());
        let clipboard_error = match clipboard.write_text(&text) {
            Ok(()) => {
                info!(
                    "event=popover_copy module=session status=ok chars={}",
                    self.snapshot.char_len()
                );
                None
            }
            Err(err) => {
                warn!(
                    "event=popover_copy module=session status=error error_code=clipboard_write_failed error={}",
                    err
                );
                Some(err)
            }
        };
        PopoverOutcome {
            notes: None,
            notice: Some(CopyNotice::default()),
            clipboard_error,
        }
    }

    pub fn remove_empty_lines(self) -> PopoverOutcome {
        self.transform("remove_empty_lines", remove_empty_lines)
    }

    pub fn trim_whitespace(self) -> PopoverOutcome {
        self.transform("trim_whitespace", trim_and_collapse_whitespace)
    }

    /// Closes without any action.
    pub fn dismiss(self) -> PopoverOutcome {
        PopoverOutcome::default()
    }

    fn transform(self, name: &str, f: fn(&str) -> String) -> PopoverOutcome {
        if self.snapshot.is_blank() {
            info!("event=popover_{name} module=session status=skipped reason=blank");
            return PopoverOutcome::replace(self.snapshot);
        }
        let before = self.snapshot.char_len();
        let transformed = NotesBlob::new(self.snapshot.as_deref().map(f));
        info!(
            "event=popover_{name} module=session status=ok chars_before={} chars_after={}",
            before,
            transformed.char_len()
        );
        PopoverOutcome::replace(transformed)
    }
}

#[cfg(test)]
mod tests {
    use super::{NoticePosition, Popover};
    use crate::clipboard::{ClipboardError, ClipboardPort, ClipboardResult, MemoryClipboard};
    use crate::model::notes::NotesBlob;
    use std::time::Duration;

    struct BrokenClipboard;

    impl ClipboardPort for BrokenClipboard {
        fn read_text(&mut self) -> ClipboardResult<String> {
            Err(ClipboardError::Read("permission denied".to_string()))
        }

        fn write_text(&mut self, _text: &str) -> ClipboardResult<()> {
            Err(ClipboardError::Write("permission denied".to_string()))
        }
    }

    #[test]
    fn paste_appends_clipboard_text() {
        let mut clipboard = MemoryClipboard::with_text("cd");
        let outcome = Popover::new(NotesBlob::from("ab")).paste(&mut clipboard);
        assert_eq!(outcome.notes, Some(NotesBlob::from("abcd")));
    }

    #[test]
    fn paste_with_failed_read_keeps_text() {
        let outcome = Popover::new(NotesBlob::from("ab")).paste(&mut BrokenClipboard);
        assert_eq!(outcome.notes, Some(NotesBlob::from("ab")));
        assert!(matches!(outcome.clipboard_error, Some(ClipboardError::Read(_))));
    }

    #[test]
    fn copy_writes_clipboard_and_returns_notice_only() {
        let mut clipboard = MemoryClipboard::new();
        let outcome = Popover::new(NotesBlob::from("hello")).copy(&mut clipboard);
        assert_eq!(clipboard.content(), Some("hello"));
        assert_eq!(outcome.notes, None);
        assert_eq!(outcome.clipboard_error, None);
        let notice = outcome.notice.expect("copy shows a notice");
        assert_eq!(notice.message, "Notes copied to clipboard.");
        assert_eq!(notice.duration, Duration::from_secs(2));
        assert_eq!(notice.position, NoticePosition::Bottom);
    }

    #[test]
    fn copy_failure_keeps_notice_and_reports_error() {
        let outcome = Popover::new(NotesBlob::from("hello")).copy(&mut BrokenClipboard);
        assert!(outcome.notice.is_some());
        assert_eq!(outcome.notes, None);
        assert!(matches!(outcome.clipboard_error, Some(ClipboardError::Write(_))));
    }

    #[test]
    fn transforms_on_absent_notes_return_snapshot() {
        let outcome = Popover::new(NotesBlob::absent()).trim_whitespace();
        assert_eq!(outcome.notes, Some(NotesBlob::absent()));
    }

    #[test]
    fn dismiss_returns_no_result() {
        let outcome = Popover::new(NotesBlob::from("x")).dismiss();
        assert_eq!(outcome.notes, None);
        assert_eq!(outcome.notice, None);
    }
}
