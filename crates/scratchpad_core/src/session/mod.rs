//! Editing session over the single notes blob.
//!
//! # Responsibility
//! - Hold the in-memory notes of the editing surface.
//! - Hand by-value snapshots to the popover and merge its result back.
//! - Gate destructive clears behind an explicit confirmation.
//!
//! # Invariants
//! - The popover never aliases the session text; it owns a copy.
//! - Every edit change is written through to the store.

mod confirm;
mod popover;
mod scratchpad;

pub use confirm::{ClearChoice, ClearPrompt};
pub use popover::{CopyNotice, NoticePosition, Popover, PopoverOutcome};
pub use scratchpad::Scratchpad;

use serde::Deserialize;

/// When an applied popover result or a confirmed clear reaches storage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PersistPolicy {
    /// Save as soon as the session text changes.
    #[default]
    Immediate,
    /// Keep the change in memory until the next edit change or `flush`.
    OnNextEdit,
}

impl PersistPolicy {
    /// Parses `immediate` or `on-next-edit` (case-insensitive, `_` allowed).
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "immediate" => Some(Self::Immediate),
            "on-next-edit" | "lazy" => Some(Self::OnNextEdit),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Immediate => "immediate",
            Self::OnNextEdit => "on-next-edit",
        }
    }
}
