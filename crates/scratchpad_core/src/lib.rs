//! Core logic for the scratchpad: one persisted text blob, two line-cleanup
//! transforms and clipboard merge rules.
//! Presentation hosts (FFI, CLI) drive everything through this crate.

pub mod clipboard;
pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod session;
pub mod text;

pub use clipboard::{
    extract_for_copy, merge_on_paste, ClipboardError, ClipboardPort, ClipboardResult,
    MemoryClipboard,
};
pub use config::{ConfigError, ScratchpadConfig};
pub use logging::{default_log_level, init_logging, init_logging_from_config};
pub use model::notes::{NotesBlob, NOTES_KEY};
pub use repo::kv_repo::{
    KvRepository, MemoryKvRepository, RepoError, RepoResult, SqliteKvRepository,
};
pub use service::note_store::{NoteStore, StoreError, StoreResult};
pub use session::{
    ClearChoice, ClearPrompt, CopyNotice, NoticePosition, PersistPolicy, Popover,
    PopoverOutcome, Scratchpad,
};
pub use text::normalize::{remove_empty_lines, trim_and_collapse_whitespace};

/// Minimal health-check API for host integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
