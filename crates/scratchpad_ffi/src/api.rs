//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose the scratchpad use-cases to Dart via FRB.
//! - Keep error semantics simple: envelopes with `ok` + `message`.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - The store path is fixed once per process.
//! - Transforms are pure and never touch storage; the shell saves the
//!   returned text through `notes_save`.

use log::warn;
use scratchpad_core::db::open_db;
use scratchpad_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, merge_on_paste,
    ping as ping_inner, remove_empty_lines, trim_and_collapse_whitespace, ClearChoice,
    ClearPrompt, CopyNotice, NoteStore, NoticePosition, ScratchpadConfig, SqliteKvRepository,
    StoreResult,
};
use std::path::PathBuf;
use std::sync::OnceLock;

static STORE_DB_PATH: OnceLock<PathBuf> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Sync call; may perform small file-system setup work.
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Pins the SQLite file used for notes, usually under the app documents dir.
///
/// # FFI contract
/// - Sync call.
/// - Idempotent for the same path; a different path is rejected.
/// - Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_store(db_path: String) -> String {
    let trimmed = db_path.trim();
    if trimmed.is_empty() {
        return "db_path cannot be empty".to_string();
    }
    let requested = PathBuf::from(trimmed);
    let active = STORE_DB_PATH.get_or_init(|| requested.clone());
    if *active != requested {
        return format!(
            "store already initialized at `{}`; refusing to switch to `{}`",
            active.display(),
            requested.display()
        );
    }
    String::new()
}

/// Notes payload returned by `notes_load`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotesResponse {
    /// Whether storage was read successfully.
    pub ok: bool,
    /// Stored notes; `None` when never saved or cleared.
    pub notes: Option<String>,
    /// Human-readable response message for diagnostics.
    pub message: String,
}

/// Generic action response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionResponse {
    /// Whether operation succeeded.
    pub ok: bool,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

impl ActionResponse {
    fn from_result(result: Result<(), String>, message: &str) -> Self {
        match result {
            Ok(()) => Self {
                ok: true,
                message: message.to_string(),
            },
            Err(err) => Self {
                ok: false,
                message: err,
            },
        }
    }
}

/// Toast description for the copy action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyNoticeView {
    pub message: String,
    pub duration_ms: u32,
    /// `top|middle|bottom`.
    pub position: String,
}

/// Alert description for the clear action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClearPromptView {
    pub title: String,
    pub message: String,
    pub cancel_label: String,
    pub confirm_label: String,
}

/// Loads the stored notes.
///
/// # FFI contract
/// - Async on the Dart side; completes exactly once.
/// - Never panics. Storage faults are reported with `ok = false`.
pub fn notes_load() -> NotesResponse {
    match with_note_store(|store| store.load()) {
        Ok(notes) => NotesResponse {
            ok: true,
            notes,
            message: String::new(),
        },
        Err(err) => NotesResponse {
            ok: false,
            notes: None,
            message: format!("notes_load failed: {err}"),
        },
    }
}

/// Saves the whole notes text. Called on every edit change.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - `None` stores JSON `null`.
#[flutter_rust_bridge::frb(sync)]
pub fn notes_save(notes: Option<String>) -> ActionResponse {
    let result = with_note_store(|store| store.save(notes.as_deref()))
        .map_err(|err| format!("notes_save failed: {err}"));
    ActionResponse::from_result(result, "Notes saved.")
}

/// Clears the stored notes after the user confirmed.
#[flutter_rust_bridge::frb(sync)]
pub fn notes_clear() -> ActionResponse {
    let result = with_note_store(|store| store.save(None))
        .map_err(|err| format!("notes_clear failed: {err}"));
    ActionResponse::from_result(result, "Notes cleared.")
}

/// Appends pasted clipboard text to the current notes.
#[flutter_rust_bridge::frb(sync)]
pub fn notes_merge_paste(existing: Option<String>, pasted: String) -> String {
    merge_on_paste(existing.as_deref(), &pasted)
}

/// Drops blank lines. Absent or empty notes are returned unchanged.
#[flutter_rust_bridge::frb(sync)]
pub fn notes_remove_empty_lines(notes: Option<String>) -> Option<String> {
    match notes {
        Some(text) if !text.is_empty() => Some(remove_empty_lines(&text)),
        other => other,
    }
}

/// Trims and collapses spaces per line. Absent or empty notes are returned
/// unchanged.
#[flutter_rust_bridge::frb(sync)]
pub fn notes_trim_whitespace(notes: Option<String>) -> Option<String> {
    match notes {
        Some(text) if !text.is_empty() => Some(trim_and_collapse_whitespace(&text)),
        other => other,
    }
}

#[flutter_rust_bridge::frb(sync)]
pub fn copy_notice() -> CopyNoticeView {
    let notice = CopyNotice::default();
    CopyNoticeView {
        message: notice.message.to_string(),
        duration_ms: u32::try_from(notice.duration.as_millis()).unwrap_or(u32::MAX),
        position: match notice.position {
            NoticePosition::Top => "top",
            NoticePosition::Middle => "middle",
            NoticePosition::Bottom => "bottom",
        }
        .to_string(),
    }
}

#[flutter_rust_bridge::frb(sync)]
pub fn clear_prompt() -> ClearPromptView {
    let prompt = ClearPrompt::default();
    ClearPromptView {
        title: prompt.title.to_string(),
        message: prompt.message.to_string(),
        cancel_label: ClearChoice::Cancel.label().to_string(),
        confirm_label: ClearChoice::Clear.label().to_string(),
    }
}

fn resolve_db_path() -> PathBuf {
    STORE_DB_PATH
        .get_or_init(|| match ScratchpadConfig::from_env() {
            Ok(config) => config.db_path,
            Err(err) => {
                warn!(
                    "event=config_resolve module=ffi status=degraded error_code=invalid_env error={}",
                    err
                );
                ScratchpadConfig::default().db_path
            }
        })
        .clone()
}

fn with_note_store<T>(
    f: impl FnOnce(&NoteStore<SqliteKvRepository<'_>>) -> StoreResult<T>,
) -> Result<T, String> {
    let db_path = resolve_db_path();
    let conn = open_db(&db_path).map_err(|err| format!("store open failed: {err}"))?;
    let store = NoteStore::new(SqliteKvRepository::new(&conn));
    f(&store).map_err(|err| err.to_string())
}

#[cfg(test)]
mod tests {
    use super::{
        clear_prompt, copy_notice, core_version, init_logging, init_store, notes_clear,
        notes_load, notes_merge_paste, notes_remove_empty_lines, notes_save,
        notes_trim_whitespace, ping,
    };
    use std::time::{SystemTime, UNIX_EPOCH};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_empty_log_dir() {
        let error = init_logging("info".to_string(), String::new());
        assert!(!error.is_empty());
    }

    #[test]
    fn init_logging_rejects_unsupported_level() {
        let error = init_logging("verbose".to_string(), "tmp/logs".to_string());
        assert!(!error.is_empty());
    }

    #[test]
    fn init_store_rejects_empty_path() {
        assert!(!init_store("  ".to_string()).is_empty());
    }

    #[test]
    fn save_load_and_clear_round_trip() {
        let path = std::env::temp_dir().join(format!("scratchpad-ffi-{}.sqlite3", unique_suffix()));
        let path_str = path.to_str().expect("temp path is UTF-8").to_string();
        assert_eq!(init_store(path_str.clone()), "");
        assert_eq!(init_store(path_str), "");
        assert!(!init_store("/elsewhere/other.sqlite3".to_string()).is_empty());

        let saved = notes_save(Some("hello".to_string()));
        assert!(saved.ok, "{}", saved.message);
        let loaded = notes_load();
        assert!(loaded.ok, "{}", loaded.message);
        assert_eq!(loaded.notes.as_deref(), Some("hello"));

        let cleared = notes_clear();
        assert!(cleared.ok, "{}", cleared.message);
        assert_eq!(notes_load().notes, None);

        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn transforms_skip_blank_input() {
        assert_eq!(notes_remove_empty_lines(None), None);
        assert_eq!(notes_trim_whitespace(Some(String::new())), Some(String::new()));
        assert_eq!(
            notes_remove_empty_lines(Some("a\n\n  \nb\n".to_string())).as_deref(),
            Some("a\nb\n")
        );
        assert_eq!(
            notes_trim_whitespace(Some("  a   b  \n c\td  ".to_string())).as_deref(),
            Some("a b\nc\td")
        );
    }

    #[test]
    fn merge_paste_follows_core_rules() {
        assert_eq!(notes_merge_paste(None, "x".to_string()), "x");
        assert_eq!(notes_merge_paste(Some(String::new()), "x".to_string()), "x");
        assert_eq!(notes_merge_paste(Some("ab".to_string()), "cd".to_string()), "abcd");
    }

    #[test]
    fn prompt_and_notice_views_are_stable() {
        let notice = copy_notice();
        assert_eq!(notice.duration_ms, 2000);
        assert_eq!(notice.position, "bottom");

        let prompt = clear_prompt();
        assert_eq!(prompt.cancel_label, "Cancel");
        assert_eq!(prompt.confirm_label, "Clear");
    }

    fn unique_suffix() -> String {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("time went backwards")
            .as_nanos();
        format!("{}-{nanos}", std::process::id())
    }
}
