use scratchpad_core::db::open_db_in_memory;
use scratchpad_core::{
    ClearChoice, MemoryClipboard, MemoryKvRepository, NoteStore, NotesBlob, PersistPolicy,
    Scratchpad, SqliteKvRepository,
};

fn open_session(
    repo: &MemoryKvRepository,
    policy: PersistPolicy,
) -> Scratchpad<&MemoryKvRepository> {
    Scratchpad::open(NoteStore::new(repo), policy).unwrap()
}

fn stored(repo: &MemoryKvRepository) -> Option<String> {
    NoteStore::new(repo).load().unwrap()
}

#[test]
fn open_loads_previously_saved_notes() {
    let conn = open_db_in_memory().unwrap();
    NoteStore::new(SqliteKvRepository::new(&conn))
        .save(Some("from last run"))
        .unwrap();

    let session = Scratchpad::open(
        NoteStore::new(SqliteKvRepository::new(&conn)),
        PersistPolicy::Immediate,
    )
    .unwrap();
    assert_eq!(session.notes(), Some("from last run"));
}

#[test]
fn every_edit_is_written_through() {
    let repo = MemoryKvRepository::new();
    let mut session = open_session(&repo, PersistPolicy::OnNextEdit);

    session.on_edit_change(Some("h".to_string())).unwrap();
    assert_eq!(stored(&repo).as_deref(), Some("h"));
    session.on_edit_change(Some("hi".to_string())).unwrap();
    assert_eq!(stored(&repo).as_deref(), Some("hi"));
    assert!(!session.is_dirty());
}

#[test]
fn clear_cancel_keeps_text_and_confirm_clears_it() {
    let repo = MemoryKvRepository::new();
    let mut session = open_session(&repo, PersistPolicy::Immediate);
    session.on_edit_change(Some("hello".to_string())).unwrap();

    let prompt = session.request_clear();
    assert_eq!(prompt.title, "Clear scratchpad?");
    assert_eq!(prompt.choices, [ClearChoice::Cancel, ClearChoice::Clear]);
    session.resolve_clear(prompt, ClearChoice::Cancel).unwrap();
    assert_eq!(session.notes(), Some("hello"));
    assert_eq!(stored(&repo).as_deref(), Some("hello"));

    let prompt = session.request_clear();
    session.resolve_clear(prompt, ClearChoice::Clear).unwrap();
    assert_eq!(session.notes(), None);
    assert_eq!(stored(&repo), None);
}

#[test]
fn popover_works_on_a_snapshot() {
    let repo = MemoryKvRepository::new();
    let mut session = open_session(&repo, PersistPolicy::Immediate);
    session.on_edit_change(Some("a\n\nb".to_string())).unwrap();

    let popover = session.open_popover();
    session.on_edit_change(Some("edited meanwhile".to_string())).unwrap();
    assert_eq!(popover.snapshot(), &NotesBlob::from("a\n\nb"));

    let outcome = popover.remove_empty_lines();
    assert_eq!(outcome.notes, Some(NotesBlob::from("a\nb")));
    assert_eq!(session.notes(), Some("edited meanwhile"));
}

#[test]
fn immediate_policy_persists_popover_result() {
    let repo = MemoryKvRepository::new();
    let mut session = open_session(&repo, PersistPolicy::Immediate);
    session
        .on_edit_change(Some("  too   many  ".to_string()))
        .unwrap();

    let outcome = session.open_popover().trim_whitespace();
    let notice = session.apply_popover_outcome(outcome).unwrap();

    assert!(notice.is_none());
    assert_eq!(session.notes(), Some("too many"));
    assert_eq!(stored(&repo).as_deref(), Some("too many"));
    assert!(!session.is_dirty());
}

#[test]
fn on_next_edit_policy_defers_popover_result_until_flush() {
    let repo = MemoryKvRepository::new();
    let mut session = open_session(&repo, PersistPolicy::OnNextEdit);
    session.on_edit_change(Some("ab".to_string())).unwrap();

    let mut clipboard = MemoryClipboard::with_text("cd");
    let outcome = session.open_popover().paste(&mut clipboard);
    session.apply_popover_outcome(outcome).unwrap();

    assert_eq!(session.notes(), Some("abcd"));
    assert_eq!(stored(&repo).as_deref(), Some("ab"));
    assert!(session.is_dirty());

    assert!(session.flush().unwrap());
    assert_eq!(stored(&repo).as_deref(), Some("abcd"));
    assert!(!session.flush().unwrap());
}

#[test]
fn paste_into_empty_scratchpad_replaces_text() {
    let repo = MemoryKvRepository::new();
    let mut session = open_session(&repo, PersistPolicy::Immediate);
    session.on_edit_change(Some(String::new())).unwrap();

    let mut clipboard = MemoryClipboard::with_text("pasted");
    let outcome = session.open_popover().paste(&mut clipboard);
    session.apply_popover_outcome(outcome).unwrap();

    assert_eq!(session.notes(), Some("pasted"));
}

#[test]
fn copy_does_not_change_notes_and_returns_notice() {
    let repo = MemoryKvRepository::new();
    let mut session = open_session(&repo, PersistPolicy::Immediate);
    session.on_edit_change(Some("keep me".to_string())).unwrap();

    let mut clipboard = MemoryClipboard::new();
    let outcome = session.open_popover().copy(&mut clipboard);
    let notice = session.apply_popover_outcome(outcome).unwrap();

    assert_eq!(clipboard.content(), Some("keep me"));
    assert_eq!(session.notes(), Some("keep me"));
    assert_eq!(
        notice.map(|notice| notice.message),
        Some("Notes copied to clipboard.")
    );
}

#[test]
fn dismissed_popover_keeps_existing_text() {
    let repo = MemoryKvRepository::new();
    let mut session = open_session(&repo, PersistPolicy::Immediate);
    session.on_edit_change(Some("stay".to_string())).unwrap();

    let outcome = session.open_popover().dismiss();
    session.apply_popover_outcome(outcome).unwrap();

    assert_eq!(session.notes(), Some("stay"));
}
