//! Editing surface state.
//!
//! # Responsibility
//! - Load notes at startup and write every edit through to the store.
//! - Merge popover outcomes and confirmed clears according to the policy.
//!
//! # Invariants
//! - `dirty` is set only while in-memory notes differ from the last
//!   successful save.
//! - A failed save leaves `dirty` set so `flush` can retry it.

use super::confirm::{ClearChoice, ClearPrompt};
use super::popover::{CopyNotice, Popover, PopoverOutcome};
use super::PersistPolicy;
use crate::model::notes::NotesBlob;
use crate::repo::kv_repo::KvRepository;
use crate::service::note_store::{NoteStore, StoreResult};
use log::info;

/// The single editing surface of the scratchpad.
pub struct Scratchpad<R: KvRepository> {
    store: NoteStore<R>,
    notes: NotesBlob,
    policy: PersistPolicy,
    dirty: bool,
}

impl<R: KvRepository> Scratchpad<R> {
    /// Opens the surface, loading whatever notes were saved before.
    pub fn open(store: NoteStore<R>, policy: PersistPolicy) -> StoreResult<Self> {
        let notes = NotesBlob::new(store.load()?);
        info!(
            "event=session_open module=session status=ok policy={} chars={}",
            policy.as_str(),
            notes.char_len()
        );
        Ok(Self {
            store,
            notes,
            policy,
            dirty: false,
        })
    }

    /// Current in-memory notes.
    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    /// Whether in-memory notes are ahead of storage.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Records an edit and writes it through to storage.
    pub fn on_edit_change(&mut self, text: Option<String>) -> StoreResult<()> {
        self.notes = NotesBlob::new(text);
        self.persist()
    }

    /// Opens the popover over a copy of the current notes.
    pub fn open_popover(&self) -> Popover {
        Popover::new(self.notes.clone())
    }

    /// Takes the popover result back.
    ///
    /// Returns the notice the caller should display, if any.
    pub fn apply_popover_outcome(
        &mut self,
        outcome: PopoverOutcome,
    ) -> StoreResult<Option<CopyNotice>> {
        let PopoverOutcome { notes, notice, .. } = outcome;
        if let Some(notes) = notes {
            self.replace(notes)?;
        }
        Ok(notice)
    }

    /// Shows the clear confirmation prompt.
    pub fn request_clear(&self) -> ClearPrompt {
        ClearPrompt::default()
    }

    /// Resolves a shown clear prompt. `Cancel` leaves the notes untouched.
    pub fn resolve_clear(&mut self, _prompt: ClearPrompt, choice: ClearChoice) -> StoreResult<()> {
        info!(
            "event=session_clear module=session status=ok choice={}",
            choice.label()
        );
        match choice {
            ClearChoice::Cancel => Ok(()),
            ClearChoice::Clear => self.replace(NotesBlob::absent()),
        }
    }

    /// Saves pending in-memory notes. Returns whether a save happened.
    pub fn flush(&mut self) -> StoreResult<bool> {
        if !self.dirty {
            return Ok(false);
        }
        self.persist()?;
        Ok(true)
    }

    fn replace(&mut self, notes: NotesBlob) -> StoreResult<()> {
        self.notes = notes;
        match self.policy {
            PersistPolicy::Immediate => self.persist(),
            PersistPolicy::OnNextEdit => {
                self.dirty = true;
                Ok(())
            }
        }
    }

    fn persist(&mut self) -> StoreResult<()> {
        self.dirty = true;
        self.store.save(self.notes.as_deref())?;
        self.dirty = false;
        Ok(())
    }
}
