//! Single-blob note store.
//!
//! # Responsibility
//! - Load and save the scratchpad text under the fixed `notes` key.
//! - Own the JSON encoding of the stored value.
//!
//! # Invariants
//! - `save` performs exactly one repository write per call.
//! - `load` never fails for a missing key or malformed JSON; both read as
//!   absent notes. Only storage faults are errors.
//! - Note content is never logged, only its length.

use crate::model::notes::{NotesBlob, NOTES_KEY};
use crate::repo::kv_repo::{KvRepository, RepoError};
use log::{debug, error, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Error for note store operations.
#[derive(Debug)]
pub enum StoreError {
    /// Persistence-layer failure.
    Repo(RepoError),
    /// Notes value could not be encoded as JSON.
    Encode(serde_json::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Repo(err) => write!(f, "{err}"),
            Self::Encode(err) => write!(f, "failed to encode notes: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            Self::Encode(err) => Some(err),
        }
    }
}

impl From<RepoError> for StoreError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Note store facade over a key-value repository.
pub struct NoteStore<R: KvRepository> {
    repo: R,
}

impl<R: KvRepository> NoteStore<R> {
    /// Creates a store using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Returns the persisted notes, or `None` when nothing was saved yet.
    ///
    /// A stored JSON `null` also reads as `None`.
    pub fn load(&self) -> StoreResult<Option<String>> {
        let raw = match self.repo.get(NOTES_KEY) {
            Ok(raw) => raw,
            Err(err) => {
                error!(
                    "event=notes_load module=store status=error error_code=repo_read_failed error={}",
                    err
                );
                return Err(err.into());
            }
        };

        let Some(raw) = raw else {
            debug!("event=notes_load module=store status=ok found=false");
            return Ok(None);
        };

        match serde_json::from_str::<NotesBlob>(&raw) {
            Ok(blob) => {
                debug!(
                    "event=notes_load module=store status=ok found=true chars={}",
                    blob.char_len()
                );
                Ok(blob.into_inner())
            }
            Err(err) => {
                warn!(
                    "event=notes_load module=store status=degraded error_code=malformed_json stored_bytes={} error={}",
                    raw.len(),
                    err
                );
                Ok(None)
            }
        }
    }

    /// Serializes `notes` as JSON and overwrites the stored value.
    ///
    /// `None` is stored as JSON `null` rather than removing the key.
    pub fn save(&self, notes: Option<&str>) -> StoreResult<()> {
        let blob = NotesBlob::new(notes.map(str::to_string));
        let encoded = serde_json::to_string(&blob).map_err(StoreError::Encode)?;

        if let Err(err) = self.repo.set(NOTES_KEY, &encoded) {
            error!(
                "event=notes_save module=store status=error error_code=repo_write_failed error={}",
                err
            );
            return Err(err.into());
        }

        debug!(
            "event=notes_save module=store status=ok present={} chars={}",
            notes.is_some(),
            blob.char_len()
        );
        Ok(())
    }

    /// Borrows the underlying repository.
    pub fn repo(&self) -> &R {
        &self.repo
    }
}
