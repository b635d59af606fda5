//! Editor service over the external note store.
//!
//! # Responsibility
//! - Route validated drafts to add or edit calls by draft mode.
//! - Translate store failures into user-visible messages.
//!
//! # Invariants
//! - Store failures are not retried.
//! - The caller's draft is only mutated by publish validation, never by a
//!   store failure.

use crate::editor::draft::{DraftError, DraftMode, NoteDraft, NotePayload};
use crate::model::note::{Note, NoteId};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

const UNEXPECTED_STORE_ERROR: &str = "An unexpected error occurred. Please try again.";

/// Failure reported by a note store implementation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreError {
    /// Backend-provided message, when one was returned.
    pub message: Option<String>,
}

impl StoreError {
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
        }
    }

    pub fn unexpected() -> Self {
        Self { message: None }
    }

    /// Text shown to the user for this failure.
    pub fn user_message(&self) -> &str {
        self.message
            .as_deref()
            .filter(|message| !message.trim().is_empty())
            .unwrap_or(UNEXPECTED_STORE_ERROR)
    }
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.user_message())
    }
}

impl Error for StoreError {}

/// Persistence collaborator contract. Implemented outside this crate.
pub trait NoteStore {
    /// Stores a new note and returns the stored record.
    fn add_note(&mut self, payload: &NotePayload) -> Result<Note, StoreError>;
    /// Replaces an existing note and returns the stored record.
    fn edit_note(&mut self, id: NoteId, payload: &NotePayload) -> Result<Note, StoreError>;
}

/// Service error for editor use-cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorError {
    /// Draft failed local validation.
    Invalid(DraftError),
    /// Store rejected or failed the write.
    Store(StoreError),
}

impl Display for EditorError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Invalid(err) => write!(f, "{err}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for EditorError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Invalid(err) => Some(err),
            Self::Store(err) => Some(err),
        }
    }
}

impl From<DraftError> for EditorError {
    fn from(value: DraftError) -> Self {
        Self::Invalid(value)
    }
}

impl From<StoreError> for EditorError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Successful write outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveOutcome {
    pub note: Note,
    /// Toast text for the hosting UI.
    pub toast: &'static str,
}

/// Editor facade over a note store implementation.
pub struct NoteEditorService<S: NoteStore> {
    store: S,
}

impl<S: NoteStore> NoteEditorService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Validates and writes the draft.
    pub fn save(&mut self, draft: &NoteDraft) -> Result<SaveOutcome, EditorError> {
        let payload = draft.prepare_save()?;
        self.write(draft.mode(), &payload)
    }

    /// Checks publish credentials, marks the draft published and writes it.
    pub fn publish(&mut self, draft: &mut NoteDraft) -> Result<SaveOutcome, EditorError> {
        let payload = draft.prepare_publish()?;
        self.write(draft.mode(), &payload)
    }

    fn write(&mut self, mode: DraftMode, payload: &NotePayload) -> Result<SaveOutcome, EditorError> {
        let (result, op, toast) = match mode {
            DraftMode::Add => (
                self.store.add_note(payload),
                "add",
                "Note Added Successfully",
            ),
            DraftMode::Edit(id) => (
                self.store.edit_note(id, payload),
                "edit",
                "Note Updated Successfully",
            ),
        };

        match result {
            Ok(note) => {
                info!(
                    "event=note_write module=editor status=ok op={} tag_count={} published={}",
                    op,
                    payload.tags.len(),
                    payload.is_published
                );
                Ok(SaveOutcome { note, toast })
            }
            Err(err) => {
                warn!(
                    "event=note_write module=editor status=error op={} backend_message={}",
                    op,
                    err.message.is_some()
                );
                Err(err.into())
            }
        }
    }
}
