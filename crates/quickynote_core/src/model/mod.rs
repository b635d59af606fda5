//! Note domain model.
//!
//! # Responsibility
//! - Define the note record exchanged with the storage collaborator.
//! - Keep the serialized shape aligned with the backend schema.
//!
//! # Invariants
//! - Every note is identified by a stable `NoteId`.
//! - Priority is derived on demand and never stored on the note.

pub mod note;
