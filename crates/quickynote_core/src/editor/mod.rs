//! Note editor use-cases.
//!
//! # Responsibility
//! - Hold add/edit draft state and re-classify priority on every edit.
//! - Validate drafts before handing them to the storage collaborator.
//! - Project stored notes into list-card view models.
//!
//! # Invariants
//! - Priority is recomputed from scratch on each content or tag change.
//! - A failed save never discards local draft edits.

pub mod card;
pub mod draft;
pub mod service;
