//! Note record and publish credentials.
//!
//! # Invariants
//! - `id` is stable and never reused for another note.
//! - Tags keep caller order; order only matters for display.
//! - `created_on` is optional; records written before it existed decode
//!   with `None`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a stored note.
pub type NoteId = Uuid;

/// Credentials required before a note can be published.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishCredentials {
    pub api_key: String,
    pub oauth_token: String,
}

impl PublishCredentials {
    /// Both fields must be non-empty.
    pub fn is_complete(&self) -> bool {
        !self.api_key.is_empty() && !self.oauth_token.is_empty()
    }
}

/// Canonical note record as returned by the storage collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    /// Free text body; may be empty.
    pub content: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub is_pinned: bool,
    #[serde(default)]
    pub is_published: bool,
    /// Serialized as `twitterDetails` to match the backend schema.
    #[serde(rename = "twitterDetails", default)]
    pub publish_credentials: PublishCredentials,
    /// Creation time reported by the backend, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_on: Option<DateTime<Utc>>,
}

impl Note {
    /// Creates an unpinned, unpublished note with a generated id.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), title, content)
    }

    /// Creates a note with a caller-provided stable id.
    pub fn with_id(id: NoteId, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            content: content.into(),
            tags: Vec::new(),
            is_pinned: false,
            is_published: false,
            publish_credentials: PublishCredentials::default(),
            created_on: None,
        }
    }

    /// Replaces the tag list, keeping caller order.
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the creation timestamp.
    pub fn with_created_on(mut self, created_on: DateTime<Utc>) -> Self {
        self.created_on = Some(created_on);
        self
    }
}
