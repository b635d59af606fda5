//! Add/edit draft state.
//!
//! # Invariants
//! - `priority` is `None` until the first content or tag edit.
//! - Save validation checks title before content.
//! - Publish only checks credentials.

use crate::model::note::{Note, NoteId, PublishCredentials};
use crate::priority::{PriorityClassifier, PriorityVerdict};
use crate::sentiment::SentimentAnalyzer;
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Whether the draft creates a new note or edits an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftMode {
    Add,
    Edit(NoteId),
}

/// Validation failures surfaced next to the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftError {
    MissingTitle,
    MissingContent,
    MissingPublishCredentials,
}

impl Display for DraftError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingTitle => write!(f, "Please enter the title"),
            Self::MissingContent => write!(f, "Please enter the content"),
            Self::MissingPublishCredentials => {
                write!(f, "Please enter Twitter API key and OAuth token.")
            }
        }
    }
}

impl Error for DraftError {}

/// Body handed to the storage collaborator on add/edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotePayload {
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
    pub is_published: bool,
    #[serde(rename = "twitterDetails")]
    pub publish_credentials: PublishCredentials,
}

/// In-progress note edits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteDraft {
    mode: DraftMode,
    title: String,
    content: String,
    tags: Vec<String>,
    is_published: bool,
    publish_credentials: PublishCredentials,
    priority: Option<PriorityVerdict>,
}

impl NoteDraft {
    /// Empty draft for a new note.
    pub fn new() -> Self {
        Self {
            mode: DraftMode::Add,
            title: String::new(),
            content: String::new(),
            tags: Vec::new(),
            is_published: false,
            publish_credentials: PublishCredentials::default(),
            priority: None,
        }
    }

    /// Draft pre-filled from a stored note.
    pub fn edit(note: &Note) -> Self {
        Self {
            mode: DraftMode::Edit(note.id),
            title: note.title.clone(),
            content: note.content.clone(),
            tags: note.tags.clone(),
            is_published: note.is_published,
            publish_credentials: note.publish_credentials.clone(),
            priority: None,
        }
    }

    pub fn mode(&self) -> DraftMode {
        self.mode
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn is_published(&self) -> bool {
        self.is_published
    }

    /// Latest verdict, if the user has edited content or tags.
    pub fn priority(&self) -> Option<&PriorityVerdict> {
        self.priority.as_ref()
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_publish_credentials(&mut self, credentials: PublishCredentials) {
        self.publish_credentials = credentials;
    }

    /// Replaces content and re-classifies against the current tags.
    pub fn set_content<A: SentimentAnalyzer>(
        &mut self,
        classifier: &PriorityClassifier<A>,
        content: impl Into<String>,
    ) -> PriorityVerdict {
        self.content = content.into();
        self.reclassify(classifier)
    }

    /// Replaces tags and re-classifies against the current content.
    pub fn set_tags<A: SentimentAnalyzer>(
        &mut self,
        classifier: &PriorityClassifier<A>,
        tags: Vec<String>,
    ) -> PriorityVerdict {
        self.tags = tags;
        self.reclassify(classifier)
    }

    fn reclassify<A: SentimentAnalyzer>(
        &mut self,
        classifier: &PriorityClassifier<A>,
    ) -> PriorityVerdict {
        let verdict = classifier.classify(&self.content, &self.tags);
        self.priority = Some(verdict);
        verdict
    }

    /// Validates title and content, then builds the save payload.
    pub fn prepare_save(&self) -> Result<NotePayload, DraftError> {
        if self.title.is_empty() {
            return Err(DraftError::MissingTitle);
        }
        if self.content.is_empty() {
            return Err(DraftError::MissingContent);
        }
        Ok(self.payload())
    }

    /// Checks credentials, marks the draft published and builds the payload.
    pub fn prepare_publish(&mut self) -> Result<NotePayload, DraftError> {
        if !self.publish_credentials.is_complete() {
            return Err(DraftError::MissingPublishCredentials);
        }
        self.is_published = true;
        Ok(self.payload())
    }

    fn payload(&self) -> NotePayload {
        NotePayload {
            title: self.title.clone(),
            content: self.content.clone(),
            tags: self.tags.clone(),
            is_published: self.is_published,
            publish_credentials: self.publish_credentials.clone(),
        }
    }
}

impl Default for NoteDraft {
    fn default() -> Self {
        Self::new()
    }
}
