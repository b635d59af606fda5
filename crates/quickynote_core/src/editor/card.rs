//! List-card projection for stored notes.

use crate::model::note::{Note, NoteId};
use crate::priority::{PriorityClassifier, PriorityVerdict};
use crate::sentiment::SentimentAnalyzer;
use chrono::{DateTime, Datelike, Utc};

const CARD_SNIPPET_CHARS: usize = 60;
const MISSING_DATE_LABEL: &str = "-";

/// View model rendered by a note card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteCard {
    pub id: NoteId,
    pub title: String,
    /// Creation date as `1st Mar 2024` (UTC), or `-` when unknown.
    pub date_label: String,
    pub priority: PriorityVerdict,
    /// First 60 characters of content.
    pub snippet: String,
    /// Tags rendered as `#a #b`.
    pub tag_line: String,
    pub is_pinned: bool,
}

impl NoteCard {
    /// Builds a card, classifying the note with its current tags.
    pub fn from_note<A: SentimentAnalyzer>(note: &Note, classifier: &PriorityClassifier<A>) -> Self {
        Self {
            id: note.id,
            title: note.title.clone(),
            date_label: date_label(note.created_on),
            priority: classifier.classify(&note.content, &note.tags),
            snippet: note.content.chars().take(CARD_SNIPPET_CHARS).collect(),
            tag_line: tag_line(&note.tags),
            is_pinned: note.is_pinned,
        }
    }
}

/// Renders an optional timestamp as `<day><ordinal> <Mon> <year>`.
pub fn date_label(created_on: Option<DateTime<Utc>>) -> String {
    match created_on {
        Some(at) => {
            let day = at.day();
            format!("{day}{} {}", ordinal_suffix(day), at.format("%b %Y"))
        }
        None => MISSING_DATE_LABEL.to_string(),
    }
}

fn ordinal_suffix(day: u32) -> &'static str {
    match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}

fn tag_line(tags: &[String]) -> String {
    tags.iter()
        .map(|tag| format!("#{tag}"))
        .collect::<Vec<_>>()
        .join(" ")
}
