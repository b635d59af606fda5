//! Core domain logic for QuickyNote.
//! Owns note priority classification and the note editor use-cases.

pub mod editor;
pub mod logging;
pub mod model;
pub mod priority;
pub mod sentiment;

pub use editor::card::NoteCard;
pub use editor::draft::{DraftError, DraftMode, NoteDraft, NotePayload};
pub use editor::service::{EditorError, NoteEditorService, NoteStore, SaveOutcome, StoreError};
pub use logging::{default_log_level, init_logging, logging_status, LoggingConfig, LoggingError};
pub use model::note::{Note, NoteId, PublishCredentials};
pub use priority::calibration::{
    builtin_cases, run_calibration, CalibrationCase, CalibrationReport, CalibrationRow,
};
pub use priority::{
    analyze_priority, tag_adjustment, ColorToken, PriorityClassifier, PriorityLevel,
    PriorityVerdict, CONFIDENCE_VALUES,
};
pub use sentiment::{LexiconAnalyzer, SentimentAnalysis, SentimentAnalyzer};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
