//! Sentiment scoring seam for priority classification.
//!
//! # Responsibility
//! - Define the analyzer contract consumed by `priority`.
//! - Ship a bundled word-list analyzer as the default implementation.
//!
//! # Invariants
//! - Scores are signed integers; callers compare only against zero.
//! - Analyzers are stateless from the caller's point of view and may be
//!   shared across threads.

pub mod lexicon;
mod wordlist;

pub use lexicon::{LexiconAnalyzer, SentimentAnalysis};

/// Maps free text to a signed affect score.
///
/// More negative means more negative tone, zero means neutral or empty.
/// Implementations must not assume any particular magnitude convention on
/// the consumer side.
pub trait SentimentAnalyzer {
    /// Scores `text`.
    fn score(&self, text: &str) -> i32;
}

impl<F> SentimentAnalyzer for F
where
    F: Fn(&str) -> i32,
{
    fn score(&self, text: &str) -> i32 {
        self(text)
    }
}
