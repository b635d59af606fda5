//! Note priority classification.
//!
//! # Responsibility
//! - Combine content sentiment with tag keyword heuristics into one score.
//! - Map the score onto a priority level, display color and confidence.
//!
//! # Invariants
//! - `score = sentiment(content) + tag_adjustment(tags)`.
//! - Level depends only on the sign of `score`; zero is `Medium`.
//! - Confidence is always one of `95, 92, 88, 85, 82`.
//! - Classification is total: every input yields a verdict.

pub mod calibration;

use crate::sentiment::{LexiconAnalyzer, SentimentAnalyzer};
use log::debug;
use serde::{Deserialize, Serialize};

const URGENCY_KEYWORDS: &[&str] = &["urgent", "important"];
const DEPRIORITIZE_KEYWORDS: &[&str] = &["optional", "low"];
const URGENCY_DELTA: i32 = -2;
const DEPRIORITIZE_DELTA: i32 = 2;

const HIGH_STRONG_THRESHOLD: i32 = -1;
const HIGH_STRONG_CONFIDENCE: u8 = 92;
const HIGH_EDGE_CONFIDENCE: u8 = 95;
const LOW_STRONG_THRESHOLD: i32 = 1;
const LOW_STRONG_CONFIDENCE: u8 = 88;
const LOW_EDGE_CONFIDENCE: u8 = 85;
const MEDIUM_CONFIDENCE: u8 = 82;

/// Every confidence value the classifier can produce.
pub const CONFIDENCE_VALUES: [u8; 5] = [
    HIGH_EDGE_CONFIDENCE,
    HIGH_STRONG_CONFIDENCE,
    LOW_STRONG_CONFIDENCE,
    LOW_EDGE_CONFIDENCE,
    MEDIUM_CONFIDENCE,
];

/// Urgency tier assigned to a note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriorityLevel {
    /// Negative combined score.
    High,
    /// Combined score of exactly zero.
    Medium,
    /// Positive combined score.
    Low,
}

impl PriorityLevel {
    /// Stable lowercase id (`high|medium|low`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }

    /// Capitalized label for indicators.
    pub fn label(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }

    /// Tooltip text shown next to the indicator dot.
    pub fn indicator_title(self) -> String {
        format!("Priority: {}", self.label())
    }

    /// Display color bound to this level.
    pub fn color(self) -> ColorToken {
        match self {
            Self::High => ColorToken::Red,
            Self::Medium => ColorToken::Yellow,
            Self::Low => ColorToken::Green,
        }
    }
}

/// Display color token for a priority level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorToken {
    Red,
    Yellow,
    Green,
}

impl ColorToken {
    /// CSS color value used by the web indicator.
    pub fn as_css(self) -> &'static str {
        match self {
            Self::Red => "rgb(239 68 68)",
            Self::Yellow => "rgb(234 179 8)",
            Self::Green => "rgb(34 197 94)",
        }
    }
}

/// Classification output. Built fresh on every call and never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorityVerdict {
    pub level: PriorityLevel,
    /// Combined sentiment + tag score.
    pub score: i32,
    pub color: ColorToken,
    /// Table-driven confidence, not a statistical estimate.
    pub confidence_percent: u8,
}

/// Classifier over a pluggable sentiment analyzer.
#[derive(Debug, Clone, Default)]
pub struct PriorityClassifier<A = LexiconAnalyzer> {
    analyzer: A,
}

impl PriorityClassifier {
    /// Creates a classifier backed by the bundled word list.
    pub fn bundled() -> Self {
        Self::new(LexiconAnalyzer::new())
    }
}

impl<A: SentimentAnalyzer> PriorityClassifier<A> {
    /// Creates a classifier using the provided analyzer.
    pub fn new(analyzer: A) -> Self {
        Self { analyzer }
    }

    /// Classifies note content together with its tags.
    ///
    /// Pass an empty slice when the note has no tags.
    pub fn classify<S: AsRef<str>>(&self, content: &str, tags: &[S]) -> PriorityVerdict {
        let sentiment = self.analyzer.score(content);
        let adjustment = tag_adjustment(tags);
        let verdict = verdict_for_score(sentiment.saturating_add(adjustment));
        debug!(
            "event=priority_classify module=priority status=ok level={} score={} sentiment={} tag_adjustment={} tag_count={} confidence={}",
            verdict.level.as_str(),
            verdict.score,
            sentiment,
            adjustment,
            tags.len(),
            verdict.confidence_percent
        );
        verdict
    }
}

/// Classifies with the bundled word-list analyzer.
pub fn analyze_priority<S: AsRef<str>>(content: &str, tags: &[S]) -> PriorityVerdict {
    PriorityClassifier::bundled().classify(content, tags)
}

/// Sums keyword-derived deltas over all tags.
///
/// Matching is case-insensitive and by substring. A tag hitting an urgency
/// keyword contributes `-2` and is not checked further; otherwise a
/// de-prioritization keyword contributes `+2`.
pub fn tag_adjustment<S: AsRef<str>>(tags: &[S]) -> i32 {
    tags.iter()
        .map(|tag| single_tag_adjustment(tag.as_ref()))
        .fold(0_i32, i32::saturating_add)
}

fn single_tag_adjustment(tag: &str) -> i32 {
    let lowered = tag.to_lowercase();
    if contains_any(&lowered, URGENCY_KEYWORDS) {
        return URGENCY_DELTA;
    }
    if contains_any(&lowered, DEPRIORITIZE_KEYWORDS) {
        return DEPRIORITIZE_DELTA;
    }
    0
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}

/// Builds the verdict for an already combined score.
pub fn verdict_for_score(score: i32) -> PriorityVerdict {
    let level = level_for_score(score);
    PriorityVerdict {
        level,
        score,
        color: level.color(),
        confidence_percent: confidence_percent(score, level),
    }
}

/// Maps a combined score to its level by sign.
pub fn level_for_score(score: i32) -> PriorityLevel {
    if score < 0 {
        PriorityLevel::High
    } else if score > 0 {
        PriorityLevel::Low
    } else {
        PriorityLevel::Medium
    }
}

/// Looks up the confidence for `score` under the given level.
///
/// Exactly `-1` reports a higher confidence than more negative scores, and
/// exactly `+1` a lower one than more positive scores.
pub fn confidence_percent(score: i32, level: PriorityLevel) -> u8 {
    match level {
        PriorityLevel::High if score < HIGH_STRONG_THRESHOLD => HIGH_STRONG_CONFIDENCE,
        PriorityLevel::High => HIGH_EDGE_CONFIDENCE,
        PriorityLevel::Low if score > LOW_STRONG_THRESHOLD => LOW_STRONG_CONFIDENCE,
        PriorityLevel::Low => LOW_EDGE_CONFIDENCE,
        PriorityLevel::Medium => MEDIUM_CONFIDENCE,
    }
}

#[cfg(test)]
mod tests {
    use super::{
        confidence_percent, level_for_score, tag_adjustment, verdict_for_score, ColorToken,
        PriorityClassifier, PriorityLevel,
    };

    const NO_TAGS: &[&str] = &[];

    fn fixed(score: i32) -> PriorityClassifier<impl Fn(&str) -> i32> {
        PriorityClassifier::new(move |_: &str| score)
    }

    #[test]
    fn neutral_content_without_tags_is_medium() {
        let verdict = fixed(0).classify("", NO_TAGS);
        assert_eq!(verdict.level, PriorityLevel::Medium);
        assert_eq!(verdict.score, 0);
        assert_eq!(verdict.color, ColorToken::Yellow);
        assert_eq!(verdict.confidence_percent, 82);
    }

    #[test]
    fn negative_content_with_urgent_tag_is_high() {
        let verdict = fixed(-3).classify("anything", &["urgent"]);
        assert_eq!(verdict.level, PriorityLevel::High);
        assert_eq!(verdict.score, -5);
        assert_eq!(verdict.color, ColorToken::Red);
        assert_eq!(verdict.confidence_percent, 92);
    }

    #[test]
    fn urgent_tag_alone_drives_high() {
        let verdict = fixed(0).classify("x", &["urgent"]);
        assert_eq!(verdict.level, PriorityLevel::High);
        assert_eq!(verdict.score, -2);
        assert_eq!(verdict.confidence_percent, 92);
    }

    #[test]
    fn optional_tag_alone_drives_low() {
        let verdict = fixed(0).classify("x", &["optional"]);
        assert_eq!(verdict.level, PriorityLevel::Low);
        assert_eq!(verdict.score, 2);
        assert_eq!(verdict.color, ColorToken::Green);
        assert_eq!(verdict.confidence_percent, 88);
    }

    #[test]
    fn positive_content_with_low_tag_is_low() {
        let verdict = fixed(1).classify("x", &["low"]);
        assert_eq!(verdict.level, PriorityLevel::Low);
        assert_eq!(verdict.score, 3);
        assert_eq!(verdict.confidence_percent, 88);
    }

    #[test]
    fn minus_one_boundary_reports_higher_confidence() {
        let verdict = fixed(-1).classify("x", NO_TAGS);
        assert_eq!(verdict.level, PriorityLevel::High);
        assert_eq!(verdict.score, -1);
        assert_eq!(verdict.confidence_percent, 95);
    }

    #[test]
    fn plus_one_boundary_reports_lower_confidence() {
        let verdict = verdict_for_score(1);
        assert_eq!(verdict.level, PriorityLevel::Low);
        assert_eq!(verdict.confidence_percent, 85);
    }

    #[test]
    fn urgency_wins_when_tag_has_both_keywords() {
        assert_eq!(tag_adjustment(&["URGENT-but-optional"]), -2);
        assert_eq!(tag_adjustment(&["low-but-important"]), -2);
    }

    #[test]
    fn tag_matching_is_case_insensitive_substring() {
        assert_eq!(tag_adjustment(&["VeryImportant"]), -2);
        assert_eq!(tag_adjustment(&["follow-up"]), 2);
        assert_eq!(tag_adjustment(&["work", "personal"]), 0);
        assert_eq!(tag_adjustment(NO_TAGS), 0);
    }

    #[test]
    fn tag_adjustment_is_unclamped() {
        let tags = vec!["urgent"; 10];
        assert_eq!(tag_adjustment(&tags), -20);
    }

    #[test]
    fn level_follows_sign_only() {
        assert_eq!(level_for_score(i32::MIN), PriorityLevel::High);
        assert_eq!(level_for_score(0), PriorityLevel::Medium);
        assert_eq!(level_for_score(i32::MAX), PriorityLevel::Low);
    }

    #[test]
    fn medium_confidence_is_constant() {
        assert_eq!(confidence_percent(0, PriorityLevel::Medium), 82);
    }

    #[test]
    fn level_labels_and_colors() {
        assert_eq!(PriorityLevel::High.indicator_title(), "Priority: High");
        assert_eq!(PriorityLevel::Medium.label(), "Medium");
        assert_eq!(PriorityLevel::Low.as_str(), "low");
        assert_eq!(ColorToken::Red.as_css(), "rgb(239 68 68)");
        assert_eq!(ColorToken::Green.as_css(), "rgb(34 197 94)");
        assert_eq!(ColorToken::Yellow.as_css(), "rgb(234 179 8)");
    }

    #[test]
    fn classify_is_idempotent() {
        let classifier = PriorityClassifier::bundled();
        let first = classifier.classify("terrible crash", &["work"]);
        let second = classifier.classify("terrible crash", &["work"]);
        assert_eq!(first, second);
    }
}
