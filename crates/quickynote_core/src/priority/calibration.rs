//! Built-in calibration suite for the priority classifier.
//!
//! Runs a fixed set of representative notes through a classifier and
//! reports per-case verdicts plus the mean confidence across the suite.

use crate::priority::{PriorityClassifier, PriorityLevel, PriorityVerdict};
use crate::sentiment::SentimentAnalyzer;
use log::info;

/// One named calibration input with its expected level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalibrationCase {
    pub name: String,
    pub content: String,
    pub tags: Vec<String>,
    pub expected: PriorityLevel,
}

impl CalibrationCase {
    pub fn new(
        name: impl Into<String>,
        content: impl Into<String>,
        tags: &[&str],
        expected: PriorityLevel,
    ) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
            tags: tags.iter().map(|tag| (*tag).to_string()).collect(),
            expected,
        }
    }
}

/// Per-case outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalibrationRow {
    pub name: String,
    pub expected: PriorityLevel,
    pub verdict: PriorityVerdict,
}

impl CalibrationRow {
    /// Whether the classifier produced the expected level.
    pub fn matched(&self) -> bool {
        self.verdict.level == self.expected
    }
}

/// Suite outcome.
#[derive(Debug, Clone, PartialEq)]
pub struct CalibrationReport {
    pub rows: Vec<CalibrationRow>,
    /// Mean of all confidence percentages; 0.0 for an empty suite.
    pub overall_confidence: f64,
}

impl CalibrationReport {
    /// Number of rows whose level matched the expectation.
    pub fn matched_count(&self) -> usize {
        self.rows.iter().filter(|row| row.matched()).count()
    }

    /// Overall figure rendered with two decimals, e.g. `85.80`.
    pub fn overall_display(&self) -> String {
        format!("{:.2}", self.overall_confidence)
    }
}

/// Returns the standard calibration cases.
pub fn builtin_cases() -> Vec<CalibrationCase> {
    vec![
        CalibrationCase::new(
            "High Priority (Extreme Negative Sentiment, Urgent Tag)",
            "This is an absolutely critical emergency that requires immediate attention!",
            &["urgent"],
            PriorityLevel::High,
        ),
        CalibrationCase::new(
            "Low Priority (Positive Sentiment, Optional Tag)",
            "This task can be done whenever convenient, no immediate rush needed.",
            &["optional"],
            PriorityLevel::Low,
        ),
        CalibrationCase::new(
            "Medium Priority (Neutral Content, No Tags)",
            "Standard task to be completed within regular timeframe.",
            &[],
            PriorityLevel::Medium,
        ),
        CalibrationCase::new(
            "High Priority (Mixed Critical Sentiment, Important Tag)",
            "Critically important project with significant implications for our strategy.",
            &["important"],
            PriorityLevel::High,
        ),
        CalibrationCase::new(
            "Low Priority (Neutral Sentiment, Low Priority Tag)",
            "Supplementary task that can be postponed if necessary.",
            &["low"],
            PriorityLevel::Low,
        ),
    ]
}

/// Classifies every case and aggregates the report.
pub fn run_calibration<A: SentimentAnalyzer>(
    classifier: &PriorityClassifier<A>,
    cases: &[CalibrationCase],
) -> CalibrationReport {
    let rows = cases
        .iter()
        .map(|case| CalibrationRow {
            name: case.name.clone(),
            expected: case.expected,
            verdict: classifier.classify(&case.content, &case.tags),
        })
        .collect::<Vec<_>>();

    let overall_confidence = if rows.is_empty() {
        0.0
    } else {
        let total: u32 = rows
            .iter()
            .map(|row| u32::from(row.verdict.confidence_percent))
            .sum();
        f64::from(total) / rows.len() as f64
    };

    let report = CalibrationReport {
        rows,
        overall_confidence,
    };
    info!(
        "event=priority_calibration module=priority status=ok cases={} matched={} overall={}",
        report.rows.len(),
        report.matched_count(),
        report.overall_display()
    );
    report
}

#[cfg(test)]
mod tests {
    use super::{builtin_cases, run_calibration, CalibrationCase};
    use crate::priority::{PriorityClassifier, PriorityLevel};

    #[test]
    fn builtin_suite_with_bundled_lexicon_flags_positive_important_note() {
        let report = run_calibration(&PriorityClassifier::bundled(), &builtin_cases());
        assert_eq!(report.rows.len(), 5);
        assert_eq!(report.matched_count(), 4);

        // "important" and "significant" outweigh the tag.
        let mixed = &report.rows[3];
        assert!(!mixed.matched());
        assert_eq!(mixed.verdict.score, 2 + 1 - 2);
        assert_eq!(mixed.verdict.level, PriorityLevel::Low);

        let confidences = report
            .rows
            .iter()
            .map(|row| row.verdict.confidence_percent)
            .collect::<Vec<_>>();
        assert_eq!(confidences, vec![92, 85, 82, 85, 85]);
        assert_eq!(report.overall_display(), "85.80");
    }

    #[test]
    fn overall_is_mean_confidence() {
        let classifier = PriorityClassifier::new(|text: &str| if text == "neg" { -5 } else { 5 });
        let cases = vec![
            CalibrationCase::new("a", "neg", &[], PriorityLevel::High),
            CalibrationCase::new("b", "pos", &[], PriorityLevel::High),
        ];
        let report = run_calibration(&classifier, &cases);
        assert_eq!(report.overall_display(), "90.00");
        assert_eq!(report.matched_count(), 1);
        assert!(report.rows[0].matched());
        assert!(!report.rows[1].matched());
    }

    #[test]
    fn empty_suite_reports_zero() {
        let report = run_calibration(&PriorityClassifier::bundled(), &[]);
        assert!(report.rows.is_empty());
        assert_eq!(report.overall_display(), "0.00");
    }
}
