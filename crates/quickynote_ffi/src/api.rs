//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose priority classification and calibration to Dart via FRB.
//! - Flatten core types into plain string/integer DTOs.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Priority calls are pure; repeated calls with equal input return equal
//!   output.

use log::warn;
use quickynote_core::{
    builtin_cases, core_version as core_version_inner, init_logging as init_logging_inner,
    ping as ping_inner, run_calibration, PriorityClassifier, PriorityVerdict,
};

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => {
            warn!("event=ffi_init_logging module=ffi status=error");
            err.to_string()
        }
    }
}

/// Priority verdict flattened for the indicator widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriorityResponse {
    /// `high|medium|low`.
    pub level: String,
    /// Capitalized label, e.g. `High`.
    pub label: String,
    /// Tooltip text, e.g. `Priority: High`.
    pub title: String,
    pub score: i32,
    /// CSS color value for the indicator dot.
    pub color: String,
    pub confidence_percent: u8,
}

impl From<PriorityVerdict> for PriorityResponse {
    fn from(verdict: PriorityVerdict) -> Self {
        Self {
            level: verdict.level.as_str().to_string(),
            label: verdict.level.label().to_string(),
            title: verdict.level.indicator_title(),
            score: verdict.score,
            color: verdict.color.as_css().to_string(),
            confidence_percent: verdict.confidence_percent,
        }
    }
}

/// Classifies editor content and tags.
///
/// # FFI contract
/// - Sync call, cheap enough for every keystroke.
/// - Never fails; an empty tag list is valid input.
#[flutter_rust_bridge::frb(sync)]
pub fn analyze_priority(content: String, tags: Vec<String>) -> PriorityResponse {
    PriorityClassifier::bundled()
        .classify(content.as_str(), &tags)
        .into()
}

/// One calibration row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalibrationItem {
    pub name: String,
    pub expected_level: String,
    pub matched: bool,
    pub priority: PriorityResponse,
}

/// Calibration suite result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalibrationResponse {
    pub items: Vec<CalibrationItem>,
    /// Mean confidence with two decimals, e.g. `85.80`.
    pub overall: String,
}

/// Runs the built-in calibration suite with the bundled lexicon.
///
/// # FFI contract
/// - Sync call, deterministic output.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn run_priority_calibration() -> CalibrationResponse {
    let report = run_calibration(&PriorityClassifier::bundled(), &builtin_cases());
    let overall = report.overall_display();
    let items = report
        .rows
        .into_iter()
        .map(|row| CalibrationItem {
            matched: row.matched(),
            name: row.name,
            expected_level: row.expected.as_str().to_string(),
            priority: row.verdict.into(),
        })
        .collect();
    CalibrationResponse { items, overall }
}

#[cfg(test)]
mod tests {
    use super::{analyze_priority, core_version, init_logging, ping, run_priority_calibration};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_empty_log_dir() {
        let error = init_logging("info".to_string(), String::new());
        assert!(!error.is_empty());
    }

    #[test]
    fn init_logging_rejects_unsupported_level() {
        let error = init_logging("verbose".to_string(), "tmp/logs".to_string());
        assert!(error.contains("unsupported log level"));
    }

    #[test]
    fn init_logging_succeeds_for_absolute_dir() {
        let dir = tempfile::tempdir().expect("temp dir");
        let dir = dir.path().to_str().expect("utf-8 temp dir").to_string();
        assert_eq!(init_logging("warn".to_string(), dir.clone()), "");
        assert_eq!(init_logging("warn".to_string(), dir), "");
    }

    #[test]
    fn analyze_priority_flattens_verdict() {
        let response = analyze_priority("so much trouble".to_string(), vec!["urgent".to_string()]);
        assert_eq!(response.level, "high");
        assert_eq!(response.label, "High");
        assert_eq!(response.title, "Priority: High");
        assert_eq!(response.score, -4);
        assert_eq!(response.color, "rgb(239 68 68)");
        assert_eq!(response.confidence_percent, 92);
    }

    #[test]
    fn analyze_priority_accepts_empty_input() {
        let response = analyze_priority(String::new(), Vec::new());
        assert_eq!(response.level, "medium");
        assert_eq!(response.color, "rgb(234 179 8)");
        assert_eq!(response.confidence_percent, 82);
    }

    #[test]
    fn calibration_reports_all_builtin_cases() {
        let response = run_priority_calibration();
        assert_eq!(response.items.len(), 5);
        let matched = response
            .items
            .iter()
            .map(|item| item.matched)
            .collect::<Vec<_>>();
        assert_eq!(matched, vec![true, true, true, false, true]);
        assert_eq!(response.items[3].expected_level, "high");
        assert_eq!(response.items[3].priority.level, "low");
        assert_eq!(response.overall, "85.80");
    }
}
