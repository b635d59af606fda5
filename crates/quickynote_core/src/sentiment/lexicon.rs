//! Word-list sentiment analyzer.
//!
//! # Responsibility
//! - Tokenize note text and sum per-word weights from the bundled list.
//! - Flip the weight of a word directly preceded by a negator.
//! - Allow callers to extend or override individual word weights.
//!
//! # Invariants
//! - The bundled list is immutable and built once per process.
//! - Tokenization lower-cases input and strips punctuation, but keeps
//!   apostrophes and hyphens inside tokens.
//! - Tokens are split on runs of whitespace, so repeated spaces or line
//!   breaks never produce empty tokens and do not change `comparative`.
//! - Empty or whitespace-only text scores 0.
//! - Scoring saturates at `i32::MIN`/`i32::MAX` instead of overflowing.

use crate::sentiment::wordlist::{word_weights, NEGATORS};
use crate::sentiment::SentimentAnalyzer;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

static BUNDLED_WEIGHTS: Lazy<HashMap<&'static str, i32>> = Lazy::new(|| word_weights().collect());
static PUNCTUATION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[.,/#!?$%^&*;:{}=_`"~()]"#).expect("valid punctuation regex"));

/// Detailed analyzer output.
#[derive(Debug, Clone, PartialEq)]
pub struct SentimentAnalysis {
    /// Sum of all (possibly negated) word weights.
    pub score: i32,
    /// `score` divided by token count; 0.0 when there are no tokens.
    pub comparative: f64,
    /// Normalized tokens in input order.
    pub tokens: Vec<String>,
    /// Tokens that ended up contributing a positive weight.
    pub positive: Vec<String>,
    /// Tokens that ended up contributing a negative weight.
    pub negative: Vec<String>,
}

/// Analyzer backed by the bundled word list plus optional caller extras.
#[derive(Debug, Clone, Default)]
pub struct LexiconAnalyzer {
    extras: HashMap<String, i32>,
}

impl LexiconAnalyzer {
    /// Creates an analyzer using only the bundled word list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or overrides word weights. Keys are lower-cased.
    pub fn with_extra_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = (S, i32)>,
        S: AsRef<str>,
    {
        for (word, weight) in words {
            self.extras.insert(word.as_ref().trim().to_lowercase(), weight);
        }
        self
    }

    /// Runs full analysis over `text`.
    pub fn analyze(&self, text: &str) -> SentimentAnalysis {
        let tokens = tokenize(text);
        let mut score = 0_i32;
        let mut positive = Vec::new();
        let mut negative = Vec::new();

        for (idx, token) in tokens.iter().enumerate() {
            let Some(mut weight) = self.weight_of(token) else {
                continue;
            };
            if idx > 0 && is_negator(tokens[idx - 1].as_str()) {
                weight = weight.saturating_neg();
            }
            score = score.saturating_add(weight);
            if weight > 0 {
                positive.push(token.clone());
            } else if weight < 0 {
                negative.push(token.clone());
            }
        }

        let comparative = if tokens.is_empty() {
            0.0
        } else {
            f64::from(score) / tokens.len() as f64
        };

        SentimentAnalysis {
            score,
            comparative,
            tokens,
            positive,
            negative,
        }
    }

    fn weight_of(&self, token: &str) -> Option<i32> {
        self.extras
            .get(token)
            .copied()
            .or_else(|| BUNDLED_WEIGHTS.get(token).copied())
    }
}

impl SentimentAnalyzer for LexiconAnalyzer {
    fn score(&self, text: &str) -> i32 {
        self.analyze(text).score
    }
}

/// Splits text into lower-case tokens with punctuation removed.
///
/// Any run of whitespace separates two tokens; `"good  news"` yields two
/// tokens, not three.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    PUNCTUATION_RE
        .replace_all(&lowered, "")
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

fn is_negator(token: &str) -> bool {
    NEGATORS.contains(&token)
}
