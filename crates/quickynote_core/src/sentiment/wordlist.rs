//! Bundled AFINN-165 word weights.
//!
//! Weights range from -5 (very negative) to 5 (very positive). The data lives
//! in `afinn-165.tsv` as one `word<TAB>weight` pair per line and is embedded
//! at compile time. Multi-word entries are kept as published; the
//! single-token scorer never matches them.

/// Raw tab-separated AFINN-165 data.
const AFINN_165: &str = include_str!("afinn-165.tsv");

pub(crate) const NEGATORS: &[&str] = &[
    "can't", "cant", "doesn't", "doesnt", "don't", "dont", "isn't", "isnt", "non", "not", "won't",
    "wont",
];

/// Iterates the bundled `(word, weight)` pairs.
///
/// Blank lines and lines without a parsable integer weight are skipped.
pub(crate) fn word_weights() -> impl Iterator<Item = (&'static str, i32)> {
    AFINN_165.lines().filter_map(parse_line)
}

fn parse_line(line: &str) -> Option<(&str, i32)> {
    let (word, weight) = line.split_once('\t')?;
    let word = word.trim();
    if word.is_empty() {
        return None;
    }
    weight.trim().parse().ok().map(|weight| (word, weight))
}
