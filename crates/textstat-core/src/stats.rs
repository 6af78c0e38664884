//! The statistics record produced by a single analysis pass.

use serde::{Deserialize, Serialize};

/// Descriptive statistics for one body of text.
///
/// Produced by [`crate::analysis::analyze`] and immutable afterwards. Field
/// declaration order is the canonical key order for the JSON and CSV
/// presenters, so do not reorder fields without updating the CSV renderer.
///
/// All 1-decimal-place metrics are rounded half-away-from-zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextStats {
    /// Total characters, whitespace included.
    pub character_count: usize,
    /// Characters remaining after removing all whitespace.
    pub character_count_no_spaces: usize,
    /// Whitespace-delimited tokens.
    pub word_count: usize,
    /// Non-empty sentence segments.
    pub sentence_count: usize,
    /// Non-empty blocks separated by blank lines.
    pub paragraph_count: usize,
    /// Newline-delimited segments (always at least 1).
    pub line_count: usize,
    /// Estimated reading time in minutes, at 200 words per minute.
    pub reading_time: f64,
    /// Mean character length of cleaned words; 0 when there are none.
    pub average_word_length: f64,
    /// Words per sentence; 0 when there are no sentences.
    pub average_sentence_length: f64,
    /// Flesch Reading Ease score; 0 when words or sentences are absent.
    pub flesch_score: f64,
    /// Distinct cleaned words.
    pub unique_words: usize,
    /// Unique words as a percentage of total words.
    pub lexical_diversity: f64,
    /// Top alphabetic characters by frequency, case-folded, at most 5.
    pub most_common_chars: Vec<(char, usize)>,
    /// Top cleaned words by frequency, at most 10.
    pub most_common_words: Vec<(String, usize)>,
}
