//! The single-pass analysis pipeline.
//!
//! [`analyze`] turns raw text into a [`TextStats`] record. It is total and
//! side-effect-free: any input, including the empty string, produces a
//! fully-populated record without error.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::hash::Hash;

use crate::readability;
use crate::stats::TextStats;
use crate::syllables;
use crate::text;

/// Analyze `text` and return its statistics.
///
/// Frequency tables are ordered by descending count with first-encountered
/// order breaking ties, so repeated runs over the same input are
/// byte-for-byte deterministic.
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
pub fn analyze(text: &str) -> TextStats {
    let character_count = text.chars().count();
    let character_count_no_spaces = text::strip_whitespace(text).chars().count();

    let word_count = text.split_whitespace().count();
    let sentence_count = text::split_sentences(text).len();
    let paragraph_count = text::split_paragraphs(text).len();
    let line_count = text::count_lines(text);

    // 200 words per minute
    let reading_time = round1(word_count as f64 / 200.0);

    let char_tally = tally_ordered(
        text.chars()
            .filter(|c| c.is_alphabetic())
            .flat_map(char::to_lowercase),
    );
    let most_common_chars = top_n(char_tally, 5);

    let clean_words = text::clean_words(text);

    let word_tally = tally_ordered(clean_words.iter().cloned());
    let unique_words = word_tally.len();
    let most_common_words = top_n(word_tally, 10);

    let average_word_length = if clean_words.is_empty() {
        0.0
    } else {
        let total_len: usize = clean_words.iter().map(|w| w.chars().count()).sum();
        round1(total_len as f64 / clean_words.len() as f64)
    };

    let average_sentence_length = if sentence_count > 0 {
        round1(word_count as f64 / sentence_count as f64)
    } else {
        0.0
    };

    let syllable_count = syllables::count_syllables(&clean_words.join(" "));
    let flesch_score = readability::flesch_score(word_count, sentence_count, syllable_count);

    let lexical_diversity = if word_count > 0 {
        round1(unique_words as f64 / word_count as f64 * 100.0)
    } else {
        0.0
    };

    TextStats {
        character_count,
        character_count_no_spaces,
        word_count,
        sentence_count,
        paragraph_count,
        line_count,
        reading_time,
        average_word_length,
        average_sentence_length,
        flesch_score,
        unique_words,
        lexical_diversity,
        most_common_chars,
        most_common_words,
    }
}

/// Tally items into `(item, count)` pairs in first-encountered order.
///
/// A plain `HashMap` alone would lose the encounter order that the
/// frequency tables use for tie-breaking.
fn tally_ordered<K, I>(items: I) -> Vec<(K, usize)>
where
    K: Eq + Hash + Clone,
    I: IntoIterator<Item = K>,
{
    let mut counts: HashMap<K, usize> = HashMap::new();
    let mut order: Vec<K> = Vec::new();

    for item in items {
        match counts.entry(item) {
            Entry::Occupied(mut e) => {
                *e.get_mut() += 1;
            }
            Entry::Vacant(e) => {
                order.push(e.key().clone());
                e.insert(1);
            }
        }
    }

    order
        .into_iter()
        .map(|k| {
            let count = counts[&k];
            (k, count)
        })
        .collect()
}

/// Keep the `n` highest-count entries. The sort is stable, so entries with
/// equal counts stay in first-encountered order.
fn top_n<K>(mut entries: Vec<(K, usize)>, n: usize) -> Vec<(K, usize)> {
    entries.sort_by(|a, b| b.1.cmp(&a.1));
    entries.truncate(n);
    entries
}

/// Round to one decimal place, half away from zero (`f64::round` semantics).
fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}
