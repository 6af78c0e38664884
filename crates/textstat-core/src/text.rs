//! Text segmentation helpers.
//!
//! Provides the character, word, sentence, paragraph, and line splitting
//! used by the analysis pass. All functions are total: any input, including
//! empty text, produces a well-defined result.

use regex::Regex;
use std::sync::LazyLock;

/// Regex for sentence boundaries: a run of terminators plus trailing space.
static SENTENCE_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+\s*").expect("valid regex"));

/// Remove every whitespace character from `text`.
pub fn strip_whitespace(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Split trimmed text into non-empty sentence segments.
///
/// Text without any terminator yields one sentence if it is non-blank.
pub fn split_sentences(text: &str) -> Vec<&str> {
    SENTENCE_BOUNDARY
        .split(text.trim())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Split text into paragraphs separated by blank lines, dropping segments
/// that are empty after trimming.
pub fn split_paragraphs(text: &str) -> Vec<&str> {
    text.split("\n\n").filter(|p| !p.trim().is_empty()).collect()
}

/// Count newline-delimited segments.
///
/// Empty text counts as one line; a trailing newline contributes a trailing
/// empty segment that is counted.
pub fn count_lines(text: &str) -> usize {
    text.split('\n').count()
}

/// Lowercase a token and strip everything that is not a word character
/// (alphanumeric or underscore). Returns `None` if nothing survives.
pub fn clean_word(token: &str) -> Option<String> {
    let cleaned: String = token
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_')
        .collect();
    (!cleaned.is_empty()).then_some(cleaned)
}

/// Extract the cleaned-word list from text: whitespace-split, lowercase,
/// strip non-word characters, discard tokens that clean away to nothing.
pub fn clean_words(text: &str) -> Vec<String> {
    text.split_whitespace().filter_map(clean_word).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_whitespace_removes_all_kinds() {
        assert_eq!(strip_whitespace("a b\tc\nd\re"), "abcde");
        assert_eq!(strip_whitespace("   "), "");
        assert_eq!(strip_whitespace(""), "");
    }

    #[test]
    fn basic_sentences() {
        let sentences = split_sentences("This is one. This is two! Three?");
        assert_eq!(sentences, vec!["This is one", "This is two", "Three"]);
    }

    #[test]
    fn terminator_runs_collapse() {
        let sentences = split_sentences("Really?! Yes... definitely.");
        assert_eq!(sentences, vec!["Really", "Yes", "definitely"]);
    }

    #[test]
    fn no_terminator_is_one_sentence() {
        assert_eq!(split_sentences("  no punctuation here  ").len(), 1);
    }

    #[test]
    fn empty_text_has_no_sentences() {
        assert!(split_sentences("").is_empty());
        assert!(split_sentences("   \n ").is_empty());
    }

    #[test]
    fn paragraphs_split_on_blank_lines() {
        let paras = split_paragraphs("First.\n\nSecond.\n\n\n\nThird.");
        assert_eq!(paras.len(), 3);
    }

    #[test]
    fn line_counting() {
        assert_eq!(count_lines(""), 1);
        assert_eq!(count_lines("one line"), 1);
        assert_eq!(count_lines("a\nb"), 2);
        // Trailing newline yields a counted empty segment
        assert_eq!(count_lines("a\nb\n"), 3);
    }

    #[test]
    fn clean_word_strips_punctuation() {
        assert_eq!(clean_word("Hello,"), Some("hello".to_string()));
        assert_eq!(clean_word("world!"), Some("world".to_string()));
        assert_eq!(clean_word("snake_case"), Some("snake_case".to_string()));
        assert_eq!(clean_word("C-3PO"), Some("c3po".to_string()));
    }

    #[test]
    fn clean_word_discards_pure_punctuation() {
        assert_eq!(clean_word("---"), None);
        assert_eq!(clean_word("!?"), None);
    }

    #[test]
    fn clean_words_end_to_end() {
        let words = clean_words("Hello, world! It's 2024.");
        assert_eq!(words, vec!["hello", "world", "its", "2024"]);
    }
}
