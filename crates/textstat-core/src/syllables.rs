//! Heuristic syllable estimation.
//!
//! Counts vowel-group starts with adjustments for `-le` and silent-`e`
//! endings. This is a reproducible heuristic, not a linguistic syllabifier:
//! irregular words will sometimes be over- or under-counted, and that is
//! acceptable as long as the algorithm itself is stable.

const VOWELS: &[u8] = b"aeiouy";

fn is_vowel(b: u8) -> bool {
    VOWELS.contains(&b)
}

/// Estimate the syllable count of a single word. Always at least 1.
pub fn estimate(word: &str) -> usize {
    let word = word.to_lowercase();

    // Single-character words (measured before stripping) are one syllable
    if word.chars().count() <= 1 {
        return 1;
    }

    let letters: Vec<u8> = word.bytes().filter(u8::is_ascii_lowercase).collect();

    // Count transitions into a vowel group
    let mut count: usize = 0;
    let mut previous_was_vowel = false;
    for &b in &letters {
        let vowel = is_vowel(b);
        if vowel && !previous_was_vowel {
            count += 1;
        }
        previous_was_vowel = vowel;
    }

    // Consonant + "le" ending carries its own syllable (bubble, table)
    if letters.len() > 2
        && letters.ends_with(b"le")
        && !is_vowel(letters[letters.len() - 3])
    {
        count += 1;
    }

    // Trailing "e" is usually silent
    if letters.ends_with(b"e") {
        count = count.saturating_sub(1);
    }

    count.max(1)
}

/// Sum syllable estimates over every whitespace-delimited word in `text`.
pub fn count_syllables(text: &str) -> usize {
    text.split_whitespace().map(estimate).sum()
}
