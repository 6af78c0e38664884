//! Flesch Reading Ease scoring and interpretation.
//!
//! Formula: `206.835 - 1.015 * (words/sentences) - 84.6 * (syllables/words)`
//!
//! Higher score = more readable. Scores are rounded to one decimal place,
//! half away from zero.

/// Compute the Flesch Reading Ease score, rounded to one decimal place.
///
/// Returns 0.0 when there are no words or no sentences, since the formula
/// is undefined for an empty text.
pub fn flesch_score(word_count: usize, sentence_count: usize, syllable_count: usize) -> f64 {
    if word_count == 0 || sentence_count == 0 {
        return 0.0;
    }

    let words_per_sentence = word_count as f64 / sentence_count as f64;
    let syllables_per_word = syllable_count as f64 / word_count as f64;
    round1(206.835 - 1.015 * words_per_sentence - 84.6 * syllables_per_word)
}

/// Interpret a Flesch Reading Ease score as a grade-level label.
///
/// Tiers are evaluated top-down with inclusive lower bounds; the first
/// match wins.
pub fn level(flesch_score: f64) -> &'static str {
    if flesch_score >= 90.0 {
        "Very Easy (5th grade)"
    } else if flesch_score >= 80.0 {
        "Easy (6th grade)"
    } else if flesch_score >= 70.0 {
        "Fairly Easy (7th grade)"
    } else if flesch_score >= 60.0 {
        "Standard (8th-9th grade)"
    } else if flesch_score >= 50.0 {
        "Fairly Difficult (10th-12th grade)"
    } else if flesch_score >= 30.0 {
        "Difficult (College level)"
    } else {
        "Very Difficult (Graduate level)"
    }
}

fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_words_or_sentences_scores_zero() {
        assert_eq!(flesch_score(0, 1, 0), 0.0);
        assert_eq!(flesch_score(5, 0, 5), 0.0);
    }

    #[test]
    fn short_simple_text_scores_high() {
        // 4 words, 2 sentences, 4 syllables:
        // 206.835 - 1.015 * 2 - 84.6 * 1 = 120.205 -> 120.2
        assert_eq!(flesch_score(4, 2, 4), 120.2);
    }

    #[test]
    fn level_boundaries_are_inclusive() {
        assert_eq!(level(90.0), "Very Easy (5th grade)");
        assert_eq!(level(89.9), "Easy (6th grade)");
        assert_eq!(level(80.0), "Easy (6th grade)");
        assert_eq!(level(70.0), "Fairly Easy (7th grade)");
        assert_eq!(level(60.0), "Standard (8th-9th grade)");
        assert_eq!(level(50.0), "Fairly Difficult (10th-12th grade)");
        assert_eq!(level(30.0), "Difficult (College level)");
        assert_eq!(level(29.9), "Very Difficult (Graduate level)");
        assert_eq!(level(-5.0), "Very Difficult (Graduate level)");
    }
}
