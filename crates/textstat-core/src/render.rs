//! Presenters for a [`TextStats`] record.
//!
//! Rendering is dispatched once over the closed [`Format`] enum. Every
//! presenter emits all fields of the record, in declaration order.

use std::fmt::Write;

use serde::{Deserialize, Serialize};

use crate::error::RenderResult;
use crate::readability;
use crate::stats::TextStats;

/// Output format for a rendered statistics record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum Format {
    /// Human-readable multi-section report.
    #[default]
    Standard,
    /// Pretty-printed JSON with stable key ordering.
    Json,
    /// Two-column `metric,value` table.
    Csv,
}

impl Format {
    /// Returns the format name as used on the command line.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Json => "json",
            Self::Csv => "csv",
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Render `stats` in the requested format.
#[tracing::instrument(skip(stats), fields(format = %format))]
pub fn render(stats: &TextStats, format: Format) -> RenderResult<String> {
    match format {
        Format::Standard => render_standard(stats),
        Format::Json => Ok(serde_json::to_string_pretty(stats)?),
        Format::Csv => render_csv(stats),
    }
}

fn render_standard(stats: &TextStats) -> RenderResult<String> {
    let mut out = String::new();
    let rule = "=".repeat(50);

    writeln!(out, "Text Analysis Results:")?;
    writeln!(out, "{rule}")?;
    writeln!(out, "Characters (total): {}", stats.character_count)?;
    writeln!(out, "Characters (no spaces): {}", stats.character_count_no_spaces)?;
    writeln!(out, "Words: {}", stats.word_count)?;
    writeln!(out, "Unique words: {}", stats.unique_words)?;
    writeln!(out, "Sentences: {}", stats.sentence_count)?;
    writeln!(out, "Paragraphs: {}", stats.paragraph_count)?;
    writeln!(out, "Lines: {}", stats.line_count)?;
    writeln!(out, "Reading time: {:.1} minutes", stats.reading_time)?;
    writeln!(out, "{rule}")?;

    writeln!(out, "\nMetrics:")?;
    writeln!(out, "Average word length: {:.1} characters", stats.average_word_length)?;
    writeln!(out, "Average sentence length: {:.1} words", stats.average_sentence_length)?;
    writeln!(out, "Lexical diversity: {:.1}%", stats.lexical_diversity)?;
    writeln!(out, "Flesch Reading Ease: {:.1}", stats.flesch_score)?;
    writeln!(out, "  → {}", readability::level(stats.flesch_score))?;

    writeln!(out, "\nMost Common Characters:")?;
    for (ch, count) in &stats.most_common_chars {
        writeln!(out, "  '{ch}': {count} times")?;
    }

    writeln!(out, "\nMost Common Words:")?;
    for (word, count) in &stats.most_common_words {
        writeln!(out, "  '{word}': {count} times")?;
    }

    Ok(out)
}

fn render_csv(stats: &TextStats) -> RenderResult<String> {
    let mut out = String::new();
    writeln!(out, "metric,value")?;
    writeln!(out, "character_count,{}", stats.character_count)?;
    writeln!(out, "character_count_no_spaces,{}", stats.character_count_no_spaces)?;
    writeln!(out, "word_count,{}", stats.word_count)?;
    writeln!(out, "sentence_count,{}", stats.sentence_count)?;
    writeln!(out, "paragraph_count,{}", stats.paragraph_count)?;
    writeln!(out, "line_count,{}", stats.line_count)?;
    writeln!(out, "reading_time,{:.1}", stats.reading_time)?;
    writeln!(out, "average_word_length,{:.1}", stats.average_word_length)?;
    writeln!(out, "average_sentence_length,{:.1}", stats.average_sentence_length)?;
    writeln!(out, "flesch_score,{:.1}", stats.flesch_score)?;
    writeln!(out, "unique_words,{}", stats.unique_words)?;
    writeln!(out, "lexical_diversity,{:.1}", stats.lexical_diversity)?;
    // Sequence fields collapse to one stringified cell each
    writeln!(
        out,
        "most_common_chars,{}",
        serde_json::to_string(&stats.most_common_chars)?
    )?;
    writeln!(
        out,
        "most_common_words,{}",
        serde_json::to_string(&stats.most_common_words)?
    )?;
    Ok(out)
}
