//! Input acquisition.
//!
//! Resolves which of the three sources supplies the text (file argument,
//! literal string, piped stdin) and reads it fully. Read failures are
//! recoverable: the caller reports them and skips the analysis rather than
//! crashing.

use std::io::{IsTerminal, Read};

use anyhow::Context;
use camino::Utf8PathBuf;
use tracing::debug;

/// Where the text to analyze comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// A named file, read fully as UTF-8.
    File(Utf8PathBuf),
    /// A literal string supplied on the command line.
    Literal(String),
    /// Standard input, read fully when it is not an interactive terminal.
    Stdin,
}

impl InputSource {
    /// Pick the source for this invocation.
    ///
    /// Precedence: file argument, then literal string, then piped stdin.
    /// Returns `None` when nothing is supplied and stdin is interactive;
    /// the caller shows usage in that case.
    pub fn resolve(file: Option<Utf8PathBuf>, literal: Option<String>) -> Option<Self> {
        if let Some(path) = file {
            return Some(Self::File(path));
        }
        if let Some(text) = literal {
            return Some(Self::Literal(text));
        }
        if !std::io::stdin().is_terminal() {
            return Some(Self::Stdin);
        }
        None
    }
}

/// Metadata about a file source, used by the standard report header.
#[derive(Debug)]
pub struct FileOrigin {
    /// Path as given on the command line.
    pub path: Utf8PathBuf,
    /// File size in bytes.
    pub size_bytes: u64,
}

/// Text read from a resolved source.
#[derive(Debug)]
pub struct AcquiredText {
    /// The complete input text.
    pub text: String,
    /// Present only when the source was a file.
    pub origin: Option<FileOrigin>,
}

/// Read the resolved source to completion.
pub fn read_source(source: InputSource) -> anyhow::Result<AcquiredText> {
    match source {
        InputSource::File(path) => {
            let metadata = std::fs::metadata(path.as_std_path())
                .with_context(|| format!("failed to read {path}"))?;
            let text = std::fs::read_to_string(path.as_std_path())
                .with_context(|| format!("failed to read {path}"))?;
            debug!(path = %path, bytes = metadata.len(), "read input file");
            Ok(AcquiredText {
                text,
                origin: Some(FileOrigin {
                    path,
                    size_bytes: metadata.len(),
                }),
            })
        }
        InputSource::Literal(text) => Ok(AcquiredText { text, origin: None }),
        InputSource::Stdin => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("failed to read from stdin")?;
            debug!(bytes = text.len(), "read stdin");
            Ok(AcquiredText { text, origin: None })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_wins_over_string() {
        let source = InputSource::resolve(
            Some(Utf8PathBuf::from("notes.txt")),
            Some("literal".to_string()),
        );
        assert_eq!(source, Some(InputSource::File(Utf8PathBuf::from("notes.txt"))));
    }

    #[test]
    fn string_used_without_file() {
        let source = InputSource::resolve(None, Some("literal".to_string()));
        assert_eq!(source, Some(InputSource::Literal("literal".to_string())));
    }

    #[test]
    fn missing_file_reports_cause() {
        let source = InputSource::File(Utf8PathBuf::from("/nonexistent/notes.txt"));
        let err = read_source(source).unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/notes.txt"));
    }

    #[test]
    fn literal_reads_verbatim() {
        let acquired =
            read_source(InputSource::Literal("Hello world.".to_string())).unwrap();
        assert_eq!(acquired.text, "Hello world.");
        assert!(acquired.origin.is_none());
    }
}
