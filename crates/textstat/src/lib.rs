//! Library interface for the `textstat` CLI.
//!
//! This crate exposes the CLI's argument parser as a library, primarily for
//! testing. The actual entry point is in `main.rs`.

pub mod input;

use camino::Utf8PathBuf;
use clap::Parser;
use textstat_core::Format;

/// Color output preference.
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect terminal capabilities automatically.
    #[default]
    Auto,
    /// Always emit colors.
    Always,
    /// Never emit colors.
    Never,
}

impl ColorChoice {
    /// Configure global color output based on this choice.
    ///
    /// Call this once at startup to set the color mode.
    pub fn apply(self) {
        match self {
            Self::Auto => {} // owo-colors auto-detects by default
            Self::Always => owo_colors::set_override(true),
            Self::Never => owo_colors::set_override(false),
        }
    }
}

const ENV_HELP: &str = "\
ENVIRONMENT VARIABLES:
    RUST_LOG    Log filter (e.g., debug, textstat=trace)
";

/// Command-line interface definition for textstat.
///
/// One input source is used per invocation: a file argument wins over
/// `--string`, which wins over piped stdin. With no source at all the
/// usage text is shown instead.
#[derive(Parser, Debug)]
#[command(name = "textstat")]
#[command(about = "Analyze text files and input", long_about = None)]
#[command(version)]
#[command(after_long_help = ENV_HELP)]
pub struct Cli {
    /// Text file to analyze (or read from stdin if not provided)
    pub file: Option<Utf8PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t)]
    pub format: Format,

    /// Analyze a string directly
    #[arg(short, long, value_name = "TEXT")]
    pub string: Option<String>,

    /// Only print errors (suppresses warnings/info)
    #[arg(short, long)]
    pub quiet: bool,

    /// More detail (repeatable; e.g. -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Colorize output
    #[arg(long, value_enum, default_value_t)]
    pub color: ColorChoice,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn format_defaults_to_standard() {
        let cli = Cli::parse_from(["textstat"]);
        assert_eq!(cli.format, Format::Standard);
    }

    #[test]
    fn format_flag_parses() {
        let cli = Cli::parse_from(["textstat", "-f", "json"]);
        assert_eq!(cli.format, Format::Json);
        let cli = Cli::parse_from(["textstat", "--format", "csv"]);
        assert_eq!(cli.format, Format::Csv);
    }

    #[test]
    fn string_flag_parses() {
        let cli = Cli::parse_from(["textstat", "-s", "some text"]);
        assert_eq!(cli.string.as_deref(), Some("some text"));
    }
}
