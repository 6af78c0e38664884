//! Logging and tracing setup for the CLI.

use tracing_subscriber::EnvFilter;

/// Build the log filter from the global flags, letting `RUST_LOG` win when set.
pub fn env_filter(quiet: bool, verbose: u8) -> EnvFilter {
    let default_level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

/// Install the global subscriber. Logs go to stderr so they never mix with
/// rendered reports on stdout.
pub fn init_observability(filter: EnvFilter) {
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
