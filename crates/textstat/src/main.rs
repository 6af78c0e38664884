//! textstat CLI
#![deny(unsafe_code)]

use clap::{CommandFactory, Parser};
use owo_colors::OwoColorize;
use tracing::debug;

use textstat::Cli;
use textstat::input::{self, InputSource};
use textstat_core::{Format, analyze, render};

mod observability;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli.color.apply();

    let env_filter = observability::env_filter(cli.quiet, cli.verbose);
    observability::init_observability(env_filter);

    debug!(
        file = ?cli.file,
        format = %cli.format,
        has_string = cli.string.is_some(),
        "CLI initialized"
    );

    let Some(source) = InputSource::resolve(cli.file, cli.string) else {
        Cli::command().print_help()?;
        return Ok(());
    };

    // Input failures are recoverable: report and skip the analysis
    let acquired = match input::read_source(source) {
        Ok(acquired) => acquired,
        Err(err) => {
            tracing::error!(error = %err, "input unavailable");
            eprintln!("{} {err:#}", "error:".red());
            return Ok(());
        }
    };

    if let Some(ref origin) = acquired.origin
        && cli.format == Format::Standard
    {
        println!("Analyzing file: {}", origin.path.bold());
        println!("File size: {} bytes", origin.size_bytes);
    }

    let stats = analyze(&acquired.text);
    let rendered = render(&stats, cli.format)?;
    print!("{rendered}");

    Ok(())
}
