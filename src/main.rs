//! Diffstat: report the percentage of lines changed between two git branches.
//!
//! This is the entry point for the `diffstat` CLI. It parses arguments,
//! resolves settings, runs the measurement, and renders either the result
//! or the error in the selected output format with the proper exit code.

mod backend;
mod cli;
mod commands;
mod config;
mod count;
mod diff;
mod error;
mod exit_codes;
mod filter;
mod git;
mod logging;
mod metric;
mod output;
mod settings;

#[cfg(test)]
mod test_support;

use cli::Cli;
use config::OutputFormat;
use error::DiffstatError;
use output::{Paint, Stream};
use settings::Settings;
use std::ffi::OsString;
use std::io::IsTerminal;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args: Vec<OsString> = std::env::args_os().collect();
    let terminal_color = output::color_allowed(
        std::env::var("NO_COLOR").ok().as_deref(),
        std::io::stdout().is_terminal(),
    );

    let cli = match Cli::parse_args(&args) {
        Ok(cli) => cli,
        Err(err) => {
            let format = cli::format_hint(&args).unwrap_or_default();
            let paint = Paint::new(terminal_color && !cli::no_color_hint(&args));
            return report_error(&err, format, paint);
        }
    };
    logging::init(cli.verbose);

    let color_allowed = terminal_color && !cli.no_color;

    // Until settings load, the format can only come from the flag.
    let fallback_format = cli
        .format
        .as_deref()
        .and_then(OutputFormat::from_str)
        .unwrap_or_default();

    let settings = match Settings::load(&cli, color_allowed) {
        Ok(settings) => settings,
        Err(err) => return report_error(&err, fallback_format, Paint::new(color_allowed)),
    };

    match commands::cmd_diffstat(&settings) {
        Ok(rendered) => {
            print!("{}", rendered);
            ExitCode::from(exit_codes::SUCCESS as u8)
        }
        Err(err) => report_error(&err, settings.format, Paint::new(settings.color)),
    }
}

/// Print an error in the active format and return its exit code.
fn report_error(err: &DiffstatError, format: OutputFormat, paint: Paint) -> ExitCode {
    let (stream, rendered) = output::render_error(err, format, paint);
    match stream {
        Stream::Stdout => print!("{}", rendered),
        Stream::Stderr => eprint!("{}", rendered),
    }
    ExitCode::from(err.exit_code() as u8)
}
