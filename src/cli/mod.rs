//! CLI argument parsing for diffstat.
//!
//! Uses clap derive macros for declarative argument definitions. Branches
//! may be given positionally (`diffstat main feature`) or with flags
//! (`--branch1=main --branch2=feature`); flags win when both are present.

use crate::config::OutputFormat;
use crate::error::{DiffstatError, Result};
use crate::exit_codes;
use clap::Parser;
use clap::error::ErrorKind;
use std::ffi::{OsStr, OsString};
use std::path::PathBuf;

/// Diffstat: report what share of a branch changed relative to another.
///
/// Counts total lines in the target branch, counts lines added plus
/// deleted between the two branches, and prints the percentage.
#[derive(Parser, Debug)]
#[command(name = "diffstat")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Base branch to compare from.
    #[arg(value_name = "BRANCH1")]
    pub branch1_positional: Option<String>,

    /// Target branch to compare to; its lines form the total.
    #[arg(value_name = "BRANCH2")]
    pub branch2_positional: Option<String>,

    /// Base branch to compare from.
    #[arg(long = "branch1", value_name = "BRANCH")]
    pub branch1: Option<String>,

    /// Target branch to compare to.
    #[arg(long = "branch2", value_name = "BRANCH")]
    pub branch2: Option<String>,

    /// Output format (text, json, custom).
    #[arg(long)]
    pub format: Option<String>,

    /// Field separator for the custom format (supports \n and \t escapes).
    #[arg(long)]
    pub separator: Option<String>,

    /// Disable colored output.
    #[arg(long)]
    pub no_color: bool,

    /// Count total lines in the working tree instead of branch2.
    #[arg(long)]
    pub worktree: bool,

    /// Average bytes per line used to estimate binary changes.
    #[arg(long, value_name = "N")]
    pub bytes_per_line: Option<u64>,

    /// Line counting convention (segments, lines).
    #[arg(long, value_name = "CONVENTION")]
    pub line_convention: Option<String>,

    /// Glob patterns for paths to leave out of both counts.
    #[arg(long, value_delimiter = ',')]
    pub exclude: Vec<String>,

    /// Path to a config file (default: .diffstat.yaml at the repository root).
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Run as if started in this directory.
    #[arg(short = 'C', value_name = "DIR", default_value = ".")]
    pub repo: PathBuf,

    /// Log diagnostic detail to stderr.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Parse process arguments.
    ///
    /// `--help` and `--version` print and exit 0. Any other parse failure is
    /// returned so it can be reported in the requested output format.
    pub fn parse_args<I, T>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        match Cli::try_parse_from(args) {
            Ok(cli) => Ok(cli),
            Err(err) if !err.use_stderr() => {
                let _ = err.print();
                std::process::exit(exit_codes::SUCCESS);
            }
            Err(err) => Err(argument_error(&err)),
        }
    }

    /// The two branches to compare, with flags taking precedence.
    pub fn branches(&self) -> Option<(String, String)> {
        let branch1 = self.branch1.as_ref().or(self.branch1_positional.as_ref())?;
        let branch2 = self.branch2.as_ref().or(self.branch2_positional.as_ref())?;
        Some((branch1.clone(), branch2.clone()))
    }
}

/// Map a clap parse failure onto the diffstat error taxonomy.
///
/// A bad value for a known flag names the value; anything else (extra
/// positionals, unknown flags) gets the usage line.
pub fn argument_error(err: &clap::Error) -> DiffstatError {
    match err.kind() {
        ErrorKind::InvalidValue | ErrorKind::ValueValidation | ErrorKind::InvalidUtf8 => {
            let rendered = err.render().to_string();
            let first = rendered.lines().next().unwrap_or_default();
            DiffstatError::UserError(first.strip_prefix("error: ").unwrap_or(first).to_string())
        }
        _ => DiffstatError::Usage,
    }
}

/// Output format named by `--format`, read straight from raw arguments.
///
/// Used only when clap rejects the command line, so the error can still
/// take the requested shape.
pub fn format_hint<I, S>(args: I) -> Option<OutputFormat>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        let Some(arg) = arg.as_ref().to_str() else {
            continue;
        };
        if arg == "--format" {
            return args
                .next()
                .and_then(|value| value.as_ref().to_str().and_then(OutputFormat::from_str));
        }
        if let Some(value) = arg.strip_prefix("--format=") {
            return OutputFormat::from_str(value);
        }
    }
    None
}

/// Whether `--no-color` appears in raw arguments.
pub fn no_color_hint<I, S>(args: I) -> bool
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    args.into_iter().any(|arg| arg.as_ref() == "--no-color")
}
