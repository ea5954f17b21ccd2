//! Run settings, resolved once from the command line and config file.
//!
//! Everything downstream receives `&Settings`; nothing reads flags or
//! environment on its own.

use crate::backend::Revision;
use crate::cli::Cli;
use crate::config::{Config, LineConvention, OutputFormat};
use crate::count::CountOptions;
use crate::diff::ChangeOptions;
use crate::error::{DiffstatError, Result};
use crate::filter::PathFilter;
use crate::git::get_repo_root;
use std::path::PathBuf;

/// Immutable settings for one run.
#[derive(Debug, Clone)]
pub struct Settings {
    pub repo_root: PathBuf,
    pub branch1: String,
    pub branch2: String,
    /// Count total lines in the working tree rather than `branch2`.
    pub count_worktree: bool,
    pub format: OutputFormat,
    pub separator: String,
    pub color: bool,
    pub bytes_per_line: u64,
    pub line_convention: LineConvention,
    /// Combined config and command-line exclude patterns.
    pub filter: PathFilter,
}

impl Settings {
    /// Build settings for a run: locate the repository, load its config,
    /// and apply command-line overrides.
    pub fn load(cli: &Cli, color_allowed: bool) -> Result<Self> {
        let (branch1, branch2) = cli.branches().ok_or(DiffstatError::Usage)?;
        let repo_root = get_repo_root(&cli.repo)?;
        let config = Config::discover(&repo_root, cli.config.as_deref())?;

        Self::resolve(cli, config, repo_root, branch1, branch2, color_allowed)
    }

    /// Merge CLI flags over config values. Flags win.
    pub fn resolve(
        cli: &Cli,
        config: Config,
        repo_root: PathBuf,
        branch1: String,
        branch2: String,
        color_allowed: bool,
    ) -> Result<Self> {
        let format = match cli.format.as_deref() {
            Some(s) => OutputFormat::from_str(s).ok_or_else(|| {
                DiffstatError::UserError(format!(
                    "invalid format '{}': expected text, json, or custom",
                    s
                ))
            })?,
            None => config.format,
        };

        let line_convention = match cli.line_convention.as_deref() {
            Some(s) => LineConvention::from_str(s).ok_or_else(|| {
                DiffstatError::UserError(format!(
                    "invalid line convention '{}': expected segments or lines",
                    s
                ))
            })?,
            None => config.line_convention,
        };

        let bytes_per_line = cli.bytes_per_line.unwrap_or(config.bytes_per_line);
        if bytes_per_line == 0 {
            return Err(DiffstatError::UserError(
                "--bytes-per-line must be greater than 0".to_string(),
            ));
        }

        let separator = cli
            .separator
            .as_deref()
            .map(unescape_separator)
            .unwrap_or(config.separator);

        let mut exclude = config.exclude;
        exclude.extend(cli.exclude.iter().cloned());
        let filter = PathFilter::new(&exclude)?;

        Ok(Self {
            repo_root,
            branch1,
            branch2,
            count_worktree: cli.worktree,
            format,
            separator,
            color: color_allowed && config.color && !cli.no_color,
            bytes_per_line,
            line_convention,
            filter,
        })
    }

    /// Revision whose lines make up the total.
    pub fn total_revision(&self) -> Revision {
        if self.count_worktree {
            Revision::WorkingTree
        } else {
            Revision::named(self.branch2.clone())
        }
    }

    pub fn count_options(&self) -> CountOptions {
        CountOptions {
            convention: self.line_convention,
            filter: self.filter.clone(),
        }
    }

    pub fn change_options(&self) -> ChangeOptions {
        ChangeOptions {
            bytes_per_line: self.bytes_per_line,
            filter: self.filter.clone(),
        }
    }
}

/// Expand `\n`, `\t`, and `\\` in a separator typed on the command line.
pub fn unescape_separator(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }

    out
}
