//! Git command runner for diffstat.
//!
//! Provides a safe wrapper around git commands with captured stdout/stderr
//! and structured error handling. All git invocations go through this module.

use crate::error::{DiffstatError, Result};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Result of a successful git command execution.
#[derive(Debug, Clone)]
pub struct GitOutput {
    /// Standard output from the command (trimmed).
    pub stdout: String,
    /// Standard error from the command (trimmed).
    pub stderr: String,
}

impl GitOutput {
    /// Create a new GitOutput from raw output bytes.
    fn from_output(output: &Output) -> Self {
        Self {
            stdout: String::from_utf8_lossy(&output.stdout).trim().to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        }
    }
}

fn command_name<S: AsRef<OsStr>>(args: &[S]) -> String {
    args.first()
        .map(|arg| arg.as_ref().to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn execute<S: AsRef<OsStr>>(cwd: &Path, args: &[S]) -> Result<Output> {
    Command::new("git")
        .current_dir(cwd)
        .args(args)
        .output()
        .map_err(|e| {
            DiffstatError::GitError(format!(
                "failed to execute git {}: {} (is git installed?)",
                command_name(args),
                e
            ))
        })
}

fn failure<S: AsRef<OsStr>>(args: &[S], output: &Output) -> DiffstatError {
    let git_output = GitOutput::from_output(output);
    let exit_code = output.status.code().unwrap_or(-1);
    let error_msg = if git_output.stderr.is_empty() {
        git_output.stdout
    } else {
        git_output.stderr
    };

    DiffstatError::GitError(format!(
        "git {} failed (exit code {}): {}",
        command_name(args),
        exit_code,
        error_msg
    ))
}

/// Run a git command with the specified working directory.
///
/// # Returns
///
/// * `Ok(GitOutput)` - On successful execution (exit code 0)
/// * `Err(DiffstatError::GitError)` - On spawn failure or non-zero exit code
pub fn run_git<P: AsRef<Path>, S: AsRef<OsStr>>(cwd: P, args: &[S]) -> Result<GitOutput> {
    let output = execute(cwd.as_ref(), args)?;

    if output.status.success() {
        Ok(GitOutput::from_output(&output))
    } else {
        Err(failure(args, &output))
    }
}

/// Run a git command and return stdout bytes untouched.
///
/// Used where exact content matters: blob contents and `-z` path listings.
pub fn run_git_raw<P: AsRef<Path>, S: AsRef<OsStr>>(cwd: P, args: &[S]) -> Result<Vec<u8>> {
    let output = execute(cwd.as_ref(), args)?;

    if output.status.success() {
        Ok(output.stdout)
    } else {
        Err(failure(args, &output))
    }
}

/// Split `-z` output into its NUL-terminated records, bytes unchanged.
pub fn nul_records(output: &[u8]) -> impl Iterator<Item = &[u8]> {
    output.split(|&b| b == 0).filter(|record| !record.is_empty())
}

/// Build a path from the bytes git printed for it.
#[cfg(unix)]
pub fn path_from_bytes(bytes: &[u8]) -> PathBuf {
    use std::os::unix::ffi::OsStrExt;
    PathBuf::from(OsStr::from_bytes(bytes))
}

/// Build a path from the bytes git printed for it.
///
/// Git for Windows writes paths as UTF-8.
#[cfg(not(unix))]
pub fn path_from_bytes(bytes: &[u8]) -> PathBuf {
    PathBuf::from(String::from_utf8_lossy(bytes).into_owned())
}

/// Get the repository root directory using `git rev-parse --show-toplevel`.
///
/// # Returns
///
/// * `Ok(PathBuf)` - The absolute path to the repository root
/// * `Err(DiffstatError::UserError)` - If not inside a git repository
pub fn get_repo_root<P: AsRef<Path>>(cwd: P) -> Result<PathBuf> {
    let cwd = cwd.as_ref();
    match run_git(cwd, &["rev-parse", "--show-toplevel"]) {
        Ok(output) => Ok(PathBuf::from(&output.stdout)),
        Err(DiffstatError::GitError(msg)) if msg.contains("not a git repository") => {
            Err(DiffstatError::UserError(format!(
                "not inside a git repository: {}",
                cwd.display()
            )))
        }
        Err(e) => Err(e),
    }
}

/// Resolve a branch, tag, or commit name to a commit SHA.
///
/// Any failure is reported as a `ReferenceError` naming the revision.
pub fn resolve_commit<P: AsRef<Path>>(cwd: P, rev: &str) -> Result<String> {
    let object = format!("{}^{{commit}}", rev);
    run_git(cwd, &["rev-parse", "--verify", "--quiet", object.as_str()])
        .map(|output| output.stdout)
        .map_err(|_| DiffstatError::ReferenceError(rev.to_string()))
}
