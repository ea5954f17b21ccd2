//! Version-control queries used by the line counter and change estimator.
//!
//! The measurement code only talks to the [`Backend`] trait, so any source
//! that can list files, read blobs, summarize a diff, and report sizes can
//! stand in for git. [`GitBackend`] is the production implementation.

use crate::error::{DiffstatError, Result};
use crate::git::{nul_records, path_from_bytes, resolve_commit, run_git, run_git_raw};
use std::ffi::{OsStr, OsString};
use std::fmt;
use std::path::{Path, PathBuf};

/// A point to read file contents from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Revision {
    /// The checked-out files on disk.
    WorkingTree,
    /// A branch, tag, or commit.
    Named(String),
}

impl Revision {
    /// Construct a named revision.
    pub fn named(name: impl Into<String>) -> Self {
        Revision::Named(name.into())
    }
}

impl fmt::Display for Revision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Revision::WorkingTree => write!(f, "working tree"),
            Revision::Named(name) => write!(f, "{}", name),
        }
    }
}

/// Queries the measurement code needs from a version-control system.
pub trait Backend {
    /// Fail with `ReferenceError` if a named revision does not exist.
    fn resolve(&self, rev: &Revision) -> Result<()>;

    /// List tracked file paths, repo-relative, each path once.
    fn list_files(&self, rev: &Revision) -> Result<Vec<PathBuf>>;

    /// Read the raw bytes of a file at a revision.
    fn read_file(&self, rev: &Revision, path: &Path) -> Result<Vec<u8>>;

    /// Per-file added/deleted summary between two named revisions,
    /// in `git diff --numstat -z` format.
    fn diff_summary(&self, from: &str, to: &str) -> Result<Vec<u8>>;

    /// Size in bytes of a file at a named revision.
    fn file_size(&self, rev: &str, path: &Path) -> Result<u64>;
}

/// Backend that shells out to the `git` binary.
#[derive(Debug, Clone)]
pub struct GitBackend {
    repo_root: PathBuf,
}

impl GitBackend {
    pub fn new(repo_root: impl Into<PathBuf>) -> Self {
        Self {
            repo_root: repo_root.into(),
        }
    }
}

/// `<rev>:<path>` object name, built without a UTF-8 round trip.
fn object_name(rev: &str, path: &Path) -> OsString {
    let mut name = OsString::from(rev);
    name.push(":");
    name.push(path);
    name
}

impl Backend for GitBackend {
    fn resolve(&self, rev: &Revision) -> Result<()> {
        match rev {
            Revision::WorkingTree => Ok(()),
            Revision::Named(name) => resolve_commit(&self.repo_root, name).map(|_| ()),
        }
    }

    fn list_files(&self, rev: &Revision) -> Result<Vec<PathBuf>> {
        let output = match rev {
            Revision::WorkingTree => run_git_raw(&self.repo_root, &["ls-files", "-z"]),
            Revision::Named(name) => run_git_raw(
                &self.repo_root,
                &["ls-tree", "-r", "--name-only", "-z", name.as_str()],
            ),
        }
        .map_err(|e| DiffstatError::EnumerationError(format!("{}: {}", rev, e)))?;

        let mut files: Vec<PathBuf> = nul_records(&output).map(path_from_bytes).collect();
        // ls-files repeats an unmerged path once per conflict stage, adjacently.
        files.dedup();
        Ok(files)
    }

    fn read_file(&self, rev: &Revision, path: &Path) -> Result<Vec<u8>> {
        match rev {
            Revision::WorkingTree => std::fs::read(self.repo_root.join(path))
                .map_err(|e| DiffstatError::ReadError(format!("{}: {}", path.display(), e))),
            Revision::Named(name) => {
                let object = object_name(name, path);
                run_git_raw(
                    &self.repo_root,
                    &[OsStr::new("cat-file"), OsStr::new("blob"), object.as_os_str()],
                )
                .map_err(|e| {
                    DiffstatError::ReadError(format!("{}: {}", object.to_string_lossy(), e))
                })
            }
        }
    }

    fn diff_summary(&self, from: &str, to: &str) -> Result<Vec<u8>> {
        run_git_raw(&self.repo_root, &["diff", "--numstat", "-z", from, to, "--"])
    }

    fn file_size(&self, rev: &str, path: &Path) -> Result<u64> {
        let object = object_name(rev, path);
        let output = run_git(
            &self.repo_root,
            &[OsStr::new("cat-file"), OsStr::new("-s"), object.as_os_str()],
        )
        .map_err(|e| DiffstatError::ReadError(format!("{}: {}", object.to_string_lossy(), e)))?;

        output.stdout.parse().map_err(|_| {
            DiffstatError::ParseError(format!(
                "size of '{}': '{}'",
                object.to_string_lossy(),
                output.stdout
            ))
        })
    }
}
