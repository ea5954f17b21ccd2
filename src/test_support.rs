use crate::backend::{Backend, Revision};
use crate::config::{LineConvention, OutputFormat};
use crate::diff::DEFAULT_BYTES_PER_LINE;
use crate::error::{DiffstatError, Result};
use crate::filter::PathFilter;
use crate::settings::Settings;
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Repository on branch `main` with a single commit containing `README.md` ("# Test\n").
pub(crate) fn create_test_repo() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path();

    git(path, &["init"]);
    // Deterministic default branch name across environments.
    git(path, &["symbolic-ref", "HEAD", "refs/heads/main"]);

    git(path, &["config", "user.email", "test@example.com"]);
    git(path, &["config", "user.name", "Test User"]);
    git(path, &["config", "core.autocrlf", "false"]);

    std::fs::write(path.join("README.md"), "# Test\n").unwrap();
    git(path, &["add", "."]);
    git(path, &["commit", "-m", "Initial commit"]);

    temp_dir
}

/// Write `contents` to `rel_path` and commit it on the current branch.
pub(crate) fn commit_file(repo_dir: &Path, rel_path: &str, contents: &[u8], message: &str) {
    let full = repo_dir.join(rel_path);
    if let Some(parent) = full.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(&full, contents).unwrap();
    git(repo_dir, &["add", rel_path]);
    git(repo_dir, &["commit", "-m", message]);
}

pub(crate) fn git(repo_dir: &Path, args: &[&str]) {
    let output = Command::new("git")
        .current_dir(repo_dir)
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("failed to execute git {}: {}", args.join(" "), e));

    if !output.status.success() {
        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!(
            "git {} failed (exit code {:?})\nstdout:\n{}\nstderr:\n{}",
            args.join(" "),
            output.status.code(),
            stdout,
            stderr
        );
    }
}

/// In-memory backend for exercising the measurement code without git.
///
/// Paths registered as unreadable are listed but fail on `read_file`.
#[derive(Debug, Default)]
pub(crate) struct MemoryBackend {
    snapshots: HashMap<String, BTreeMap<PathBuf, Vec<u8>>>,
    worktree: BTreeMap<PathBuf, Vec<u8>>,
    unreadable: Vec<PathBuf>,
    summaries: HashMap<(String, String), Vec<u8>>,
}

impl MemoryBackend {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_file(mut self, rev: &str, path: &str, contents: &[u8]) -> Self {
        self.snapshots
            .entry(rev.to_string())
            .or_default()
            .insert(PathBuf::from(path), contents.to_vec());
        self
    }

    pub(crate) fn with_worktree_file(mut self, path: &str, contents: &[u8]) -> Self {
        self.worktree.insert(PathBuf::from(path), contents.to_vec());
        self
    }

    pub(crate) fn with_unreadable(mut self, rev: &str, path: &str) -> Self {
        self.snapshots
            .entry(rev.to_string())
            .or_default()
            .insert(PathBuf::from(path), Vec::new());
        self.unreadable.push(PathBuf::from(path));
        self
    }

    pub(crate) fn with_summary(mut self, from: &str, to: &str, numstat: impl AsRef<[u8]>) -> Self {
        self.summaries.insert(
            (from.to_string(), to.to_string()),
            numstat.as_ref().to_vec(),
        );
        self
    }

    fn snapshot(&self, rev: &str) -> Result<&BTreeMap<PathBuf, Vec<u8>>> {
        self.snapshots
            .get(rev)
            .ok_or_else(|| DiffstatError::ReferenceError(rev.to_string()))
    }
}

impl Backend for MemoryBackend {
    fn resolve(&self, rev: &Revision) -> Result<()> {
        match rev {
            Revision::WorkingTree => Ok(()),
            Revision::Named(name) => self.snapshot(name).map(|_| ()),
        }
    }

    fn list_files(&self, rev: &Revision) -> Result<Vec<PathBuf>> {
        match rev {
            Revision::WorkingTree => Ok(self.worktree.keys().cloned().collect()),
            Revision::Named(name) => self
                .snapshot(name)
                .map(|files| files.keys().cloned().collect())
                .map_err(|e| DiffstatError::EnumerationError(e.to_string())),
        }
    }

    fn read_file(&self, rev: &Revision, path: &Path) -> Result<Vec<u8>> {
        if self.unreadable.iter().any(|p| p == path) {
            return Err(DiffstatError::ReadError(path.display().to_string()));
        }
        let files = match rev {
            Revision::WorkingTree => &self.worktree,
            Revision::Named(name) => self.snapshot(name)?,
        };
        files
            .get(path)
            .cloned()
            .ok_or_else(|| DiffstatError::ReadError(path.display().to_string()))
    }

    fn diff_summary(&self, from: &str, to: &str) -> Result<Vec<u8>> {
        self.snapshot(from)?;
        self.snapshot(to)?;
        if from == to {
            return Ok(Vec::new());
        }
        Ok(self
            .summaries
            .get(&(from.to_string(), to.to_string()))
            .cloned()
            .unwrap_or_default())
    }

    fn file_size(&self, rev: &str, path: &Path) -> Result<u64> {
        self.snapshot(rev)?
            .get(path)
            .map(|c| c.len() as u64)
            .ok_or_else(|| DiffstatError::ReadError(format!("{}:{}", rev, path.display())))
    }
}

/// Settings for `branch1..branch2` with defaults, plain text, and no color.
pub(crate) fn test_settings(repo_root: &Path, branch1: &str, branch2: &str) -> Settings {
    Settings {
        repo_root: repo_root.to_path_buf(),
        branch1: branch1.to_string(),
        branch2: branch2.to_string(),
        count_worktree: false,
        format: OutputFormat::Text,
        separator: "\n".to_string(),
        color: false,
        bytes_per_line: DEFAULT_BYTES_PER_LINE,
        line_convention: LineConvention::Lines,
        filter: PathFilter::none(),
    }
}
