//! Changed-file retrieval.
//!
//! The gate only needs a list of repository-relative paths. `GitDiff` shells
//! out to `git` (or `gh` for pull requests); tests use `StaticDiff`.

use crate::error::TriageError;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Diff base used when the caller names none: the previous commit.
pub const DEFAULT_BASE: &str = "HEAD~1";

/// What to diff against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiffBase {
    /// Git revision (`HEAD~1`, `origin/main`, a SHA)
    Revision(String),
    /// Pull request number or URL, resolved through the `gh` CLI
    PullRequest(String),
}

impl Default for DiffBase {
    fn default() -> Self {
        Self::Revision(DEFAULT_BASE.to_string())
    }
}

impl std::fmt::Display for DiffBase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Revision(rev) => write!(f, "{}", rev),
            Self::PullRequest(pr) => write!(f, "PR {}", pr),
        }
    }
}

/// Source of the changed-file list.
pub trait ChangedFiles: Send + Sync {
    fn changed_files(&self, base: &DiffBase) -> Result<Vec<String>, TriageError>;
}

/// Changed files from the local git repository.
#[derive(Debug, Clone)]
pub struct GitDiff {
    working_dir: PathBuf,
}

impl GitDiff {
    pub fn new(working_dir: impl AsRef<Path>) -> Self {
        Self {
            working_dir: working_dir.as_ref().to_path_buf(),
        }
    }

    /// Run a command and return trimmed stdout
    fn run(&self, program: &str, args: &[&str]) -> Result<String, TriageError> {
        let operation = format!("{} {}", program, args.join(" "));
        let output = Command::new(program)
            .args(args)
            .current_dir(&self.working_dir)
            .output()
            .map_err(|e| TriageError::diff(&operation, e.to_string()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(TriageError::diff(operation, stderr.trim().to_string()));
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

impl ChangedFiles for GitDiff {
    fn changed_files(&self, base: &DiffBase) -> Result<Vec<String>, TriageError> {
        let stdout = match base {
            // Deleted files have nothing left to analyze.
            DiffBase::Revision(rev) => self.run(
                "git",
                &["diff", "--name-only", "--diff-filter=ACMR", rev.as_str()],
            )?,
            DiffBase::PullRequest(pr) => {
                self.run("gh", &["pr", "diff", pr.as_str(), "--name-only"])?
            }
        };
        Ok(parse_name_only(&stdout))
    }
}

/// Split `--name-only` output into distinct paths, keeping first-seen order.
pub fn parse_name_only(stdout: &str) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    stdout
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .filter(|l| seen.insert(l.to_string()))
        .map(str::to_string)
        .collect()
}

/// Fixed answer, or a fixed failure.
#[derive(Debug, Clone)]
pub struct StaticDiff {
    result: Result<Vec<String>, String>,
}

impl StaticDiff {
    pub fn files<I, S>(files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            result: Ok(files.into_iter().map(Into::into).collect()),
        }
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            result: Err(message.into()),
        }
    }
}

impl ChangedFiles for StaticDiff {
    fn changed_files(&self, base: &DiffBase) -> Result<Vec<String>, TriageError> {
        self.result
            .clone()
            .map_err(|message| TriageError::diff(format!("diff against {}", base), message))
    }
}
