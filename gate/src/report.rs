//! Triage Report — issues, verdict, and the final result record
//!
//! Every analyzer emits [`Issue`]s. The orchestrator folds them into a single
//! [`TriageResult`] with a score and a [`Verdict`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Which analyzer produced an issue.
///
/// Declaration order is the aggregation order of the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Code smells, nesting depth, suspicious imports
    Semantic,
    /// Leaked secrets and forbidden dependencies
    Security,
    /// Formatting and idiom rules
    Style,
}

impl Category {
    pub const ALL: [Category; 3] = [Self::Semantic, Self::Security, Self::Style];
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Semantic => write!(f, "semantic"),
            Self::Security => write!(f, "security"),
            Self::Style => write!(f, "style"),
        }
    }
}

/// Issue severity, ordered `Error > Warning > Info`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl Severity {
    /// Points subtracted from the score for one issue of this severity
    pub fn penalty(&self) -> u32 {
        match self {
            Self::Error => 20,
            Self::Warning => 5,
            Self::Info => 1,
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warning => write!(f, "warning"),
            Self::Info => write!(f, "info"),
        }
    }
}

/// A single finding
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub category: Category,
    pub severity: Severity,
    /// Path relative to the repository root
    pub file: String,
    /// 1-based line; `None` for file-scoped findings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
    pub message: String,
    /// Suggested remediation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fix: Option<String>,
}

impl Issue {
    /// Line-scoped finding
    pub fn at_line(
        category: Category,
        severity: Severity,
        file: impl Into<String>,
        line: usize,
        message: impl Into<String>,
    ) -> Self {
        Self {
            category,
            severity,
            file: file.into(),
            line: Some(line),
            message: message.into(),
            fix: None,
        }
    }

    /// File-scoped finding (no line number)
    pub fn in_file(
        category: Category,
        severity: Severity,
        file: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            category,
            severity,
            file: file.into(),
            line: None,
            message: message.into(),
            fix: None,
        }
    }

    pub fn with_fix(mut self, fix: impl Into<String>) -> Self {
        self.fix = Some(fix.into());
        self
    }

    /// `file:line`, or just `file` for file-scoped issues
    pub fn location(&self) -> String {
        match self.line {
            Some(line) => format!("{}:{}", self.file, line),
            None => self.file.clone(),
        }
    }
}

/// Overall gate decision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Verdict {
    Pass,
    Warn,
    Fail,
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pass => write!(f, "PASS"),
            Self::Warn => write!(f, "WARN"),
            Self::Fail => write!(f, "FAIL"),
        }
    }
}

/// Issue totals by severity
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeverityCounts {
    pub errors: usize,
    pub warnings: usize,
    pub infos: usize,
}

impl SeverityCounts {
    pub fn from_issues(issues: &[Issue]) -> Self {
        let mut counts = Self::default();
        for issue in issues {
            match issue.severity {
                Severity::Error => counts.errors += 1,
                Severity::Warning => counts.warnings += 1,
                Severity::Info => counts.infos += 1,
            }
        }
        counts
    }

    pub fn total(&self) -> usize {
        self.errors + self.warnings + self.infos
    }
}

/// Output of one triage invocation. Built once, never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TriageResult {
    pub verdict: Verdict,
    /// Quality score in `[0, 100]`
    pub score: u32,
    /// Semantic, then security, then style findings
    pub issues: Vec<Issue>,
    pub recommendations: Vec<String>,
    /// Number of files handed to the analyzers
    pub analyzed_files: usize,
    pub timestamp: DateTime<Utc>,
    /// Set when the changed-file list could not be retrieved and the run
    /// fell back to an empty file set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diff_error: Option<String>,
}

impl TriageResult {
    pub fn counts(&self) -> SeverityCounts {
        SeverityCounts::from_issues(&self.issues)
    }

    /// Issues produced by one analyzer, in report order
    pub fn issues_in(&self, category: Category) -> impl Iterator<Item = &Issue> {
        self.issues.iter().filter(move |i| i.category == category)
    }

    /// Process exit code for this result.
    ///
    /// Shadow mode only changes how a FAIL is translated; verdict and score
    /// are untouched.
    pub fn exit_code(&self, shadow: bool) -> i32 {
        match self.verdict {
            Verdict::Fail if !shadow => 1,
            _ => 0,
        }
    }

    /// Compact one-line summary for logging
    pub fn summary(&self) -> String {
        let counts = self.counts();
        format!(
            "[{}] score {}/100, {} file(s), {} issue(s) ({} error, {} warning, {} info)",
            self.verdict,
            self.score,
            self.analyzed_files,
            counts.total(),
            counts.errors,
            counts.warnings,
            counts.infos,
        )
    }
}
