//! Triage Gate Library
//!
//! A deterministic, multi-analyzer quality gate for changed files:
//! - Semantic analysis: forbidden constructs, nesting depth, suspicious imports
//! - Security scanning: hard-coded secrets, forbidden dependencies
//! - Style checks: line length, console output, legacy declarations
//!
//! Findings are folded into a scored [`TriageResult`] with a PASS/WARN/FAIL
//! [`Verdict`]. A FAIL is a normal outcome; only configuration problems are
//! errors.
//!
//! # Usage
//!
//! ```rust,ignore
//! use triage_gate::{Triage, TriageRequest};
//!
//! let gate = Triage::for_repo(".");
//! let result = gate.run(TriageRequest::for_files(["src/app.ts"])).await?;
//! println!("{}", result.summary());
//! ```

pub mod analyzers;
pub mod config;
pub mod diff;
pub mod error;
pub mod patterns;
pub mod recommend;
pub mod report;
pub mod scoring;
pub mod source;
pub mod triage;

pub use analyzers::{Analyzer, SecurityScanner, SemanticAnalyzer, StyleChecker};
pub use config::{
    LintRules, SecurityConfig, SecurityOverrides, SemanticConfig, SemanticOverrides, StyleConfig,
    StyleOverrides, TriageConfig, TriageConfigOverrides,
};
pub use diff::{ChangedFiles, DiffBase, GitDiff, StaticDiff};
pub use error::{SourceError, TriageError};
pub use report::{Category, Issue, Severity, SeverityCounts, TriageResult, Verdict};
pub use source::{FsSource, MemorySource, SourceReader};
pub use triage::{Triage, TriageRequest};
