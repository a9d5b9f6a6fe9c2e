//! Gate error types
//!
//! Only configuration problems and orchestration faults are errors. Findings
//! in the analyzed code are reported as [`Issue`](crate::report::Issue)s, and
//! a FAIL verdict is a successful run of the gate.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a triage run
#[derive(Error, Debug)]
pub enum TriageError {
    /// A forbidden pattern does not compile as a regex
    #[error("Invalid forbidden pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    /// Configuration document could not be read
    #[error("Failed to read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration document is malformed
    #[error("Failed to parse config {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    /// Changed-file retrieval failed
    #[error("Diff retrieval failed: {operation} - {message}")]
    Diff { operation: String, message: String },

    /// An analyzer task panicked or was cancelled
    #[error("Analyzer '{analyzer}' did not complete: {message}")]
    AnalyzerPanicked { analyzer: String, message: String },
}

impl TriageError {
    /// Create an invalid pattern error
    pub fn invalid_pattern(pattern: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidPattern {
            pattern: pattern.into(),
            message: message.into(),
        }
    }

    /// Create a config parse error
    pub fn config_parse(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::ConfigParse {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a diff retrieval error
    pub fn diff(operation: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Diff {
            operation: operation.into(),
            message: message.into(),
        }
    }

    /// Create an analyzer failure error
    pub fn analyzer_panicked(analyzer: impl Into<String>, message: impl Into<String>) -> Self {
        Self::AnalyzerPanicked {
            analyzer: analyzer.into(),
            message: message.into(),
        }
    }

    /// Whether the error comes from configuration (fatal before analysis)
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidPattern { .. }
                | Self::ConfigRead { .. }
                | Self::ConfigParse { .. }
        )
    }

    /// Machine-readable error code for logs and JSON error output
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidPattern { .. } => "PATTERN_INVALID",
            Self::ConfigRead { .. } => "CONFIG_UNREADABLE",
            Self::ConfigParse { .. } => "CONFIG_MALFORMED",
            Self::Diff { .. } => "DIFF_FAILED",
            Self::AnalyzerPanicked { .. } => "ANALYZER_FAILED",
        }
    }
}

/// Failure reading one input file through a [`SourceReader`](crate::source::SourceReader)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SourceError {
    /// File does not exist
    #[error("File not found: {path}")]
    NotFound { path: String },

    /// File exists but cannot be read or is not valid UTF-8 text
    #[error("File not readable: {path} ({message})")]
    NotReadable { path: String, message: String },
}

impl SourceError {
    pub fn not_found(path: impl Into<String>) -> Self {
        Self::NotFound { path: path.into() }
    }

    pub fn not_readable(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::NotReadable {
            path: path.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_errors_are_flagged() {
        assert!(TriageError::invalid_pattern("(", "unclosed group").is_config_error());
        assert!(TriageError::config_parse("triage.toml", "expected '='").is_config_error());
        assert!(!TriageError::diff("git diff", "not a repository").is_config_error());
        assert!(!TriageError::analyzer_panicked("style", "boom").is_config_error());
    }

    #[test]
    fn test_error_display() {
        let err = TriageError::invalid_pattern("(", "unclosed group");
        assert_eq!(
            err.to_string(),
            "Invalid forbidden pattern '(': unclosed group"
        );
        let err = TriageError::diff("git diff --name-only HEAD~1", "fatal: bad revision");
        assert!(err.to_string().contains("fatal: bad revision"));
        assert_eq!(err.code(), "DIFF_FAILED");
    }

    #[test]
    fn test_source_error_display() {
        assert_eq!(
            SourceError::not_found("src/a.ts").to_string(),
            "File not found: src/a.ts"
        );
        let err = SourceError::not_readable("bin/blob", "invalid UTF-8");
        assert!(err.to_string().contains("bin/blob"));
        assert!(err.to_string().contains("invalid UTF-8"));
    }
}
