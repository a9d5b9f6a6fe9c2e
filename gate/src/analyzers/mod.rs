//! Analyzers — independent scanners over the changed-file set
//!
//! Each analyzer owns its slice of the configuration and is a pure function
//! of `(files, source)`. They share no mutable state, so the orchestrator runs
//! them concurrently and reassembles their output in [`Category`] order.
//!
//! ```text
//! files ─┬─> SemanticAnalyzer ─┐
//!        ├─> SecurityScanner  ─┼─> issues (semantic → security → style)
//!        └─> StyleChecker     ─┘
//! ```

pub mod security;
pub mod semantic;
pub mod style;

pub use security::SecurityScanner;
pub use semantic::SemanticAnalyzer;
pub use style::StyleChecker;

use crate::config::TriageConfig;
use crate::error::TriageError;
use crate::report::{Category, Issue};
use crate::source::SourceReader;
use std::sync::Arc;

/// A scanner producing issues for one [`Category`].
pub trait Analyzer: Send + Sync {
    /// Category stamped on every issue this analyzer emits
    fn category(&self) -> Category;

    /// Scan `files` (repository-relative paths) read through `source`.
    ///
    /// Files that cannot be read are skipped; they never abort the scan.
    fn analyze(&self, files: &[String], source: &dyn SourceReader) -> Vec<Issue>;
}

/// Build the standard analyzer set for a resolved configuration.
///
/// Fails before any analysis if the semantic patterns do not compile.
pub fn default_analyzers(config: &TriageConfig) -> Result<Vec<Arc<dyn Analyzer>>, TriageError> {
    Ok(vec![
        Arc::new(SemanticAnalyzer::new(&config.semantic)?),
        Arc::new(SecurityScanner::new(&config.security)),
        Arc::new(StyleChecker::new(&config.style)),
    ])
}

/// Read a file through `source`, logging and swallowing failures.
pub(crate) fn read_or_skip(
    source: &dyn SourceReader,
    path: &str,
    analyzer: Category,
) -> Option<String> {
    match source.read_text(path) {
        Ok(content) => Some(content),
        Err(e) => {
            tracing::debug!(
                analyzer = %analyzer,
                file = %path,
                reason = %e,
                "Skipping unreadable file"
            );
            None
        }
    }
}
