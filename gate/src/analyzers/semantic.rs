//! Semantic analyzer: forbidden constructs, nesting depth, suspicious imports.
//!
//! All three checks are line-based heuristics. The nesting counter is a cheap
//! proxy for cyclomatic complexity on brace-delimited code and says nothing
//! useful about malformed or indentation-based input.

use super::{read_or_skip, Analyzer};
use crate::config::SemanticConfig;
use crate::error::TriageError;
use crate::patterns::{
    BLOCK_CLOSE, BLOCK_OPEN, CAPITALIZED_SEGMENT, IMPORT_TARGET, RELATIVE_IMPORT_PREFIX,
};
use crate::report::{Category, Issue, Severity};
use crate::source::SourceReader;
use regex::{Regex, RegexBuilder};

/// Detects code smells in every readable file.
pub struct SemanticAnalyzer {
    max_complexity: u32,
    /// Compiled forbidden patterns paired with their source text
    forbidden: Vec<(String, Regex)>,
}

impl SemanticAnalyzer {
    pub fn new(config: &SemanticConfig) -> Result<Self, TriageError> {
        let forbidden = config
            .forbidden_patterns
            .iter()
            .map(|p| {
                RegexBuilder::new(p)
                    .case_insensitive(true)
                    .build()
                    .map(|re| (p.clone(), re))
                    .map_err(|e| TriageError::invalid_pattern(p, e.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            max_complexity: config.max_complexity,
            forbidden,
        })
    }

    /// Depth above which a line is flagged
    fn depth_threshold(&self) -> f64 {
        f64::from(self.max_complexity) / 4.0
    }

    fn scan_forbidden(&self, file: &str, lines: &[&str], issues: &mut Vec<Issue>) {
        for (source, re) in &self.forbidden {
            for (idx, line) in lines.iter().enumerate() {
                if re.is_match(line) {
                    issues.push(
                        Issue::at_line(
                            Category::Semantic,
                            Severity::Warning,
                            file,
                            idx + 1,
                            format!("Forbidden pattern '{}' found", source),
                        )
                        .with_fix("Remove the construct or replace it with a typed, reviewed alternative"),
                    );
                }
            }
        }
    }

    fn scan_nesting(&self, file: &str, lines: &[&str], issues: &mut Vec<Issue>) {
        let threshold = self.depth_threshold();
        let mut depth: i64 = 0;
        let mut max_depth: i64 = 0;

        for (idx, line) in lines.iter().enumerate() {
            depth += line.matches(BLOCK_OPEN).count() as i64;
            depth -= line.matches(BLOCK_CLOSE).count() as i64;
            max_depth = max_depth.max(depth);

            if depth as f64 > threshold {
                issues.push(
                    Issue::at_line(
                        Category::Semantic,
                        Severity::Warning,
                        file,
                        idx + 1,
                        format!(
                            "Nesting depth {} exceeds budget {} (maxComplexity {} / 4)",
                            depth, threshold, self.max_complexity
                        ),
                    )
                    .with_fix("Extract nested blocks into functions or use early returns"),
                );
            }
        }

        if max_depth as f64 > threshold {
            tracing::trace!(file = %file, max_depth, "Deep nesting detected");
        }
    }

    fn scan_imports(&self, file: &str, lines: &[&str], issues: &mut Vec<Issue>) {
        for (idx, line) in lines.iter().enumerate() {
            for caps in IMPORT_TARGET.captures_iter(line) {
                let target = &caps[1];
                if target.starts_with(RELATIVE_IMPORT_PREFIX) {
                    continue;
                }
                if looks_hallucinated(target) {
                    issues.push(
                        Issue::at_line(
                            Category::Semantic,
                            Severity::Warning,
                            file,
                            idx + 1,
                            format!("Possibly hallucinated dependency '{}'", target),
                        )
                        .with_fix("Verify the package exists in the registry and in the manifest"),
                    );
                }
            }
        }
    }
}

/// Package-like identifier with two or more capitalized segments and no path
/// separator, e.g. `ReactHelperUtils`. Registry names are rarely camel-cased.
fn looks_hallucinated(target: &str) -> bool {
    !target.contains('/') && CAPITALIZED_SEGMENT.find_iter(target).count() >= 2
}

impl Analyzer for SemanticAnalyzer {
    fn category(&self) -> Category {
        Category::Semantic
    }

    fn analyze(&self, files: &[String], source: &dyn SourceReader) -> Vec<Issue> {
        let mut issues = Vec::new();
        for file in files {
            let Some(content) = read_or_skip(source, file, Category::Semantic) else {
                continue;
            };
            let lines: Vec<&str> = content.lines().collect();
            self.scan_forbidden(file, &lines, &mut issues);
            self.scan_nesting(file, &lines, &mut issues);
            self.scan_imports(file, &lines, &mut issues);
        }
        issues
    }
}
