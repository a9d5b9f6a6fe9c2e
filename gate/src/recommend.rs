//! Recommendation generator: human-facing guidance from issue statistics.

use crate::report::{Category, Issue, Severity};

/// Semantic issue count above which a refactor is suggested
pub const REFACTOR_THRESHOLD: usize = 3;

/// Style issue count above which running the formatter is suggested
pub const FORMATTER_THRESHOLD: usize = 5;

pub const CRITICAL_SECURITY: &str =
    "Critical security issues found: remove exposed secrets and forbidden packages before merging";

pub const READY_FOR_REVIEW: &str = "No issues found: changes are ready for review";

/// Guidance strings, in fixed trigger order: security, refactor, formatter,
/// then the all-clear message when there are no issues at all.
pub fn recommendations(issues: &[Issue]) -> Vec<String> {
    let mut out = Vec::new();

    let critical_security = issues
        .iter()
        .any(|i| i.category == Category::Security && i.severity == Severity::Error);
    if critical_security {
        out.push(CRITICAL_SECURITY.to_string());
    }

    let semantic = count(issues, Category::Semantic);
    if semantic > REFACTOR_THRESHOLD {
        out.push(format!(
            "Consider refactoring: {} semantic issues point to complex or risky code",
            semantic
        ));
    }

    let style = count(issues, Category::Style);
    if style > FORMATTER_THRESHOLD {
        out.push(format!(
            "Run the formatter and linter: {} style issues found",
            style
        ));
    }

    if issues.is_empty() {
        out.push(READY_FOR_REVIEW.to_string());
    }

    out
}

fn count(issues: &[Issue], category: Category) -> usize {
    issues.iter().filter(|i| i.category == category).count()
}
