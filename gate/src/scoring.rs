//! Aggregator and scorer.
//!
//! Score and verdict are derived independently from the same issue list.
//! The verdict looks only at which severities are present; the score is
//! additive and says nothing about the verdict.

use crate::report::{Category, Issue, SeverityCounts, Verdict};

/// Score every run starts from.
pub const BASE_SCORE: u32 = 100;

/// Concatenate per-analyzer outputs in fixed category order.
///
/// Outputs may arrive in completion order; each analyzer's internal order is
/// preserved and ties within a category keep their input order.
pub fn aggregate(mut outputs: Vec<(Category, Vec<Issue>)>) -> Vec<Issue> {
    outputs.sort_by_key(|(category, _)| *category);
    outputs.into_iter().flat_map(|(_, issues)| issues).collect()
}

/// `max(0, 100 - 20*errors - 5*warnings - 1*infos)`
pub fn score(issues: &[Issue]) -> u32 {
    let penalty: u32 = issues.iter().map(|i| i.severity.penalty()).sum();
    BASE_SCORE.saturating_sub(penalty)
}

/// FAIL on any error, else WARN on any warning, else PASS.
pub fn verdict(issues: &[Issue]) -> Verdict {
    let counts = SeverityCounts::from_issues(issues);
    if counts.errors > 0 {
        Verdict::Fail
    } else if counts.warnings > 0 {
        Verdict::Warn
    } else {
        Verdict::Pass
    }
}
