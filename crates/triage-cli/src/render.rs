//! Console rendering of a triage result.

use std::fmt::Write;
use triage_gate::{Severity, TriageResult, Verdict};

fn verdict_marker(verdict: Verdict) -> &'static str {
    match verdict {
        Verdict::Pass => "✅",
        Verdict::Warn => "⚠️",
        Verdict::Fail => "❌",
    }
}

fn severity_tag(severity: Severity) -> &'static str {
    match severity {
        Severity::Error => "ERROR",
        Severity::Warning => "WARN ",
        Severity::Info => "INFO ",
    }
}

/// Human-readable report: header, issues, recommendations.
pub fn render_console(result: &TriageResult, shadow: bool) -> String {
    let mut out = String::new();
    let counts = result.counts();

    let _ = writeln!(
        out,
        "{} Triage verdict: {}{}",
        verdict_marker(result.verdict),
        result.verdict,
        if shadow { " (shadow mode)" } else { "" }
    );
    let _ = writeln!(out, "   Score: {}/100", result.score);
    let _ = writeln!(out, "   Files analyzed: {}", result.analyzed_files);
    let _ = writeln!(
        out,
        "   Issues: {} ({} errors, {} warnings, {} info)",
        counts.total(),
        counts.errors,
        counts.warnings,
        counts.infos
    );

    if let Some(err) = &result.diff_error {
        let _ = writeln!(out, "\n   Changed files unavailable: {}", err);
    }

    if !result.issues.is_empty() {
        let _ = writeln!(out, "\nIssues:");
        for issue in &result.issues {
            let _ = writeln!(
                out,
                "  [{}] {:<8} {}  {}",
                severity_tag(issue.severity),
                issue.category.to_string(),
                issue.location(),
                issue.message
            );
            if let Some(fix) = &issue.fix {
                let _ = writeln!(out, "          fix: {}", fix);
            }
        }
    }

    if !result.recommendations.is_empty() {
        let _ = writeln!(out, "\nRecommendations:");
        for rec in &result.recommendations {
            let _ = writeln!(out, "  - {}", rec);
        }
    }

    out
}
