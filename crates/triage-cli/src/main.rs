//! Triage gate CLI
//!
//! Runs the semantic, security and style analyzers over the files changed in
//! a pull request or since a diff base, prints the verdict, and exits
//! non-zero on FAIL unless `--shadow` is set.
//!
//! # Usage
//!
//! ```bash
//! # Files changed since the previous commit
//! triage
//!
//! # Files changed in a pull request (requires the gh CLI)
//! triage --pr 123
//!
//! # Observe without blocking the pipeline
//! triage --base origin/main --shadow --output triage-result.json
//! ```

mod render;

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::{error, info, warn};
use triage_gate::{
    DiffBase, Triage, TriageConfigOverrides, TriageError, TriageRequest, TriageResult,
};

/// Command-line arguments
#[derive(Parser, Debug)]
#[command(author, version, about = "Multi-analyzer code-quality gate", long_about = None)]
struct Args {
    /// Pull request to triage (number or URL, resolved with `gh pr diff`)
    #[arg(long, conflicts_with_all = ["base", "files"])]
    pr: Option<String>,

    /// Diff base for changed files (default: HEAD~1)
    #[arg(long, conflicts_with = "files")]
    base: Option<String>,

    /// Explicit files to triage instead of a diff
    #[arg(long, num_args = 1..)]
    files: Option<Vec<String>>,

    /// Repository root
    #[arg(long, default_value = ".")]
    repo_root: PathBuf,

    /// Config document (TOML or JSON); defaults to .triage.toml in the repo root
    #[arg(long)]
    config: Option<PathBuf>,

    /// Report the verdict but never fail the process on FAIL
    #[arg(long, default_value_t = false)]
    shadow: bool,

    /// Exit 1 when the changed-file list could not be retrieved
    #[arg(long, default_value_t = false)]
    strict_diff: bool,

    /// Print the JSON result to stdout instead of the console report
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Also write the JSON result to this path
    #[arg(long)]
    output: Option<PathBuf>,
}

impl Args {
    fn diff_base(&self) -> Option<DiffBase> {
        if let Some(pr) = &self.pr {
            Some(DiffBase::PullRequest(pr.clone()))
        } else {
            self.base.clone().map(DiffBase::Revision)
        }
    }

    fn load_config(&self) -> Result<TriageConfigOverrides> {
        let overrides = match &self.config {
            Some(path) => Some(
                TriageConfigOverrides::load(path)
                    .with_context(|| format!("Failed to load config {}", path.display()))?,
            ),
            None => TriageConfigOverrides::discover(&self.repo_root)
                .context("Failed to load repository config")?,
        };
        Ok(overrides.unwrap_or_default())
    }
}

/// Map a finished run to the process exit code.
fn exit_code(result: &TriageResult, shadow: bool, strict_diff: bool) -> i32 {
    if strict_diff && result.diff_error.is_some() {
        return 1;
    }
    result.exit_code(shadow)
}

/// One-line error report; gate errors carry their machine-readable code.
fn describe_error(e: &anyhow::Error) -> String {
    match e.downcast_ref::<TriageError>() {
        Some(gate_err) => format!("error[{}]: {:#}", gate_err.code(), e),
        None => format!("error: {:#}", e),
    }
}

async fn run(args: Args) -> Result<i32> {
    let config = args.load_config()?;

    let request = TriageRequest {
        files: args.files.clone(),
        base: args.diff_base(),
        config,
        shadow: args.shadow,
    };

    let gate = Triage::for_repo(&args.repo_root);
    let result = gate.run(request).await.context("Triage failed")?;

    let json = serde_json::to_string_pretty(&result).context("Failed to serialize result")?;
    if let Some(path) = &args.output {
        std::fs::write(path, &json)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        info!(path = %path.display(), "Wrote triage result");
    }

    if args.json {
        println!("{}", json);
    } else {
        print!("{}", render::render_console(&result, args.shadow));
    }

    if let Some(err) = &result.diff_error {
        warn!(error = %err, strict = args.strict_diff, "Triage ran without a changed-file list");
    }

    Ok(exit_code(&result, args.shadow, args.strict_diff))
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "triage_gate=info,triage=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let code = match run(args).await {
        Ok(code) => code,
        Err(e) => {
            if let Some(gate_err) = e.downcast_ref::<TriageError>() {
                error!(
                    code = gate_err.code(),
                    config = gate_err.is_config_error(),
                    "Triage aborted"
                );
            }
            eprintln!("{}", describe_error(&e));
            1
        }
    };
    std::process::exit(code);
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use triage_gate::Verdict;

    fn result(verdict: Verdict, diff_error: Option<&str>) -> TriageResult {
        TriageResult {
            verdict,
            score: 100,
            issues: vec![],
            recommendations: vec![],
            analyzed_files: 0,
            timestamp: Utc::now(),
            diff_error: diff_error.map(str::to_string),
        }
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(exit_code(&result(Verdict::Pass, None), false, false), 0);
        assert_eq!(exit_code(&result(Verdict::Warn, None), false, false), 0);
        assert_eq!(exit_code(&result(Verdict::Fail, None), false, false), 1);
        assert_eq!(exit_code(&result(Verdict::Fail, None), true, false), 0);
    }

    #[test]
    fn test_strict_diff_overrides_shadow() {
        let r = result(Verdict::Pass, Some("fatal: bad revision"));
        assert_eq!(exit_code(&r, false, false), 0);
        assert_eq!(exit_code(&r, true, true), 1);
    }

    #[test]
    fn test_args_parse_pr_and_base() {
        let args = Args::try_parse_from(["triage", "--pr", "42", "--shadow"]).unwrap();
        assert_eq!(args.diff_base(), Some(DiffBase::PullRequest("42".into())));
        assert!(args.shadow);

        let args = Args::try_parse_from(["triage", "--base", "origin/main"]).unwrap();
        assert_eq!(
            args.diff_base(),
            Some(DiffBase::Revision("origin/main".into()))
        );

        let args = Args::try_parse_from(["triage"]).unwrap();
        assert_eq!(args.diff_base(), None);
        assert_eq!(args.repo_root, PathBuf::from("."));
    }

    #[test]
    fn test_args_conflicts() {
        assert!(Args::try_parse_from(["triage", "--pr", "1", "--base", "main"]).is_err());
        assert!(Args::try_parse_from(["triage", "--base", "main", "--files", "a.ts"]).is_err());
    }

    #[test]
    fn test_args_explicit_files() {
        let args = Args::try_parse_from(["triage", "--files", "a.ts", "b.ts", "--json"]).unwrap();
        assert_eq!(args.files, Some(vec!["a.ts".to_string(), "b.ts".to_string()]));
        assert!(args.json);
    }

    #[test]
    fn test_missing_config_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let args = Args::try_parse_from([
            "triage".to_string(),
            "--config".to_string(),
            dir.path().join("absent.toml").display().to_string(),
        ])
        .unwrap();
        assert!(args.load_config().is_err());
    }

    #[test]
    fn test_gate_errors_report_their_code() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "[semantic\nmaxComplexity = 1").unwrap();
        let args = Args::try_parse_from([
            "triage".to_string(),
            "--config".to_string(),
            path.display().to_string(),
        ])
        .unwrap();
        let err = args.load_config().unwrap_err();
        let line = describe_error(&err);
        assert!(line.starts_with("error[CONFIG_MALFORMED]: Failed to load config"), "{line}");

        let plain = anyhow::anyhow!("disk full");
        assert_eq!(describe_error(&plain), "error: disk full");
    }

    #[test]
    fn test_config_discovered_in_repo_root() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(".triage.toml"), "[style]\nlintRules = \"strict\"\n")
            .unwrap();
        let args = Args::try_parse_from([
            "triage".to_string(),
            "--repo-root".to_string(),
            dir.path().display().to_string(),
        ])
        .unwrap();
        let config = args.load_config().unwrap();
        assert_eq!(
            config.style.unwrap().lint_rules,
            Some(triage_gate::LintRules::Strict)
        );
    }
}
