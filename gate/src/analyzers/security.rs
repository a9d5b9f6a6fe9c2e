//! Security scanner: hard-coded secrets and forbidden dependencies.
//!
//! Secret matching is stateless per line: every signature is tested against
//! every line on its own, and each matching signature yields one error.
//! The dependency check reads the root manifest once per run.

use super::{read_or_skip, Analyzer};
use crate::config::SecurityConfig;
use crate::error::SourceError;
use crate::patterns::{MANIFEST_DEPENDENCY_SECTIONS, MANIFEST_FILE, SECRET_REGEXES};
use crate::report::{Category, Issue, Severity};
use crate::source::SourceReader;
use std::collections::BTreeSet;

/// Outcome of reading the dependency manifest
#[derive(Debug, Clone, PartialEq, Eq)]
enum ManifestDeps {
    /// Declared runtime and development dependency names
    Declared(BTreeSet<String>),
    /// No manifest in the repository root
    Missing,
    /// Manifest exists but could not be read or parsed
    Unusable(String),
}

/// Scans for leaked credentials and forbidden packages.
pub struct SecurityScanner {
    config: SecurityConfig,
}

impl SecurityScanner {
    pub fn new(config: &SecurityConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    fn scan_secrets(&self, file: &str, content: &str, issues: &mut Vec<Issue>) {
        for (idx, line) in content.lines().enumerate() {
            for (sig, re) in SECRET_REGEXES.iter() {
                if re.is_match(line) {
                    issues.push(
                        Issue::at_line(
                            Category::Security,
                            Severity::Error,
                            file,
                            idx + 1,
                            format!("Potential secret ({}): {}", sig.name, sig.description),
                        )
                        .with_fix(
                            "Remove the credential, rotate it, and load it from the environment or a secret store",
                        ),
                    );
                }
            }
        }
    }

    fn check_dependencies(&self, source: &dyn SourceReader, issues: &mut Vec<Issue>) {
        match read_manifest(source) {
            ManifestDeps::Declared(declared) => {
                for package in &self.config.forbidden_packages {
                    if declared.contains(package) {
                        issues.push(
                            Issue::in_file(
                                Category::Security,
                                Severity::Error,
                                MANIFEST_FILE,
                                format!("Forbidden package '{}' declared as a dependency", package),
                            )
                            .with_fix(format!("Remove '{}' or replace it with a vetted alternative", package)),
                        );
                    }
                }
            }
            ManifestDeps::Missing => {
                tracing::debug!(manifest = MANIFEST_FILE, "No manifest; dependency check has nothing to inspect");
            }
            ManifestDeps::Unusable(reason) => {
                tracing::warn!(manifest = MANIFEST_FILE, reason = %reason, "Dependency check skipped");
                issues.push(
                    Issue::in_file(
                        Category::Security,
                        Severity::Info,
                        MANIFEST_FILE,
                        format!("Dependency check skipped: {}", reason),
                    )
                    .with_fix("Fix the manifest so forbidden packages can be checked"),
                );
            }
        }
    }
}

fn read_manifest(source: &dyn SourceReader) -> ManifestDeps {
    let content = match source.read_text(MANIFEST_FILE) {
        Ok(content) => content,
        Err(SourceError::NotFound { .. }) => return ManifestDeps::Missing,
        Err(e) => return ManifestDeps::Unusable(e.to_string()),
    };
    match parse_manifest(&content) {
        Ok(declared) => ManifestDeps::Declared(declared),
        Err(e) => ManifestDeps::Unusable(format!("{} is not valid JSON ({})", MANIFEST_FILE, e)),
    }
}

/// Union of dependency names across the manifest's dependency sections.
fn parse_manifest(content: &str) -> Result<BTreeSet<String>, serde_json::Error> {
    let doc: serde_json::Value = serde_json::from_str(content)?;
    let mut names = BTreeSet::new();
    for section in MANIFEST_DEPENDENCY_SECTIONS {
        if let Some(deps) = doc.get(*section).and_then(|v| v.as_object()) {
            names.extend(deps.keys().cloned());
        }
    }
    Ok(names)
}

impl Analyzer for SecurityScanner {
    fn category(&self) -> Category {
        Category::Security
    }

    fn analyze(&self, files: &[String], source: &dyn SourceReader) -> Vec<Issue> {
        let mut issues = Vec::new();

        if self.config.scan_secrets {
            for file in files {
                if let Some(content) = read_or_skip(source, file, Category::Security) {
                    self.scan_secrets(file, &content, &mut issues);
                }
            }
        }

        if self.config.check_dependencies {
            self.check_dependencies(source, &mut issues);
        }

        issues
    }
}
