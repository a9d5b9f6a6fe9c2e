//! Triage configuration
//!
//! [`TriageConfig`] is the immutable, fully-resolved configuration handed to
//! the analyzers. Callers supply a [`TriageConfigOverrides`] (every field
//! optional), which is merged over the defaults sub-config by sub-config at
//! the orchestrator boundary.
//!
//! Config documents use camelCase keys and may be TOML or JSON:
//!
//! ```toml
//! [semantic]
//! maxComplexity = 12
//!
//! [security]
//! forbiddenPackages = ["left-pad"]
//!
//! [style]
//! lintRules = "strict"
//! ```

use crate::error::TriageError;
use crate::patterns::{DEFAULT_FORBIDDEN_PACKAGES, DEFAULT_FORBIDDEN_PATTERNS};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::Path;

/// Default nesting-depth budget
pub const DEFAULT_MAX_COMPLEXITY: u32 = 10;

/// Config file looked up in the repository root when none is given
pub const DEFAULT_CONFIG_FILE: &str = ".triage.toml";

/// Semantic analyzer settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SemanticConfig {
    /// Nesting-depth budget; lines deeper than `max_complexity / 4` are flagged
    pub max_complexity: u32,
    /// Regex sources matched case-insensitively against every line
    pub forbidden_patterns: Vec<String>,
}

impl Default for SemanticConfig {
    fn default() -> Self {
        Self {
            max_complexity: DEFAULT_MAX_COMPLEXITY,
            forbidden_patterns: DEFAULT_FORBIDDEN_PATTERNS
                .iter()
                .map(|p| p.to_string())
                .collect(),
        }
    }
}

/// Security scanner settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecurityConfig {
    pub scan_secrets: bool,
    pub check_dependencies: bool,
    pub forbidden_packages: BTreeSet<String>,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            scan_secrets: true,
            check_dependencies: true,
            forbidden_packages: DEFAULT_FORBIDDEN_PACKAGES
                .iter()
                .map(|p| p.to_string())
                .collect(),
        }
    }
}

/// Lint strictness. Accepted for future rule selection; the current ruleset
/// is identical for every level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LintRules {
    Strict,
    #[default]
    Standard,
    Relaxed,
}

impl std::fmt::Display for LintRules {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Strict => write!(f, "strict"),
            Self::Standard => write!(f, "standard"),
            Self::Relaxed => write!(f, "relaxed"),
        }
    }
}

/// Style checker settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleConfig {
    pub enforce_format: bool,
    pub lint_rules: LintRules,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            enforce_format: true,
            lint_rules: LintRules::Standard,
        }
    }
}

/// Fully resolved configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriageConfig {
    pub semantic: SemanticConfig,
    pub security: SecurityConfig,
    pub style: StyleConfig,
}

impl TriageConfig {
    /// Defaults with `overrides` applied field by field.
    pub fn merged(overrides: &TriageConfigOverrides) -> Self {
        let mut config = Self::default();

        if let Some(o) = &overrides.semantic {
            if let Some(v) = o.max_complexity {
                config.semantic.max_complexity = v;
            }
            if let Some(v) = &o.forbidden_patterns {
                config.semantic.forbidden_patterns = v.clone();
            }
        }

        if let Some(o) = &overrides.security {
            if let Some(v) = o.scan_secrets {
                config.security.scan_secrets = v;
            }
            if let Some(v) = o.check_dependencies {
                config.security.check_dependencies = v;
            }
            if let Some(v) = &o.forbidden_packages {
                config.security.forbidden_packages = v.clone();
            }
        }

        if let Some(o) = &overrides.style {
            if let Some(v) = o.enforce_format {
                config.style.enforce_format = v;
            }
            if let Some(v) = o.lint_rules {
                config.style.lint_rules = v;
            }
        }

        config
    }
}

/// Partial semantic settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SemanticOverrides {
    pub max_complexity: Option<u32>,
    pub forbidden_patterns: Option<Vec<String>>,
}

/// Partial security settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecurityOverrides {
    pub scan_secrets: Option<bool>,
    pub check_dependencies: Option<bool>,
    pub forbidden_packages: Option<BTreeSet<String>>,
}

/// Partial style settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleOverrides {
    pub enforce_format: Option<bool>,
    pub lint_rules: Option<LintRules>,
}

/// Caller-supplied partial configuration. Unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriageConfigOverrides {
    pub semantic: Option<SemanticOverrides>,
    pub security: Option<SecurityOverrides>,
    pub style: Option<StyleOverrides>,
}

impl TriageConfigOverrides {
    /// Load overrides from a TOML or JSON document (chosen by extension).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TriageError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| TriageError::ConfigRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            Self::from_json_str(&content).map_err(|e| TriageError::config_parse(path, e))
        } else {
            Self::from_toml_str(&content).map_err(|e| TriageError::config_parse(path, e))
        }
    }

    /// Load `.triage.toml` from `repo_root` if it exists.
    pub fn discover(repo_root: impl AsRef<Path>) -> Result<Option<Self>, TriageError> {
        let candidate = repo_root.as_ref().join(DEFAULT_CONFIG_FILE);
        if candidate.is_file() {
            Self::load(&candidate).map(Some)
        } else {
            Ok(None)
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    pub fn from_json_str(content: &str) -> Result<Self, String> {
        serde_json::from_str(content).map_err(|e| e.to_string())
    }
}
