//! Style checker: line length, stray console output, legacy `var`.
//!
//! Only recognized source files are checked. `enforceFormat` and `lintRules`
//! are carried for rule selection but the ruleset is the same at every level.

use super::{read_or_skip, Analyzer};
use crate::config::{LintRules, StyleConfig};
use crate::patterns::{is_source_file, is_test_file, CONSOLE_CALL, LEGACY_VAR, MAX_LINE_LENGTH};
use crate::report::{Category, Issue, Severity};
use crate::source::SourceReader;

/// Enforces the house style on source files.
pub struct StyleChecker {
    enforce_format: bool,
    lint_rules: LintRules,
}

impl StyleChecker {
    pub fn new(config: &StyleConfig) -> Self {
        Self {
            enforce_format: config.enforce_format,
            lint_rules: config.lint_rules,
        }
    }

    pub fn lint_rules(&self) -> LintRules {
        self.lint_rules
    }

    pub fn enforces_format(&self) -> bool {
        self.enforce_format
    }

    fn check_file(&self, file: &str, content: &str, issues: &mut Vec<Issue>) {
        let test_file = is_test_file(file);

        for (idx, line) in content.lines().enumerate() {
            let line_no = idx + 1;

            let length = line.chars().count();
            if length > MAX_LINE_LENGTH {
                issues.push(
                    Issue::at_line(
                        Category::Style,
                        Severity::Warning,
                        file,
                        line_no,
                        format!("Line is {} characters (max {})", length, MAX_LINE_LENGTH),
                    )
                    .with_fix("Break the line or run the formatter"),
                );
            }

            if !test_file && CONSOLE_CALL.is_match(line) {
                issues.push(
                    Issue::at_line(
                        Category::Style,
                        Severity::Warning,
                        file,
                        line_no,
                        "Console output left in non-test code",
                    )
                    .with_fix("Use the project's logging abstraction instead of console calls"),
                );
            }

            if LEGACY_VAR.is_match(line) {
                issues.push(
                    Issue::at_line(
                        Category::Style,
                        Severity::Warning,
                        file,
                        line_no,
                        "Legacy 'var' declaration",
                    )
                    .with_fix("Use 'const' or 'let' for block-scoped declarations"),
                );
            }
        }
    }
}

impl Analyzer for StyleChecker {
    fn category(&self) -> Category {
        Category::Style
    }

    fn analyze(&self, files: &[String], source: &dyn SourceReader) -> Vec<Issue> {
        let mut issues = Vec::new();
        for file in files.iter().filter(|f| is_source_file(f)) {
            if let Some(content) = read_or_skip(source, file, Category::Style) {
                self.check_file(file, &content, &mut issues);
            }
        }
        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::MemorySource;

    fn check(path: &str, content: &str) -> Vec<Issue> {
        let source = MemorySource::new().with_file(path, content);
        StyleChecker::new(&StyleConfig::default()).analyze(&[path.to_string()], &source)
    }

    #[test]
    fn test_long_line() {
        let long = format!("const s = \"{}\";", "a".repeat(130));
        let issues = check("src/a.ts", &format!("let ok = 1;\n{}\n", long));
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].line, Some(2));
        assert!(issues[0]
            .message
            .contains(&format!("{} characters", long.chars().count())));
    }

    #[test]
    fn test_line_at_limit_is_fine() {
        let exact = "x".repeat(MAX_LINE_LENGTH);
        assert!(check("src/a.ts", &exact).is_empty());
    }

    #[test]
    fn test_line_length_counts_characters_not_bytes() {
        let wide = "é".repeat(100);
        assert!(check("src/a.ts", &wide).is_empty());
    }

    #[test]
    fn test_console_call_outside_tests() {
        let issues = check("src/a.ts", "console.log('debug');\n");
        assert_eq!(issues.len(), 1);
        assert!(issues[0].fix.as_deref().unwrap().contains("logging"));

        assert!(check("src/a.test.ts", "console.log('debug');\n").is_empty());
        assert!(check("src/__tests__/a.ts", "console.log('debug');\n").is_empty());
    }

    #[test]
    fn test_legacy_var() {
        let issues = check("src/a.js", "var count = 0;\nlet ok = 1;\n");
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].line, Some(1));
        assert!(issues[0].message.contains("var"));
    }

    #[test]
    fn test_non_source_files_ignored() {
        let long = "y".repeat(200);
        assert!(check("README.md", &long).is_empty());
        assert!(check("config.yaml", "var: 1\nconsole.log(x)").is_empty());
    }

    #[test]
    fn test_multiple_rules_on_one_line_in_rule_order() {
        let line = format!("var x = 1; console.log(x); // {}", "z".repeat(120));
        let issues = check("src/a.ts", &line);
        let messages: Vec<_> = issues.iter().map(|i| i.message.as_str()).collect();
        assert_eq!(messages.len(), 3);
        assert!(messages[0].starts_with("Line is"));
        assert!(messages[1].starts_with("Console output"));
        assert!(messages[2].starts_with("Legacy"));
    }

    #[test]
    fn test_lint_rules_do_not_change_findings() {
        let content = "var a = 1;\nconsole.log(a);\n";
        let source = MemorySource::new().with_file("a.ts", content);
        let files = vec!["a.ts".to_string()];
        let baseline = StyleChecker::new(&StyleConfig::default()).analyze(&files, &source);
        for rules in [LintRules::Strict, LintRules::Relaxed] {
            let checker = StyleChecker::new(&StyleConfig {
                enforce_format: false,
                lint_rules: rules,
            });
            assert_eq!(checker.lint_rules(), rules);
            assert!(!checker.enforces_format());
            assert_eq!(checker.analyze(&files, &source), baseline);
        }
    }
}
