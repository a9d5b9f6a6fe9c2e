//! Pattern Library — every signature the analyzers match against.
//!
//! Pure data. Analyzers look patterns up here and never embed their own
//! literals, so tuning a signature happens in exactly one place.

use regex::Regex;
use std::sync::LazyLock;

/// Secret signature definition.
pub struct SecretSignature {
    /// Short identifier used in issue messages
    pub name: &'static str,
    /// Regex source
    pub pattern: &'static str,
    /// Human-readable description of the credential shape
    pub description: &'static str,
}

/// Credential shapes the security scanner looks for on every line.
pub const SECRET_SIGNATURES: &[SecretSignature] = &[
    SecretSignature {
        name: "generic_credential",
        pattern: r#"(?i)\b(?:api[_-]?key|secret|password|passwd|pwd|token)\b["']?\s*[:=]\s*["'][^"'\s]{8,}["']"#,
        description: "Hard-coded API key, password or secret assignment",
    },
    SecretSignature {
        name: "private_key",
        pattern: r"-----BEGIN (?:RSA |EC |DSA |OPENSSH |ENCRYPTED )?PRIVATE KEY-----",
        description: "PEM private key block",
    },
    SecretSignature {
        name: "prefixed_token_36",
        pattern: r"\bghp_[A-Za-z0-9]{36}\b",
        description: "Hosted personal access token (4-char prefix, 36-char body)",
    },
    SecretSignature {
        name: "prefixed_token_48",
        pattern: r"\bsk-[A-Za-z0-9]{48}\b",
        description: "Hosted API secret key (3-char prefix, 48-char body)",
    },
    SecretSignature {
        name: "access_key_id",
        pattern: r"\bAKIA[0-9A-Z]{16}\b",
        description: "Cloud access key id (20 uppercase alphanumerics, fixed 4-char prefix)",
    },
];

/// Compiled form of [`SECRET_SIGNATURES`], in declaration order.
pub static SECRET_REGEXES: LazyLock<Vec<(&'static SecretSignature, Regex)>> =
    LazyLock::new(|| {
        SECRET_SIGNATURES
            .iter()
            .map(|sig| {
                let re = Regex::new(sig.pattern).expect("secret signature regex should compile");
                (sig, re)
            })
            .collect()
    });

/// Default forbidden-pattern sources for the semantic analyzer.
///
/// Matched case-insensitively, one line at a time.
pub const DEFAULT_FORBIDDEN_PATTERNS: &[&str] = &[
    // type escape hatches
    r"\bas\s+any\b",
    r"@ts-ignore",
    r"@ts-nocheck",
    // dynamic code execution
    r"\beval\s*\(",
    r"\bnew\s+Function\s*\(",
    // deferred fixes
    r"\bTODO\b",
    r"\bFIXME\b",
    r"\bHACK\b",
];

/// Packages the dependency check rejects by default.
pub const DEFAULT_FORBIDDEN_PACKAGES: &[&str] = &[
    "event-stream",
    "flatmap-stream",
    "request",
    "node-uuid",
    "left-pad",
];

/// Dependency manifest read from the repository root.
pub const MANIFEST_FILE: &str = "package.json";

/// Manifest sections whose keys are dependency names.
pub const MANIFEST_DEPENDENCY_SECTIONS: &[&str] = &["dependencies", "devDependencies"];

/// Characters that open a block for the nesting-depth heuristic.
pub const BLOCK_OPEN: char = '{';
/// Characters that close a block for the nesting-depth heuristic.
pub const BLOCK_CLOSE: char = '}';

/// Module references in `import ... from "x"`, `import "x"`, `import("x")`,
/// `require("x")` and `export ... from "x"` forms.
pub static IMPORT_TARGET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?:\bfrom\s+|\bimport\s+|\bimport\s*\(\s*|\brequire\s*\(\s*)["']([^"']+)["']"#,
    )
    .expect("IMPORT_TARGET regex should compile")
});

/// One capitalized segment of an identifier (`React`, `Utils`, `X2`). A run
/// of capitals counts once, so `AWS` and `JSONStream` are single segments.
pub static CAPITALIZED_SEGMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[A-Z]+[a-z0-9]*").expect("CAPITALIZED_SEGMENT regex should compile")
});

/// Prefix marking a relative module reference.
pub const RELATIVE_IMPORT_PREFIX: &str = ".";

/// File extensions the style checker considers source code.
pub const SOURCE_EXTENSIONS: &[&str] = &[".ts", ".tsx", ".js", ".jsx", ".mjs", ".cjs"];

/// Name fragments identifying test files.
pub const TEST_FILE_MARKERS: &[&str] = &[".test.", ".spec.", "__tests__/", "/test/", "/tests/"];

/// Maximum line length before a style warning.
pub const MAX_LINE_LENGTH: usize = 120;

/// Console debug/log calls.
pub static CONSOLE_CALL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\bconsole\s*\.\s*(?:log|debug|info|trace|dir)\s*\(")
        .expect("CONSOLE_CALL regex should compile")
});

/// Legacy untyped `var` declarations.
pub static LEGACY_VAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^|[^\w$.])var\s+[A-Za-z_$]").expect("LEGACY_VAR regex should compile")
});

/// Whether `path` ends in a recognized source extension.
pub fn is_source_file(path: &str) -> bool {
    SOURCE_EXTENSIONS.iter().any(|ext| path.ends_with(ext))
}

/// Whether `path` looks like a test file by naming convention.
pub fn is_test_file(path: &str) -> bool {
    let normalized = format!("/{}", path.replace('\\', "/"));
    TEST_FILE_MARKERS
        .iter()
        .any(|marker| normalized.contains(marker))
}
