//! Error types and diagnostics
//!
//! The extractor and renderer never fail on malformed-but-present input;
//! errors here belong to the parsing adapter, configuration loading and the
//! file-writing generator. Per-file problems during a generator run are
//! collected as [`Diagnostic`]s instead of aborting the whole run.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for docweave operations
pub type DocResult<T> = Result<T, DocError>;

/// Main error type for docweave
#[derive(Debug, Error)]
pub enum DocError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TypeScript parse error
    #[error("TypeScript parse error in {file}: {message}")]
    TypeScriptParse { file: PathBuf, message: String },

    /// A JSDoc tag whose structured comment could not be produced
    #[error("Malformed @{tag} tag: {message}")]
    MalformedTag { tag: String, message: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid path
    #[error("Invalid path: {0}")]
    InvalidPath(String),

    /// JSON serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML configuration could not be deserialized
    #[error("Invalid TOML: {0}")]
    TomlDe(#[from] toml::de::Error),
}

impl DocError {
    /// Create a parse error
    pub fn parse(file: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        DocError::TypeScriptParse {
            file: file.into(),
            message: message.into(),
        }
    }

    /// Create a malformed tag error
    pub fn malformed_tag(tag: impl Into<String>, message: impl Into<String>) -> Self {
        DocError::MalformedTag {
            tag: tag.into(),
            message: message.into(),
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        DocError::Config(message.into())
    }
}

/// Diagnostic severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticSeverity {
    /// Error - a document could not be written
    Error,
    /// Warning - generation continues
    Warning,
    /// Info - informational message
    Info,
}

impl DiagnosticSeverity {
    /// Get display string
    pub fn display(&self) -> &'static str {
        match self {
            DiagnosticSeverity::Error => "error",
            DiagnosticSeverity::Warning => "warning",
            DiagnosticSeverity::Info => "info",
        }
    }
}

/// A diagnostic message
#[derive(Debug, Clone)]
pub struct Diagnostic {
    /// Severity level
    pub severity: DiagnosticSeverity,
    /// Message
    pub message: String,
    /// Source or document file
    pub file: Option<PathBuf>,
}

impl Diagnostic {
    /// Create a new diagnostic
    pub fn new(severity: DiagnosticSeverity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
            file: None,
        }
    }

    /// Create an error diagnostic
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(DiagnosticSeverity::Error, message)
    }

    /// Create a warning diagnostic
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(DiagnosticSeverity::Warning, message)
    }

    /// Create an info diagnostic
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(DiagnosticSeverity::Info, message)
    }

    /// Set the source file
    pub fn in_file(mut self, file: impl Into<PathBuf>) -> Self {
        self.file = Some(file.into());
        self
    }

    /// Format the diagnostic for display
    pub fn format(&self) -> String {
        let mut result = String::new();

        if let Some(ref file) = self.file {
            result.push_str(&file.display().to_string());
            result.push_str(": ");
        }

        result.push_str(self.severity.display());
        result.push_str(": ");
        result.push_str(&self.message);

        result
    }
}

/// Collector for diagnostics during doc generation
#[derive(Debug, Default)]
pub struct DiagnosticsCollector {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticsCollector {
    /// Create a new collector
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a diagnostic
    pub fn add(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Check if there are any errors
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity == DiagnosticSeverity::Error)
    }

    /// Get all diagnostics
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_doc_error() {
        let err = DocError::parse("test.ts", "unexpected token");
        assert!(err.to_string().contains("test.ts"));
        assert!(err.to_string().contains("unexpected token"));

        let err = DocError::malformed_tag("param", "unterminated type expression");
        assert_eq!(
            err.to_string(),
            "Malformed @param tag: unterminated type expression"
        );
    }

    #[test]
    fn test_diagnostic() {
        let diag = Diagnostic::warning("no declarations").in_file("test.ts");

        assert_eq!(diag.severity, DiagnosticSeverity::Warning);
        assert_eq!(diag.format(), "test.ts: warning: no declarations");
        assert_eq!(Diagnostic::info("plain").format(), "info: plain");
    }

    #[test]
    fn test_diagnostics_collector() {
        let mut collector = DiagnosticsCollector::new();
        collector.add(Diagnostic::warning("warning 1"));
        collector.add(Diagnostic::info("info 1"));
        assert!(!collector.has_errors());

        collector.add(Diagnostic::error("error 1").in_file("docs/a.md"));
        assert!(collector.has_errors());
        assert_eq!(collector.diagnostics().len(), 3);
    }
}
