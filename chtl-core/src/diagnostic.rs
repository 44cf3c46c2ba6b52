//! Diagnostics produced while compiling
//!
//! The pipeline never aborts on malformed input. Instead every parsing function
//! records what it skipped or could not close into an ordered [`Diagnostics`]
//! channel, which ends up on the [`CompilationUnit`](crate::unit::CompilationUnit)
//! of the fragment being compiled.
//!
//! Offsets are absolute byte offsets into the original source. Compilers work on
//! fragment-local text, so the channel is created with the fragment's start offset
//! and rebases every position it receives.

use serde::Serialize;
use std::fmt;

/// How serious a diagnostic is
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// The defect classes the compilers can report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DiagnosticKind {
    /// Input the structural compiler did not recognize and skipped over
    StructuralSkip,
    /// A block opener without its matching closer
    UnterminatedBlock,
    /// `[Origin] @X` where `X` is not a known origin kind
    UnknownOriginKind,
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticKind::StructuralSkip => write!(f, "structural-skip"),
            DiagnosticKind::UnterminatedBlock => write!(f, "unterminated-block"),
            DiagnosticKind::UnknownOriginKind => write!(f, "unknown-origin-kind"),
        }
    }
}

/// A single reported defect
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub kind: DiagnosticKind,
    /// Byte offset into the original source
    pub offset: usize,
    pub message: String,
}

impl Diagnostic {
    pub fn warning(kind: DiagnosticKind, offset: usize, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            kind,
            offset,
            message: message.into(),
        }
    }

    pub fn error(kind: DiagnosticKind, offset: usize, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            kind,
            offset,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}[{}] at byte {}: {}",
            self.severity, self.kind, self.offset, self.message
        )
    }
}

/// Ordered diagnostic channel for one fragment
#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    base: usize,
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    /// Create a channel whose local offsets are rebased onto `base`
    pub fn new(base: usize) -> Self {
        Self {
            base,
            entries: Vec::new(),
        }
    }

    pub fn warn(&mut self, kind: DiagnosticKind, local_offset: usize, message: impl Into<String>) {
        self.entries
            .push(Diagnostic::warning(kind, self.base + local_offset, message));
    }

    pub fn error(&mut self, kind: DiagnosticKind, local_offset: usize, message: impl Into<String>) {
        self.entries
            .push(Diagnostic::error(kind, self.base + local_offset, message));
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.entries
    }
}
