//! Diagnostic messages emitted during IR construction.

use std::cell::RefCell;
use std::fmt;

use derive_more::Display;
use serde::Serialize;

/// Byte offset into the source text of the compilation unit.
pub type Offset = usize;

/// A message with the source offset it was reported at.
#[derive(Clone, Debug, Display, PartialEq, Eq, Hash, Serialize)]
#[display("{offset}: {message}")]
pub struct Diagnostic {
    pub offset: Offset,
    pub message: String,
    pub severity: DiagnosticSeverity,
}

/// Severity level of a diagnostic.
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq, Hash, Serialize)]
pub enum DiagnosticSeverity {
    #[display("ERROR")]
    Error,
}

/// Proof that a failure has already been reported to a [`DiagnosticSink`].
///
/// The only way to obtain one is [`DiagnosticSink::error`]. It carries no
/// message, so a caller that receives it can propagate the failure but has
/// nothing to report a second time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use]
pub struct Reported {
    _private: (),
}

/// Result of a construction step that reports its own failures.
pub type ConstructResult<T> = Result<T, Reported>;

/// Collects diagnostics for one compilation unit.
///
/// Reporting only needs a shared reference; construction runs on a single
/// thread, so the log is a plain `RefCell`.
#[derive(Debug, Default)]
pub struct DiagnosticSink {
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl DiagnosticSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error at `offset` and return the witness for it.
    pub fn error(&self, offset: Offset, message: impl fmt::Display) -> Reported {
        self.diagnostics.borrow_mut().push(Diagnostic {
            offset,
            message: message.to_string(),
            severity: DiagnosticSeverity::Error,
        });
        Reported { _private: () }
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics.borrow().len()
    }

    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    /// Snapshot of everything reported so far, in report order.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }

    /// Drain the log, leaving the sink empty.
    pub fn take(&self) -> Vec<Diagnostic> {
        std::mem::take(&mut *self.diagnostics.borrow_mut())
    }
}
