//! Shade compiler utilities.
pub mod diagnostic;
pub mod settings;

pub use diagnostic::{
    ConstructResult, Diagnostic, DiagnosticSeverity, DiagnosticSink, Offset, Reported,
};
pub use settings::{ProgramKind, Settings};
