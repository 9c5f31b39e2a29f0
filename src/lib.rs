//! Shade: IR construction and constant folding for a shading-language front end.

pub mod diagnostics;

pub use shade_core::{
    ConstructResult, Diagnostic, DiagnosticSeverity, DiagnosticSink, Offset, ProgramKind,
    Reported, Settings,
};
pub use shade_ir::*;
