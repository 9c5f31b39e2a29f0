//! User-facing construction errors.

use derive_more::{Display, Error};

/// Why a node could not be constructed. Rendered into the diagnostic sink.
#[derive(Clone, Debug, Display, Error, PartialEq, Eq)]
pub enum IrError {
    #[display("'{op}' cannot operate on '{ty}'")]
    TypeMismatch { op: &'static str, ty: String },

    /// Operator rejected by the active dialect (GLSL ES 1.00, Section 5.1).
    #[display("operator '{op}' is not allowed")]
    RestrictedOperator { op: &'static str },

    #[display("cannot assign to this expression")]
    NotAssignable,

    #[display("cannot modify immutable variable '{name}'")]
    ImmutableVariable { name: String },

    #[display("expected '{expected}', but found '{found}'")]
    ExpectedType { expected: String, found: String },
}
