//! Assignability checks for expressions used as write targets.

use shade_core::{ConstructResult, DiagnosticSink};

use crate::error::IrError;
use crate::expression::{Expression, ExpressionNode, RefKind};

/// Validate that `expr` names writable storage and return it re-tagged with `ref_kind`.
///
/// Only references to variables that are neither `const` nor `uniform`
/// qualify; everything else is reported at the expression's offset.
pub fn make_assignment_expr(
    expr: Expression,
    ref_kind: RefKind,
    errors: &DiagnosticSink,
) -> ConstructResult<Expression> {
    let offset = expr.offset();
    match expr.node() {
        ExpressionNode::VariableReference(reference) => {
            let variable = reference.variable();
            let modifiers = variable.modifiers();
            if modifiers.is_const || modifiers.is_uniform {
                return Err(errors.error(
                    offset,
                    IrError::ImmutableVariable {
                        name: variable.name().to_string(),
                    },
                ));
            }
            Ok(Expression::variable_reference(
                offset,
                variable.clone(),
                ref_kind,
            ))
        }
        _ => Err(errors.error(offset, IrError::NotAssignable)),
    }
}
