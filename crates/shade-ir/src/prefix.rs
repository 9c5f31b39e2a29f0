//! Prefix operator expressions and their type-checked smart constructor.

use std::fmt;

use shade_core::ConstructResult;
use tracing::debug;

use crate::analysis::make_assignment_expr;
use crate::context::Context;
use crate::error::IrError;
use crate::expression::{Expression, ExpressionKind, ExpressionNode, RefKind};
use crate::fold::{RewriteResult, logical_not_operand, negate_operand};
use crate::operator::{Operator, OperatorKind};

/// `op operand`, e.g. `-x`, `!b` or `++i`. Has the type of its operand.
#[derive(Clone, Debug)]
pub struct PrefixExpression {
    op: Operator,
    operand: Box<Expression>,
}

impl PrefixExpression {
    /// Wrap `operand` without validating or simplifying anything.
    pub(crate) fn new(op: Operator, operand: Expression) -> Expression {
        let offset = operand.offset();
        let ty = operand.ty().clone();
        Expression::new(
            offset,
            ty,
            ExpressionNode::Prefix(PrefixExpression {
                op,
                operand: Box::new(operand),
            }),
        )
    }

    /// Build `op base`, checking the operand type and folding where possible.
    ///
    /// Failures are reported at the operand's offset.
    ///
    /// # Panics
    ///
    /// If `op` is not a prefix operator. The parser never produces one, so
    /// reaching this is a compiler bug rather than a user error.
    pub fn make(context: &Context, op: Operator, base: Expression) -> ConstructResult<Expression> {
        let base_type = base.ty().clone();
        let type_mismatch = || IrError::TypeMismatch {
            op: op.operator_name(),
            ty: base_type.display_name().to_string(),
        };

        let base = match op.kind() {
            OperatorKind::Plus => {
                if !base_type.component_type().is_number() {
                    return Err(context.errors.error(base.offset(), type_mismatch()));
                }
                return Ok(base);
            }
            OperatorKind::Minus => {
                if !base_type.component_type().is_number() {
                    return Err(context.errors.error(base.offset(), type_mismatch()));
                }
                return Ok(negate_operand(context, base));
            }
            OperatorKind::PlusPlus | OperatorKind::MinusMinus => {
                if !base_type.is_number() {
                    return Err(context.errors.error(base.offset(), type_mismatch()));
                }
                make_assignment_expr(base, RefKind::ReadWrite, &context.errors)?
            }
            OperatorKind::LogicalNot => {
                if !base_type.is_boolean() {
                    return Err(context.errors.error(base.offset(), type_mismatch()));
                }
                return Ok(logical_not_operand(context, base));
            }
            OperatorKind::BitwiseNot => {
                if context.settings.strict_es2_mode() {
                    return Err(context.errors.error(
                        base.offset(),
                        IrError::RestrictedOperator {
                            op: op.operator_name(),
                        },
                    ));
                }
                if !base_type.is_integer() {
                    return Err(context.errors.error(base.offset(), type_mismatch()));
                }
                // `~123` is no longer a literal, so it needs a concrete type.
                match base_type.scalar_type_for_literal() {
                    Some(scalar) => base.coerce(scalar),
                    None => base,
                }
            }
            _ => panic!("unsupported prefix operator '{}'", op.operator_name()),
        };

        Ok(PrefixExpression::new(op, base))
    }

    pub fn operator(&self) -> Operator {
        self.op
    }

    pub fn operand(&self) -> &Expression {
        &self.operand
    }

    pub fn into_operand(self) -> Expression {
        *self.operand
    }

    pub fn is_compile_time_constant(&self) -> bool {
        self.op.kind() == OperatorKind::Minus && self.operand.is_compile_time_constant()
    }

    /// Re-run folding now that the operand may have become constant.
    pub fn constant_propagate(&self, context: &Context) -> RewriteResult {
        if !self.operand.is_compile_time_constant() {
            return RewriteResult::Unchanged;
        }
        let replacement = match (self.op.kind(), self.operand.kind()) {
            (
                OperatorKind::Minus,
                ExpressionKind::IntLiteral
                | ExpressionKind::FloatLiteral
                | ExpressionKind::Constructor,
            ) => negate_operand(context, self.operand().clone()),
            (OperatorKind::LogicalNot, ExpressionKind::BoolLiteral) => {
                logical_not_operand(context, self.operand().clone())
            }
            _ => return RewriteResult::Unchanged,
        };
        // Unoptimized constructor negation rebuilds the same prefix node.
        if replacement.kind() == ExpressionKind::Prefix {
            return RewriteResult::Unchanged;
        }
        debug!(
            offset = replacement.offset(),
            op = self.op.operator_name(),
            "constant-propagated prefix expression"
        );
        RewriteResult::Replace(replacement)
    }
}

impl fmt::Display for PrefixExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.operand.kind() == ExpressionKind::Prefix {
            write!(f, "{}({})", self.op, self.operand)
        } else {
            write!(f, "{}{}", self.op, self.operand)
        }
    }
}
