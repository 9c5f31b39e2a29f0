//! Construction-time constant folding for prefix operators.
//!
//! Each rewrite consumes its operand and returns the replacement. A rewrite
//! performs one level of simplification; it never cancels a double negation
//! of a non-constant operand.

use tracing::trace;

use crate::context::Context;
use crate::expression::{Expression, ExpressionKind, ExpressionNode};
use crate::operator::{Operator, OperatorKind};
use crate::prefix::PrefixExpression;

/// Outcome of re-running folding on an existing node.
#[derive(Clone, Debug)]
pub enum RewriteResult {
    /// Nothing further to simplify. Not a failure.
    Unchanged,
    Replace(Expression),
}

/// Negate `operand`, pushing the sign into literals and constant constructors.
pub fn negate_operand(context: &Context, operand: Expression) -> Expression {
    let offset = operand.offset();
    let ty = operand.ty().clone();
    match operand.node() {
        ExpressionNode::IntLiteral(value) => {
            trace!(offset, value, "folding negated int literal");
            return Expression::int_literal(offset, value.wrapping_neg(), ty);
        }
        ExpressionNode::FloatLiteral(value) => {
            trace!(offset, value, "folding negated float literal");
            return Expression::float_literal(offset, -value, ty);
        }
        _ => {}
    }

    // Only done when optimizing, to keep unoptimized output close to the source.
    if context.settings.optimize
        && operand.kind() == ExpressionKind::Constructor
        && operand.is_compile_time_constant()
    {
        let ExpressionNode::Constructor(arguments) = operand.into_node() else {
            unreachable!("checked the kind above");
        };
        trace!(offset, ty = ty.name(), "pushing negation into constructor");
        // -float4(float3(1), 2) becomes float4(-float3(1), -2), and the
        // recursion keeps going down to float4(float3(-1), -2).
        let arguments = arguments
            .into_iter()
            .map(|argument| negate_operand(context, argument))
            .collect();
        return Expression::constructor(offset, ty, arguments);
    }

    PrefixExpression::new(Operator::new(OperatorKind::Minus), operand)
}

/// Apply logical not, inverting boolean literals in place of a wrapper node.
pub fn logical_not_operand(_context: &Context, operand: Expression) -> Expression {
    if let Some(value) = operand.as_bool_literal() {
        trace!(offset = operand.offset(), value, "folding logical not");
        return Expression::bool_literal(operand.offset(), !value, operand.ty().clone());
    }

    PrefixExpression::new(Operator::new(OperatorKind::LogicalNot), operand)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expression::{Modifiers, RefKind, Variable};
    use insta::assert_snapshot;
    use shade_core::Settings;

    fn unoptimized() -> Context {
        Context::new(Settings {
            optimize: false,
            ..Settings::default()
        })
    }

    #[test]
    fn test_negate_int_literal() {
        let context = Context::default();
        let literal = Expression::int_literal(9, 5, context.types.int.clone());

        let negated = negate_operand(&context, literal);
        assert_eq!(negated.kind(), ExpressionKind::IntLiteral);
        assert_eq!(negated.offset(), 9);
        assert_eq!(negated.ty().name(), "int");
        assert!(negated.is_compile_time_constant());
        assert_snapshot!(negated.describe(), @"-5");
    }

    #[test]
    fn test_negate_negative_float_literal() {
        let context = Context::default();
        let literal = Expression::float_literal(0, -0.25, context.types.half.clone());

        let negated = negate_operand(&context, literal);
        assert_eq!(negated.ty().name(), "half");
        assert_snapshot!(negated.describe(), @"0.25");
    }

    #[test]
    fn test_negate_int_min_wraps() {
        let context = Context::default();
        let literal = Expression::int_literal(0, i64::MIN, context.types.int.clone());

        let negated = negate_operand(&context, literal);
        assert_eq!(negated.kind(), ExpressionKind::IntLiteral);
    }

    #[test]
    fn test_negate_nested_constructor() {
        let context = Context::default();
        let types = &context.types;
        let inner = Expression::constructor(
            5,
            types.float3.clone(),
            vec![Expression::float_literal(12, 1.0, types.float_literal.clone())],
        );
        let outer = Expression::constructor(
            0,
            types.float4.clone(),
            vec![
                inner,
                Expression::float_literal(16, 2.0, types.float_literal.clone()),
            ],
        );

        let negated = negate_operand(&context, outer);
        assert_eq!(negated.kind(), ExpressionKind::Constructor);
        assert_eq!(negated.as_constructor().len(), 2);
        assert!(negated.is_compile_time_constant());
        assert_snapshot!(negated.describe(), @"float4(float3(-1.0), -2.0)");
    }

    #[test]
    fn test_negate_constructor_without_optimization() {
        let context = unoptimized();
        let types = &context.types;
        let ctor = Expression::constructor(
            0,
            types.int2.clone(),
            vec![
                Expression::int_literal(5, 1, types.int_literal.clone()),
                Expression::int_literal(8, 2, types.int_literal.clone()),
            ],
        );

        let negated = negate_operand(&context, ctor);
        assert_eq!(negated.kind(), ExpressionKind::Prefix);
        assert!(negated.is_compile_time_constant());
        assert_snapshot!(negated.describe(), @"-int2(1, 2)");
    }

    #[test]
    fn test_negate_non_constant_constructor_wraps() {
        let context = Context::default();
        let types = &context.types;
        let x = Variable::new("x", types.float.clone(), Modifiers::default());
        let ctor = Expression::constructor(
            0,
            types.float2.clone(),
            vec![
                Expression::variable_reference(7, x, RefKind::Read),
                Expression::float_literal(10, 1.0, types.float_literal.clone()),
            ],
        );

        let negated = negate_operand(&context, ctor);
        assert_snapshot!(negated.describe(), @"-float2(x, 1.0)");
    }

    #[test]
    fn test_double_negation_is_not_cancelled() {
        let context = Context::default();
        let x = Variable::new("x", context.types.float.clone(), Modifiers::default());
        let reference = Expression::variable_reference(1, x, RefKind::Read);

        let once = negate_operand(&context, reference);
        let twice = negate_operand(&context, once);
        assert_eq!(twice.kind(), ExpressionKind::Prefix);
        assert_eq!(twice.as_prefix().operand().kind(), ExpressionKind::Prefix);
        assert_snapshot!(twice.describe(), @"-(-x)");
    }

    #[test]
    fn test_logical_not_literals() {
        let context = Context::default();
        let t = Expression::bool_literal(2, true, context.types.bool.clone());
        let f = Expression::bool_literal(3, false, context.types.bool.clone());

        let not_t = logical_not_operand(&context, t);
        let not_f = logical_not_operand(&context, f);
        assert_eq!(not_t.as_bool_literal(), Some(false));
        assert_eq!(not_t.offset(), 2);
        assert_eq!(not_f.as_bool_literal(), Some(true));
    }

    #[test]
    fn test_logical_not_wraps_variables() {
        let context = Context::default();
        let b = Variable::new("b", context.types.bool.clone(), Modifiers::default());
        let reference = Expression::variable_reference(1, b, RefKind::Read);

        let not_b = logical_not_operand(&context, reference);
        assert_eq!(not_b.kind(), ExpressionKind::Prefix);
        assert!(!not_b.is_compile_time_constant());
        assert_snapshot!(not_b.describe(), @"!b");
    }
}
