//! Prefix operator construction through the public API.

mod common;

use common::{boolean, context_with, float, int, local, messages, read};
use insta::assert_snapshot;
use shade::{
    Context, Expression, ExpressionKind, ExpressionNode, Modifiers, Operator, OperatorKind,
    PrefixExpression, ProgramKind, RefKind, Variable,
};

fn make(context: &Context, kind: OperatorKind, base: Expression) -> Option<Expression> {
    PrefixExpression::make(context, Operator::new(kind), base).ok()
}

#[test]
fn test_plus_returns_operand_itself() {
    let context = Context::default();
    let v = local(&context, "v", "half4");

    let result = make(&context, OperatorKind::Plus, read(11, &v)).unwrap();
    assert_eq!(result.kind(), ExpressionKind::VariableReference);
    assert_eq!(result.offset(), 11);
    assert_snapshot!(result.describe(), @"v");
}

#[test]
fn test_plus_on_bool_reports_type_name() {
    let context = Context::default();

    assert!(make(&context, OperatorKind::Plus, boolean(&context, 14, false)).is_none());
    assert_eq!(messages(&context), ["14: '+' cannot operate on 'bool'"]);
}

#[test]
fn test_minus_on_literal_folds() {
    let context = Context::default();

    let result = make(&context, OperatorKind::Minus, float(&context, 2, 1.5)).unwrap();
    assert_eq!(result.kind(), ExpressionKind::FloatLiteral);
    assert!(result.is_compile_time_constant());
    assert_eq!(result.ty().name(), "$floatLiteral");
    assert_snapshot!(result.describe(), @"-1.5");
}

#[test]
fn test_minus_on_variable_wraps() {
    let context = Context::default();
    let x = local(&context, "x", "int3");

    let result = make(&context, OperatorKind::Minus, read(1, &x)).unwrap();
    assert_eq!(result.kind(), ExpressionKind::Prefix);
    assert_eq!(result.ty().name(), "int3");
    assert!(!result.is_compile_time_constant());
    assert_snapshot!(result.describe(), @"-x");
}

#[test]
fn test_logical_not() {
    let context = Context::default();
    let b = local(&context, "b", "bool");

    let folded = make(&context, OperatorKind::LogicalNot, boolean(&context, 0, true)).unwrap();
    assert_eq!(folded.as_bool_literal(), Some(false));

    let wrapped = make(&context, OperatorKind::LogicalNot, read(3, &b)).unwrap();
    assert_snapshot!(wrapped.describe(), @"!b");
}

#[test]
fn test_bitwise_not_in_strict_mode_rejects_every_type() {
    let context = context_with(true, ProgramKind::RuntimeEffect);
    let f = local(&context, "f", "float");

    assert!(make(&context, OperatorKind::BitwiseNot, int(&context, 1, 7)).is_none());
    assert!(make(&context, OperatorKind::BitwiseNot, read(5, &f)).is_none());
    assert!(make(&context, OperatorKind::BitwiseNot, boolean(&context, 9, true)).is_none());
    assert_eq!(
        messages(&context),
        [
            "1: operator '~' is not allowed",
            "5: operator '~' is not allowed",
            "9: operator '~' is not allowed",
        ]
    );
}

#[test]
fn test_bitwise_not_outside_strict_mode() {
    let context = context_with(true, ProgramKind::Fragment);
    let f = local(&context, "f", "float");
    let u = local(&context, "u", "uint");

    assert!(make(&context, OperatorKind::BitwiseNot, read(5, &f)).is_none());
    assert_eq!(messages(&context), ["5: '~' cannot operate on 'float'"]);

    let typed = make(&context, OperatorKind::BitwiseNot, read(8, &u)).unwrap();
    assert_eq!(typed.ty().name(), "uint");
    assert_snapshot!(typed.describe(), @"~u");

    let literal = make(&context, OperatorKind::BitwiseNot, int(&context, 12, 123)).unwrap();
    let operand = literal.as_prefix().operand();
    assert_eq!(operand.kind(), ExpressionKind::IntLiteral);
    assert_eq!(operand.ty().name(), "int");
    assert!(!operand.ty().is_literal());
}

#[test]
fn test_increment_on_literal_fails_assignability() {
    let context = Context::default();

    assert!(make(&context, OperatorKind::PlusPlus, int(&context, 4, 1)).is_none());
    assert_eq!(messages(&context), ["4: cannot assign to this expression"]);
}

#[test]
fn test_decrement_on_const_variable() {
    let context = Context::default();
    let limit = Variable::new(
        "limit",
        context.types.int.clone(),
        Modifiers {
            is_const: true,
            ..Modifiers::default()
        },
    );

    assert!(make(&context, OperatorKind::MinusMinus, read(2, &limit)).is_none());
    assert_eq!(
        messages(&context),
        ["2: cannot modify immutable variable 'limit'"]
    );
}

#[test]
fn test_increment_on_bool_is_a_type_error_first() {
    let context = Context::default();
    let b = local(&context, "b", "bool");

    assert!(make(&context, OperatorKind::PlusPlus, read(0, &b)).is_none());
    // Only the type error is reported; assignability is never consulted.
    assert_eq!(messages(&context), ["0: '++' cannot operate on 'bool'"]);
}

#[test]
fn test_decrement_wraps_without_folding() {
    let context = Context::default();
    let i = local(&context, "i", "short");

    let result = make(&context, OperatorKind::MinusMinus, read(6, &i)).unwrap();
    let ExpressionNode::VariableReference(reference) = result.as_prefix().operand().node() else {
        panic!("operand should be a variable reference");
    };
    assert_eq!(reference.ref_kind(), RefKind::ReadWrite);
    assert_snapshot!(result.describe(), @"--i");
}

#[test]
#[should_panic(expected = "unsupported prefix operator '=='")]
fn test_binary_operator_is_a_compiler_bug() {
    let context = Context::default();
    let _ = make(&context, OperatorKind::Eq, int(&context, 0, 1));
}
