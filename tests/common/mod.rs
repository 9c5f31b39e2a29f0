//! Common test utilities for IR construction tests.

use std::rc::Rc;

use shade::{Context, Expression, Modifiers, ProgramKind, RefKind, Settings, Variable};

#[allow(dead_code)]
pub fn context_with(optimize: bool, kind: ProgramKind) -> Context {
    Context::new(Settings {
        optimize,
        kind,
        ..Settings::default()
    })
}

#[allow(dead_code)]
pub fn float(context: &Context, offset: usize, value: f64) -> Expression {
    Expression::float_literal(offset, value, context.types.float_literal.clone())
}

#[allow(dead_code)]
pub fn int(context: &Context, offset: usize, value: i64) -> Expression {
    Expression::int_literal(offset, value, context.types.int_literal.clone())
}

#[allow(dead_code)]
pub fn boolean(context: &Context, offset: usize, value: bool) -> Expression {
    Expression::bool_literal(offset, value, context.types.bool.clone())
}

#[allow(dead_code)]
pub fn read(offset: usize, variable: &Rc<Variable>) -> Expression {
    Expression::variable_reference(offset, variable.clone(), RefKind::Read)
}

#[allow(dead_code)]
pub fn local(context: &Context, name: &str, type_name: &str) -> Rc<Variable> {
    let ty = context
        .types
        .lookup(type_name)
        .unwrap_or_else(|| panic!("unknown builtin type {type_name}"));
    Variable::new(name, ty, Modifiers::default())
}

#[allow(dead_code)]
pub fn constant_local(context: &Context, name: &str, type_name: &str) -> Rc<Variable> {
    let ty = context
        .types
        .lookup(type_name)
        .unwrap_or_else(|| panic!("unknown builtin type {type_name}"));
    Variable::new(
        name,
        ty,
        Modifiers {
            is_const: true,
            ..Modifiers::default()
        },
    )
}

/// Every diagnostic rendered as `offset: message`.
#[allow(dead_code)]
pub fn messages(context: &Context) -> Vec<String> {
    context
        .errors
        .diagnostics()
        .iter()
        .map(ToString::to_string)
        .collect()
}
