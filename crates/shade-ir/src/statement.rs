//! Statement nodes and `if` construction with static flattening.

use std::fmt;

use shade_core::{ConstructResult, Offset};
use tracing::trace;

use crate::context::Context;
use crate::error::IrError;
use crate::expression::Expression;

/// Discriminant of a [`Statement`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StatementKind {
    If,
    Block,
    Expression,
    Nop,
}

#[derive(Clone, Debug)]
pub enum StatementNode {
    If(IfStatement),
    Block(Vec<Statement>),
    Expression(Expression),
    Nop,
}

/// A statement. Like expressions, statements are rebuilt rather than mutated.
#[derive(Clone, Debug)]
pub struct Statement {
    offset: Offset,
    node: StatementNode,
}

impl Statement {
    pub fn block(offset: Offset, statements: Vec<Statement>) -> Self {
        Self {
            offset,
            node: StatementNode::Block(statements),
        }
    }

    /// An expression evaluated for its side effects, at the expression's offset.
    pub fn expression(expr: Expression) -> Self {
        Self {
            offset: expr.offset(),
            node: StatementNode::Expression(expr),
        }
    }

    pub fn nop(offset: Offset) -> Self {
        Self {
            offset,
            node: StatementNode::Nop,
        }
    }

    pub fn offset(&self) -> Offset {
        self.offset
    }

    pub fn node(&self) -> &StatementNode {
        &self.node
    }

    pub fn into_node(self) -> StatementNode {
        self.node
    }

    /// The same statement reported at a different offset.
    pub fn with_offset(self, offset: Offset) -> Self {
        Self { offset, ..self }
    }

    pub fn kind(&self) -> StatementKind {
        match &self.node {
            StatementNode::If(_) => StatementKind::If,
            StatementNode::Block(_) => StatementKind::Block,
            StatementNode::Expression(_) => StatementKind::Expression,
            StatementNode::Nop => StatementKind::Nop,
        }
    }

    /// # Panics
    ///
    /// If the statement is not an `if`.
    pub fn as_if(&self) -> &IfStatement {
        match &self.node {
            StatementNode::If(if_stmt) => if_stmt,
            _ => panic!("expected if statement, found {:?}", self.kind()),
        }
    }

    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.node {
            StatementNode::If(if_stmt) => write!(f, "{if_stmt}"),
            StatementNode::Block(statements) => {
                f.write_str("{")?;
                for statement in statements {
                    write!(f, "\n{statement}")?;
                }
                f.write_str("\n}")
            }
            StatementNode::Expression(expr) => write!(f, "{expr};"),
            StatementNode::Nop => f.write_str(";"),
        }
    }
}

/// `if (test) if_true else if_false`. `@if` marks a static conditional.
#[derive(Clone, Debug)]
pub struct IfStatement {
    is_static: bool,
    test: Box<Expression>,
    if_true: Box<Statement>,
    if_false: Option<Box<Statement>>,
}

impl IfStatement {
    /// Type-check the test, then build with [`IfStatement::make`].
    pub fn convert(
        context: &Context,
        offset: Offset,
        is_static: bool,
        test: Expression,
        if_true: Statement,
        if_false: Option<Statement>,
    ) -> ConstructResult<Statement> {
        if !test.ty().is_boolean() {
            return Err(context.errors.error(
                test.offset(),
                IrError::ExpectedType {
                    expected: context.types.bool.display_name().to_string(),
                    found: test.ty().display_name().to_string(),
                },
            ));
        }
        Ok(Self::make(offset, is_static, test, if_true, if_false))
    }

    /// Build an `if`, collapsing a static conditional on a boolean literal to
    /// the branch it selects. The result always carries `offset`.
    pub fn make(
        offset: Offset,
        is_static: bool,
        test: Expression,
        if_true: Statement,
        if_false: Option<Statement>,
    ) -> Statement {
        if is_static {
            if let Some(value) = test.as_bool_literal() {
                trace!(offset, value, "flattening static if");
                let taken = if value {
                    if_true
                } else {
                    if_false.unwrap_or_else(|| Statement::nop(offset))
                };
                return taken.with_offset(offset);
            }
        }

        Statement {
            offset,
            node: StatementNode::If(IfStatement {
                is_static,
                test: Box::new(test),
                if_true: Box::new(if_true),
                if_false: if_false.map(Box::new),
            }),
        }
    }

    pub fn is_static(&self) -> bool {
        self.is_static
    }

    pub fn test(&self) -> &Expression {
        &self.test
    }

    pub fn if_true(&self) -> &Statement {
        &self.if_true
    }

    pub fn if_false(&self) -> Option<&Statement> {
        self.if_false.as_deref()
    }

    /// Take the statement apart as `(is_static, test, if_true, if_false)`.
    pub fn into_parts(self) -> (bool, Expression, Statement, Option<Statement>) {
        (
            self.is_static,
            *self.test,
            *self.if_true,
            self.if_false.map(|stmt| *stmt),
        )
    }
}

impl fmt::Display for IfStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_static {
            f.write_str("@")?;
        }
        write!(f, "if ({}) {}", self.test, self.if_true)?;
        if let Some(if_false) = &self.if_false {
            write!(f, " else {if_false}")?;
        }
        Ok(())
    }
}
