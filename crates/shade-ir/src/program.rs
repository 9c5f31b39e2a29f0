//! A compilation unit's top-level statements and the constant-propagation pass.

use shade_core::ConstructResult;
use tracing::debug;

use crate::context::Context;
use crate::definitions::DefinitionMap;
use crate::expression::{Expression, ExpressionNode, RefKind};
use crate::fold::RewriteResult;
use crate::prefix::PrefixExpression;
use crate::statement::{IfStatement, Statement, StatementNode};

/// Top-level statements of one compilation unit.
///
/// A construct that failed to build is dropped and the unit keeps going, so
/// diagnostics from later constructs are still collected.
#[derive(Clone, Debug, Default)]
pub struct Program {
    statements: Vec<Statement>,
}

impl Program {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a construct if it was built. Returns whether it was.
    pub fn push(&mut self, statement: ConstructResult<Statement>) -> bool {
        match statement {
            Ok(statement) => {
                self.statements.push(statement);
                true
            }
            Err(_) => false,
        }
    }

    pub fn statements(&self) -> &[Statement] {
        &self.statements
    }

    pub fn into_statements(self) -> Vec<Statement> {
        self.statements
    }

    /// Rebuild every statement with folding re-applied bottom-up.
    ///
    /// Reads of variables with a constant definition are replaced by that
    /// value first, so prefix operators over them fold as well.
    pub fn constant_propagate(self, context: &Context, definitions: &DefinitionMap) -> Program {
        let pass = Propagation {
            context,
            definitions,
        };
        Program {
            statements: self
                .statements
                .into_iter()
                .map(|statement| pass.statement(statement))
                .collect(),
        }
    }
}

struct Propagation<'a> {
    context: &'a Context,
    definitions: &'a DefinitionMap,
}

impl Propagation<'_> {
    fn statement(&self, statement: Statement) -> Statement {
        let offset = statement.offset();
        match statement.into_node() {
            StatementNode::If(if_stmt) => {
                let (is_static, test, if_true, if_false) = if_stmt.into_parts();
                IfStatement::make(
                    offset,
                    is_static,
                    self.expression(test),
                    self.statement(if_true),
                    if_false.map(|stmt| self.statement(stmt)),
                )
            }
            StatementNode::Block(statements) => Statement::block(
                offset,
                statements
                    .into_iter()
                    .map(|stmt| self.statement(stmt))
                    .collect(),
            ),
            StatementNode::Expression(expr) => {
                Statement::expression(self.expression(expr)).with_offset(offset)
            }
            StatementNode::Nop => Statement::nop(offset),
        }
    }

    fn expression(&self, expr: Expression) -> Expression {
        let offset = expr.offset();
        let ty = expr.ty().clone();
        match expr.into_node() {
            ExpressionNode::Constructor(arguments) => Expression::constructor(
                offset,
                ty,
                arguments
                    .into_iter()
                    .map(|argument| self.expression(argument))
                    .collect(),
            ),
            ExpressionNode::Prefix(prefix) => {
                let op = prefix.operator();
                let operand = self.expression(prefix.into_operand());
                let rebuilt = PrefixExpression::new(op, operand);
                match rebuilt.as_prefix().constant_propagate(self.context) {
                    RewriteResult::Replace(replacement) => replacement,
                    RewriteResult::Unchanged => rebuilt,
                }
            }
            // Writes keep their target; only plain reads take the known value.
            ExpressionNode::VariableReference(reference)
                if reference.ref_kind() == RefKind::Read =>
            {
                match self.definitions.constant_value(reference.variable()) {
                    Some(value) => {
                        debug!(
                            offset,
                            variable = reference.variable().name(),
                            "substituted constant definition"
                        );
                        value.clone().with_offset(offset)
                    }
                    None => Expression::new(
                        offset,
                        ty,
                        ExpressionNode::VariableReference(reference),
                    ),
                }
            }
            node => Expression::new(offset, ty, node),
        }
    }
}
