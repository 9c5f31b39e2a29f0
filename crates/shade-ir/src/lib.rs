//! Typed IR for Shade programs.
//!
//! Nodes are built through smart constructors that validate operand types,
//! report failures to the [`Context`]'s diagnostic sink, and fold constant
//! subexpressions as they go.

pub mod analysis;
pub mod context;
pub mod definitions;
pub mod error;
pub mod expression;
pub mod fold;
pub mod operator;
pub mod prefix;
pub mod program;
pub mod statement;
pub mod types;

pub use context::Context;
pub use definitions::DefinitionMap;
pub use error::IrError;
pub use expression::{
    Expression, ExpressionKind, ExpressionNode, Modifiers, RefKind, Variable, VariableReference,
};
pub use fold::{RewriteResult, logical_not_operand, negate_operand};
pub use operator::{Operator, OperatorKind};
pub use prefix::PrefixExpression;
pub use program::Program;
pub use statement::{IfStatement, Statement, StatementKind, StatementNode};
pub use types::{NumberKind, Type, TypeKind, TypeRef, TypeRegistry};
