//! Expression nodes.

use std::fmt;
use std::rc::Rc;

use derive_more::Display;
use shade_core::Offset;

use crate::prefix::PrefixExpression;
use crate::types::TypeRef;

/// Discriminant of an [`Expression`].
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq, Hash)]
pub enum ExpressionKind {
    #[display("int literal")]
    IntLiteral,
    #[display("float literal")]
    FloatLiteral,
    #[display("bool literal")]
    BoolLiteral,
    #[display("constructor")]
    Constructor,
    #[display("prefix")]
    Prefix,
    #[display("variable reference")]
    VariableReference,
}

/// Storage qualifiers that decide whether a variable can be written.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Modifiers {
    pub is_const: bool,
    pub is_uniform: bool,
}

/// A declared variable. Owned by the enclosing scope; references share it.
#[derive(Debug, PartialEq)]
pub struct Variable {
    name: String,
    ty: TypeRef,
    modifiers: Modifiers,
}

impl Variable {
    pub fn new(name: impl Into<String>, ty: TypeRef, modifiers: Modifiers) -> Rc<Self> {
        Rc::new(Self {
            name: name.into(),
            ty,
            modifiers,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ty(&self) -> &TypeRef {
        &self.ty
    }

    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }
}

/// How a variable reference uses its storage.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RefKind {
    #[default]
    Read,
    Write,
    ReadWrite,
}

#[derive(Clone, Debug)]
pub struct VariableReference {
    variable: Rc<Variable>,
    ref_kind: RefKind,
}

impl VariableReference {
    pub fn variable(&self) -> &Rc<Variable> {
        &self.variable
    }

    pub fn ref_kind(&self) -> RefKind {
        self.ref_kind
    }
}

/// Payload of an [`Expression`]. Children are owned outright.
#[derive(Clone, Debug)]
pub enum ExpressionNode {
    IntLiteral(i64),
    FloatLiteral(f64),
    BoolLiteral(bool),
    /// Aggregate construction such as `float4(float3(1), 2)`.
    Constructor(Vec<Expression>),
    Prefix(PrefixExpression),
    VariableReference(VariableReference),
}

/// A typed expression.
///
/// Fields are private and there are no setters; rewriting an expression means
/// taking it apart with [`Expression::into_node`] and building a new one.
/// `Clone` is a deep copy of every child.
#[derive(Clone, Debug)]
pub struct Expression {
    offset: Offset,
    ty: TypeRef,
    node: ExpressionNode,
}

impl Expression {
    pub(crate) fn new(offset: Offset, ty: TypeRef, node: ExpressionNode) -> Self {
        Self { offset, ty, node }
    }

    pub fn int_literal(offset: Offset, value: i64, ty: TypeRef) -> Self {
        Self::new(offset, ty, ExpressionNode::IntLiteral(value))
    }

    pub fn float_literal(offset: Offset, value: f64, ty: TypeRef) -> Self {
        Self::new(offset, ty, ExpressionNode::FloatLiteral(value))
    }

    pub fn bool_literal(offset: Offset, value: bool, ty: TypeRef) -> Self {
        Self::new(offset, ty, ExpressionNode::BoolLiteral(value))
    }

    pub fn constructor(offset: Offset, ty: TypeRef, arguments: Vec<Expression>) -> Self {
        Self::new(offset, ty, ExpressionNode::Constructor(arguments))
    }

    pub fn variable_reference(offset: Offset, variable: Rc<Variable>, ref_kind: RefKind) -> Self {
        let ty = variable.ty().clone();
        Self::new(
            offset,
            ty,
            ExpressionNode::VariableReference(VariableReference { variable, ref_kind }),
        )
    }

    pub fn offset(&self) -> Offset {
        self.offset
    }

    pub fn ty(&self) -> &TypeRef {
        &self.ty
    }

    pub fn node(&self) -> &ExpressionNode {
        &self.node
    }

    pub fn into_node(self) -> ExpressionNode {
        self.node
    }

    /// The same expression reported at a different offset. Children keep theirs.
    pub fn with_offset(self, offset: Offset) -> Self {
        Self { offset, ..self }
    }

    pub fn kind(&self) -> ExpressionKind {
        match &self.node {
            ExpressionNode::IntLiteral(_) => ExpressionKind::IntLiteral,
            ExpressionNode::FloatLiteral(_) => ExpressionKind::FloatLiteral,
            ExpressionNode::BoolLiteral(_) => ExpressionKind::BoolLiteral,
            ExpressionNode::Constructor(_) => ExpressionKind::Constructor,
            ExpressionNode::Prefix(_) => ExpressionKind::Prefix,
            ExpressionNode::VariableReference(_) => ExpressionKind::VariableReference,
        }
    }

    /// Whether the value is known without running the program.
    pub fn is_compile_time_constant(&self) -> bool {
        match &self.node {
            ExpressionNode::IntLiteral(_)
            | ExpressionNode::FloatLiteral(_)
            | ExpressionNode::BoolLiteral(_) => true,
            ExpressionNode::Constructor(arguments) => {
                arguments.iter().all(Expression::is_compile_time_constant)
            }
            ExpressionNode::Prefix(prefix) => prefix.is_compile_time_constant(),
            ExpressionNode::VariableReference(_) => false,
        }
    }

    pub fn as_bool_literal(&self) -> Option<bool> {
        match self.node {
            ExpressionNode::BoolLiteral(value) => Some(value),
            _ => None,
        }
    }

    /// Arguments of a constructor.
    ///
    /// # Panics
    ///
    /// If the expression is not a constructor; check [`Expression::kind`] first.
    pub fn as_constructor(&self) -> &[Expression] {
        match &self.node {
            ExpressionNode::Constructor(arguments) => arguments,
            _ => panic!("expected constructor, found {}", self.kind()),
        }
    }

    /// # Panics
    ///
    /// If the expression is not a prefix expression.
    pub fn as_prefix(&self) -> &PrefixExpression {
        match &self.node {
            ExpressionNode::Prefix(prefix) => prefix,
            _ => panic!("expected prefix, found {}", self.kind()),
        }
    }

    /// Commit the expression to `target`.
    ///
    /// Literals are rebuilt with the target type; anything else is wrapped in
    /// a one-argument constructor.
    pub fn coerce(self, target: &TypeRef) -> Expression {
        if self.ty == *target {
            return self;
        }
        let offset = self.offset;
        match self.node {
            ExpressionNode::IntLiteral(value) if target.is_integer() => {
                Expression::int_literal(offset, value, target.clone())
            }
            ExpressionNode::IntLiteral(value) if target.is_float() => {
                Expression::float_literal(offset, value as f64, target.clone())
            }
            ExpressionNode::FloatLiteral(value) if target.is_float() => {
                Expression::float_literal(offset, value, target.clone())
            }
            node => Expression::constructor(
                offset,
                target.clone(),
                vec![Expression::new(offset, self.ty, node)],
            ),
        }
    }

    /// Canonical text form, used in diagnostics and golden output.
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.node {
            ExpressionNode::IntLiteral(value) => write!(f, "{value}"),
            ExpressionNode::FloatLiteral(value) => write!(f, "{value:?}"),
            ExpressionNode::BoolLiteral(value) => write!(f, "{value}"),
            ExpressionNode::Constructor(arguments) => {
                write!(f, "{}(", self.ty.display_name())?;
                for (i, argument) in arguments.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{argument}")?;
                }
                f.write_str(")")
            }
            ExpressionNode::Prefix(prefix) => write!(f, "{prefix}"),
            ExpressionNode::VariableReference(reference) => {
                f.write_str(reference.variable.name())
            }
        }
    }
}
