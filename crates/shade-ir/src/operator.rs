//! Lexical operators as seen by IR construction.

use std::fmt;

/// Which operator token was parsed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OperatorKind {
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    LogicalNot,
    LogicalAnd,
    LogicalOr,
    BitwiseNot,
    BitwiseAnd,
    BitwiseOr,
    PlusPlus,
    MinusMinus,
    Eq,
    Neq,
    Lt,
    Gt,
}

/// An operator value. Stateless; copied freely.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Operator {
    kind: OperatorKind,
}

impl Operator {
    pub const fn new(kind: OperatorKind) -> Self {
        Self { kind }
    }

    pub fn kind(self) -> OperatorKind {
        self.kind
    }

    pub fn operator_name(self) -> &'static str {
        match self.kind {
            OperatorKind::Plus => "+",
            OperatorKind::Minus => "-",
            OperatorKind::Star => "*",
            OperatorKind::Slash => "/",
            OperatorKind::Percent => "%",
            OperatorKind::LogicalNot => "!",
            OperatorKind::LogicalAnd => "&&",
            OperatorKind::LogicalOr => "||",
            OperatorKind::BitwiseNot => "~",
            OperatorKind::BitwiseAnd => "&",
            OperatorKind::BitwiseOr => "|",
            OperatorKind::PlusPlus => "++",
            OperatorKind::MinusMinus => "--",
            OperatorKind::Eq => "==",
            OperatorKind::Neq => "!=",
            OperatorKind::Lt => "<",
            OperatorKind::Gt => ">",
        }
    }
}

impl From<OperatorKind> for Operator {
    fn from(kind: OperatorKind) -> Self {
        Self::new(kind)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.operator_name())
    }
}
