//! Abstract Syntax Tree types

use crate::frontend::lexer::tokens::Operator;
use serde::Serialize;
use std::fmt;

/// Unary operator tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum UnaryOp {
    Negate,
}

impl fmt::Display for UnaryOp {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            UnaryOp::Negate => write!(f, "neg"),
        }
    }
}

/// Expression node
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Node {
    Number {
        value: f64,
        offset: usize,
    },
    Identifier {
        name: String,
        offset: usize,
    },
    Unary {
        op: UnaryOp,
        operand: Box<Node>,
        offset: usize,
    },
    Binary {
        op: Operator,
        left: Box<Node>,
        right: Box<Node>,
        offset: usize,
    },
}

impl Node {
    #[inline]
    pub fn number(
        value: f64,
        offset: usize,
    ) -> Self {
        Node::Number { value, offset }
    }

    #[inline]
    pub fn identifier(
        name: impl Into<String>,
        offset: usize,
    ) -> Self {
        Node::Identifier {
            name: name.into(),
            offset,
        }
    }

    #[inline]
    pub fn unary(
        op: UnaryOp,
        operand: Node,
        offset: usize,
    ) -> Self {
        Node::Unary {
            op,
            operand: Box::new(operand),
            offset,
        }
    }

    #[inline]
    pub fn binary(
        op: Operator,
        left: Node,
        right: Node,
        offset: usize,
    ) -> Self {
        Node::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
            offset,
        }
    }

    /// Source offset for diagnostics
    pub fn offset(&self) -> usize {
        match self {
            Node::Number { offset, .. }
            | Node::Identifier { offset, .. }
            | Node::Unary { offset, .. }
            | Node::Binary { offset, .. } => *offset,
        }
    }

    /// Number of nodes on the longest root-to-leaf path
    pub fn height(&self) -> usize {
        match self {
            Node::Number { .. } | Node::Identifier { .. } => 1,
            Node::Unary { operand, .. } => operand.height() + 1,
            Node::Binary { left, right, .. } => left.height().max(right.height()) + 1,
        }
    }

    /// Kind name, used in diagnostics and dumps
    pub fn kind_name(&self) -> &'static str {
        match self {
            Node::Number { .. } => "NumberLiteral",
            Node::Identifier { .. } => "Identifier",
            Node::Unary { .. } => "UnaryOp",
            Node::Binary { .. } => "BinaryOp",
        }
    }
}

/// Fully parenthesized infix form
impl fmt::Display for Node {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Node::Number { value, .. } => write!(f, "{}", value),
            Node::Identifier { name, .. } => write!(f, "{}", name),
            Node::Unary {
                op: UnaryOp::Negate,
                operand,
                ..
            } => write!(f, "(-{})", operand),
            Node::Binary {
                op, left, right, ..
            } => write!(f, "({} {} {})", left, op, right),
        }
    }
}
