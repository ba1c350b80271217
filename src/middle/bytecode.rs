//! Linear stack program produced by code generation

use crate::frontend::lexer::tokens::Operator;
use crate::frontend::parser::ast::UnaryOp;
use serde::Serialize;
use std::fmt;

/// One step of the stack program
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Action {
    PushNumber { value: f64, offset: usize },
    PushIdentifier { name: String, offset: usize },
    ApplyUnary { op: UnaryOp, offset: usize },
    ApplyBinary { op: Operator, offset: usize },
}

impl Action {
    /// Source offset of the node this action was generated from
    pub fn offset(&self) -> usize {
        match self {
            Action::PushNumber { offset, .. }
            | Action::PushIdentifier { offset, .. }
            | Action::ApplyUnary { offset, .. }
            | Action::ApplyBinary { offset, .. } => *offset,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Action::PushNumber { value, .. } => write!(f, "push {}", value),
            Action::PushIdentifier { name, .. } => write!(f, "load {}", name),
            Action::ApplyUnary { op, .. } => write!(f, "apply {}", op),
            Action::ApplyBinary { op, .. } => write!(f, "apply {}", op),
        }
    }
}

/// Actions in post-order: operands always precede their operator
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Program {
    pub actions: Vec<Action>,
}

impl Program {
    pub fn new(actions: Vec<Action>) -> Self {
        Self { actions }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Action> {
        self.actions.iter()
    }
}

impl fmt::Display for Program {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        for (i, action) in self.actions.iter().enumerate() {
            writeln!(f, "[{:3}] {}", i, action)?;
        }
        Ok(())
    }
}
