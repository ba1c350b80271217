//! 代码生成器
//!
//! 将表达式树线性化为栈式动作序列。
//! 后序遍历：先生成操作数，再生成消费它们的运算符。

use crate::frontend::lexer::tokens::Operator;
use crate::frontend::parser::ast::Node;
use crate::middle::bytecode::{Action, Program};
use crate::util::diagnostic::{Diagnostic, ToDiagnostic};
use crate::util::span::Location;
use thiserror::Error;
use tracing::debug;

/// Code generation errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CodegenError {
    /// A node the parser should never have produced
    #[error("cannot compile node type {kind} at {location}")]
    UnsupportedNode {
        kind: &'static str,
        location: Location,
    },
}

impl ToDiagnostic for CodegenError {
    fn to_diagnostic(&self) -> Diagnostic {
        match self {
            CodegenError::UnsupportedNode { kind, location } => {
                Diagnostic::new(format!("cannot compile node type {}", kind), *location)
            }
        }
    }
}

/// 代码生成器
///
/// Owns the growing action list for one compilation.
#[derive(Debug, Default)]
pub struct CodegenContext {
    actions: Vec<Action>,
}

impl CodegenContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Linearize `root` into a program
    pub fn generate(
        mut self,
        root: &Node,
    ) -> Result<Program, CodegenError> {
        self.emit_node(root)?;
        debug!("Generated {} actions", self.actions.len());
        Ok(Program::new(self.actions))
    }

    fn emit_node(
        &mut self,
        node: &Node,
    ) -> Result<(), CodegenError> {
        match node {
            Node::Number { value, offset } => {
                self.actions.push(Action::PushNumber {
                    value: *value,
                    offset: *offset,
                });
            }
            Node::Identifier { name, offset } => {
                self.actions.push(Action::PushIdentifier {
                    name: name.clone(),
                    offset: *offset,
                });
            }
            Node::Unary {
                op,
                operand,
                offset,
            } => {
                self.emit_node(operand)?;
                self.actions.push(Action::ApplyUnary {
                    op: *op,
                    offset: *offset,
                });
            }
            Node::Binary {
                op,
                left,
                right,
                offset,
            } => {
                // The bound sentinel has no arithmetic meaning.
                if op.tier() >= Operator::max_tier() {
                    return Err(CodegenError::UnsupportedNode {
                        kind: node.kind_name(),
                        location: Location::Offset(*offset),
                    });
                }
                self.emit_node(left)?;
                self.emit_node(right)?;
                self.actions.push(Action::ApplyBinary {
                    op: *op,
                    offset: *offset,
                });
            }
        }
        Ok(())
    }
}

/// Compile an expression tree into a stack program
pub fn compile(root: &Node) -> Result<Program, CodegenError> {
    CodegenContext::new().generate(root)
}

#[cfg(test)]
mod tests;
