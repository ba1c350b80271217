//! Arithmetic applied by the VM

use crate::frontend::lexer::tokens::Operator;
use crate::frontend::parser::ast::UnaryOp;

/// Apply a unary operator
#[inline]
pub fn apply_unary(
    op: UnaryOp,
    operand: f64,
) -> f64 {
    match op {
        UnaryOp::Negate => -operand,
    }
}

/// Apply a binary operator; `None` for codes without arithmetic meaning
///
/// `/`, `%` and `div` with a zero right operand yield exactly 0.
pub fn apply_binary(
    op: Operator,
    left: f64,
    right: f64,
) -> Option<f64> {
    let value = match op {
        Operator::Add => left + right,
        Operator::Sub => left - right,
        Operator::Mul => left * right,
        Operator::FDiv | Operator::FMod | Operator::IDiv if right == 0.0 => 0.0,
        Operator::FDiv => left / right,
        Operator::FMod => left % right,
        Operator::IDiv => (left / right).trunc(),
        Operator::MaxP => return None,
    };
    Some(value)
}
