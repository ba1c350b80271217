//! VM errors

use crate::frontend::lexer::tokens::Operator;
use crate::util::diagnostic::{Diagnostic, ToDiagnostic};
use crate::util::span::Location;
use thiserror::Error;

/// VM result
pub type VMResult<T> = Result<T, VMError>;

/// VM errors
///
/// Division by zero is not an error: those operators yield 0.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum VMError {
    #[error("unimplemented feature: {feature} at {location}")]
    Unimplemented { feature: String, location: Location },

    #[error("can't apply operator {op} at {location}")]
    InvalidOperator { op: Operator, location: Location },

    #[error("stack underflow at {location}")]
    StackUnderflow { location: Location },

    #[error("unbalanced stack: {depth} values left at end of program")]
    UnbalancedStack { depth: usize },
}

impl VMError {
    pub fn location(&self) -> Location {
        match self {
            VMError::Unimplemented { location, .. }
            | VMError::InvalidOperator { location, .. }
            | VMError::StackUnderflow { location } => *location,
            VMError::UnbalancedStack { .. } => Location::Eof,
        }
    }

    /// Message without the location suffix
    pub fn message(&self) -> String {
        match self {
            VMError::Unimplemented { feature, .. } => format!("unimplemented feature: {}", feature),
            VMError::InvalidOperator { op, .. } => format!("can't apply operator {}", op),
            VMError::StackUnderflow { .. } => "stack underflow".to_string(),
            VMError::UnbalancedStack { depth } => {
                format!("unbalanced stack: {} values left", depth)
            }
        }
    }
}

impl ToDiagnostic for VMError {
    fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::new(self.message(), self.location())
    }
}
