//! Parser module
//!
//! Recursive-descent parser for arithmetic expressions. Primaries are parsed
//! recursively; binary operators are resolved by folding a flat operator run
//! tier by tier (see [`expr`]).

pub mod ast;
mod expr;
mod nud;
mod state;

pub use state::ParserState;

use crate::frontend::lexer::tokens::*;
use crate::util::diagnostic::{Diagnostic, ToDiagnostic};
use crate::util::span::Location;
use ast::*;

/// Parser result
pub type ParseResult<T> = Result<T, ParseError>;

/// Deepest accepted nesting, counting both recursion into parentheses and
/// unary operands and the height of the folded tree
///
/// Keeps every later recursive walk (codegen, `Display`, drop) well inside
/// the thread stack.
pub const MAX_NESTING_DEPTH: usize = 256;

/// Parse tokens into a single expression tree
///
/// Fails with [`ParseError::TrailingData`] if tokens remain before `Eof`.
///
/// # Example
/// ```
/// use txr::frontend::lexer::tokenize;
/// use txr::frontend::parser::parse;
///
/// let tokens = tokenize("(10 + 2) * 4").unwrap();
/// let root = parse(&tokens).unwrap();
/// assert_eq!(root.to_string(), "((10 + 2) * 4)");
/// ```
pub fn parse(tokens: &[Token]) -> ParseResult<Node> {
    let mut state = ParserState::new(tokens);
    let root = state.parse_expr(false)?;

    if !state.at_end() {
        return Err(ParseError::TrailingData {
            location: state.location(),
        });
    }

    Ok(root)
}

/// Parse one expression starting at the first token
///
/// Returns the tree and the cursor position just past it; does not require
/// the expression to consume the whole stream.
pub fn parse_expression(tokens: &[Token]) -> ParseResult<(Node, usize)> {
    let mut state = ParserState::new(tokens);
    let root = state.parse_expr(false)?;
    Ok((root, state.position()))
}

/// Parse error types
#[derive(Debug, thiserror::Error, Clone, PartialEq)]
pub enum ParseError {
    #[error("unexpected token at {location}")]
    UnexpectedToken { location: Location },

    #[error("expected a closing parenthesis at {location}")]
    ExpectedClosingParen { location: Location },

    #[error("trailing data at {location}")]
    TrailingData { location: Location },

    #[error("expression nested too deeply at {location}")]
    NestingTooDeep { location: Location },
}

impl ParseError {
    pub fn location(&self) -> Location {
        match self {
            ParseError::UnexpectedToken { location }
            | ParseError::ExpectedClosingParen { location }
            | ParseError::TrailingData { location }
            | ParseError::NestingTooDeep { location } => *location,
        }
    }

    /// Message without the location suffix
    pub fn message(&self) -> &'static str {
        match self {
            ParseError::UnexpectedToken { .. } => "unexpected token",
            ParseError::ExpectedClosingParen { .. } => "expected a closing parenthesis",
            ParseError::TrailingData { .. } => "trailing data",
            ParseError::NestingTooDeep { .. } => "expression nested too deeply",
        }
    }
}

impl ToDiagnostic for ParseError {
    fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::new(self.message(), self.location())
    }
}
