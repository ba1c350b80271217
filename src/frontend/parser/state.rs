//! Parser state and token stream management

use super::super::lexer::tokens::*;
use super::{ParseError, MAX_NESTING_DEPTH};
use crate::util::span::Location;

/// Cursor over one token sequence
///
/// Reading past the end behaves as if an `Eof` token were present, so hand-built
/// token slices without a terminator still fail cleanly.
#[derive(Debug)]
pub struct ParserState<'a> {
    /// Token stream
    tokens: &'a [Token],
    /// Current position in token stream
    pos: usize,
    /// Active `parse_expr` calls
    depth: usize,
}

impl<'a> ParserState<'a> {
    /// Create a new parser state
    #[inline]
    pub fn new(tokens: &'a [Token]) -> Self {
        Self {
            tokens,
            pos: 0,
            depth: 0,
        }
    }

    /// Current cursor position
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Check if at end of token stream
    #[inline]
    pub fn at_end(&self) -> bool {
        self.current().map(Token::is_eof).unwrap_or(true)
    }

    /// Get current token
    #[inline]
    pub fn current(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    /// Current token if it is an operator
    #[inline]
    pub fn current_operator(&self) -> Option<(Operator, usize)> {
        match self.current() {
            Some(Token {
                kind: TokenKind::Operator(op),
                offset,
            }) => Some((*op, *offset)),
            _ => None,
        }
    }

    /// Advance to next token; never moves past `Eof`
    #[inline]
    pub fn bump(&mut self) {
        if !self.at_end() {
            self.pos += 1;
        }
    }

    /// Location of the current token for diagnostics
    #[inline]
    pub fn location(&self) -> Location {
        match self.current() {
            Some(token) if !token.is_eof() => Location::Offset(token.offset),
            _ => Location::Eof,
        }
    }

    /// Enter one level of expression nesting
    pub(crate) fn enter(&mut self) -> Result<(), ParseError> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(ParseError::NestingTooDeep {
                location: self.location(),
            });
        }
        self.depth += 1;
        Ok(())
    }

    /// Leave a level entered with [`ParserState::enter`]
    pub(crate) fn leave(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Consume a `)` or report a missing closing parenthesis
    pub fn expect_paren_close(&mut self) -> Result<(), ParseError> {
        match self.current() {
            Some(Token {
                kind: TokenKind::ParenClose,
                ..
            }) => {
                self.bump();
                Ok(())
            }
            _ => Err(ParseError::ExpectedClosingParen {
                location: self.location(),
            }),
        }
    }
}
