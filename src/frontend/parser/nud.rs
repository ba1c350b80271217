//! Primary expression parsing (nud - null denotation)

use super::ast::*;
use super::state::*;
use super::super::lexer::tokens::*;
use super::{ParseError, ParseResult, MAX_NESTING_DEPTH};
use crate::util::span::Location;

impl<'a> ParserState<'a> {
    /// Parse one primary, consuming its leading token
    ///
    /// Operands of unary `+`/`-` are parsed with chaining suppressed, so the
    /// unary operator applies to that single operand only.
    pub(crate) fn parse_primary(&mut self) -> ParseResult<Node> {
        let Some(token) = self.current().filter(|t| !t.is_eof()) else {
            return Err(ParseError::UnexpectedToken {
                location: Location::Eof,
            });
        };
        let offset = token.offset;

        match &token.kind {
            TokenKind::Number(value) => {
                self.bump();
                Ok(Node::number(*value, offset))
            }
            TokenKind::Identifier(name) => {
                self.bump();
                Ok(Node::identifier(name.clone(), offset))
            }
            TokenKind::ParenOpen => {
                self.bump();
                let inner = self.parse_expr(false)?;
                self.expect_paren_close()?;
                Ok(inner)
            }
            TokenKind::Operator(Operator::Add) => {
                self.bump();
                self.parse_expr(true)
            }
            TokenKind::Operator(Operator::Sub) => {
                self.bump();
                let operand = self.parse_expr(true)?;
                if operand.height() >= MAX_NESTING_DEPTH {
                    return Err(ParseError::NestingTooDeep {
                        location: Location::Offset(offset),
                    });
                }
                Ok(Node::unary(UnaryOp::Negate, operand, offset))
            }
            TokenKind::Operator(_) | TokenKind::ParenClose | TokenKind::Eof => {
                Err(ParseError::UnexpectedToken {
                    location: Location::Offset(offset),
                })
            }
        }
    }
}
