//! Operator-chain resolution
//!
//! Instead of recursing per precedence level, the parser collects a flat run
//! `primary (op primary)*` and folds it tier by tier:
//!
//! ```text
//! 10 - 2 * 4 - 3
//! tier 0: [10, 2, 4, 3] [-, *, -]  ->  [10, (2 * 4), 3] [-, -]
//! tier 1: [10, (2 * 4), 3] [-, -]  ->  [(10 - (2 * 4)), 3] [-]
//!                                  ->  [((10 - (2 * 4)) - 3)] []
//! ```
//!
//! Folding is left to right within a tier, so same-tier operators associate
//! left. Every fold shifts the remaining run, so the whole fold is quadratic
//! in the run length, which is fine for the short expressions this parser
//! sees. A run is abandoned once the folded tree would exceed
//! [`MAX_NESTING_DEPTH`].

use super::ast::*;
use super::state::*;
use super::super::lexer::tokens::*;
use super::{ParseError, ParseResult, MAX_NESTING_DEPTH};
use crate::util::span::Location;
use tracing::trace;

impl<'a> ParserState<'a> {
    /// Parse a primary and, unless `suppress_chaining` is set, the operator
    /// run that follows it
    pub fn parse_expr(
        &mut self,
        suppress_chaining: bool,
    ) -> ParseResult<Node> {
        self.enter()?;
        let result = self.parse_run(suppress_chaining);
        self.leave();
        result
    }

    fn parse_run(
        &mut self,
        suppress_chaining: bool,
    ) -> ParseResult<Node> {
        let first = self.parse_primary()?;
        if suppress_chaining || self.current_operator().is_none() {
            return Ok(first);
        }

        let mut operands = vec![first];
        let mut operators = Vec::new();
        while let Some(op) = self.current_operator() {
            self.bump();
            operators.push(op);
            operands.push(self.parse_expr(true)?);
        }
        trace!("Collected operator run of {} operators", operators.len());

        fold_run(operands, operators)
    }
}

/// Fold a collected run into a single tree, tightest tier first
///
/// `operands.len()` must be `operators.len() + 1`.
pub(crate) fn fold_run(
    mut operands: Vec<Node>,
    mut operators: Vec<(Operator, usize)>,
) -> ParseResult<Node> {
    debug_assert_eq!(operands.len(), operators.len() + 1);
    let mut heights: Vec<usize> = operands.iter().map(Node::height).collect();

    for tier in 0..Operator::max_tier() {
        let mut i = 0;
        while i < operators.len() {
            let (op, offset) = operators[i];
            if op.tier() != tier {
                i += 1;
                continue;
            }
            let height = heights[i].max(heights[i + 1]) + 1;
            if height > MAX_NESTING_DEPTH {
                return Err(ParseError::NestingTooDeep {
                    location: Location::Offset(offset),
                });
            }
            let right = operands.remove(i + 1);
            let left = operands.remove(i);
            operands.insert(i, Node::binary(op, left, right, offset));
            heights.remove(i + 1);
            heights[i] = height;
            operators.remove(i);
        }
    }

    // Only a `MaxP` carried in from a hand-built token stream survives folding.
    if let Some(&(_, offset)) = operators.first() {
        return Err(ParseError::UnexpectedToken {
            location: Location::Offset(offset),
        });
    }

    Ok(operands.swap_remove(0))
}
