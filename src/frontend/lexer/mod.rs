//! Lexer module

pub mod tokens;

pub use tokens::*;

pub use tokenizer::tokenize;

use crate::util::diagnostic::{Diagnostic, ToDiagnostic};

/// Lexer error
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LexError {
    #[error("unexpected character `{ch}` at position {offset}")]
    UnexpectedChar { ch: char, offset: usize },
}

impl LexError {
    /// Byte offset of the offending input
    pub fn offset(&self) -> usize {
        match self {
            LexError::UnexpectedChar { offset, .. } => *offset,
        }
    }
}

impl ToDiagnostic for LexError {
    fn to_diagnostic(&self) -> Diagnostic {
        match self {
            LexError::UnexpectedChar { ch, offset } => {
                Diagnostic::at(format!("unexpected character `{}`", ch), *offset)
            }
        }
    }
}

/// Tokenize source code
mod tokenizer {
    use super::*;
    use std::iter::Peekable;
    use std::str::Chars;

    /// Split `source` into tokens terminated by a single `Eof`.
    ///
    /// Stops at the first bad character; no partial token list is returned.
    pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
        let mut lexer = Lexer::new(source);
        let mut tokens = Vec::new();

        while let Some(token) = lexer.next_token()? {
            tokens.push(token);
        }

        tokens.push(Token::new(TokenKind::Eof, lexer.offset));
        Ok(tokens)
    }

    struct Lexer<'a> {
        chars: Peekable<Chars<'a>>,
        offset: usize,
        start_offset: usize,
    }

    impl<'a> Lexer<'a> {
        fn new(source: &'a str) -> Self {
            Self {
                chars: source.chars().peekable(),
                offset: 0,
                start_offset: 0,
            }
        }

        fn advance(&mut self) -> Option<char> {
            let c = self.chars.next()?;
            self.offset += c.len_utf8();
            Some(c)
        }

        fn peek(&mut self) -> Option<&char> {
            self.chars.peek()
        }

        fn skip_whitespace(&mut self) {
            while let Some(&c) = self.peek() {
                match c {
                    ' ' | '\t' | '\r' | '\n' => {
                        self.advance();
                    }
                    _ => break,
                }
            }
        }

        fn make_token(
            &self,
            kind: TokenKind,
        ) -> Token {
            Token::new(kind, self.start_offset)
        }

        fn next_token(&mut self) -> Result<Option<Token>, LexError> {
            self.skip_whitespace();

            self.start_offset = self.offset;
            let Some(c) = self.advance() else {
                return Ok(None);
            };

            let token = match c {
                '(' => self.make_token(TokenKind::ParenOpen),
                ')' => self.make_token(TokenKind::ParenClose),
                '+' => self.make_token(TokenKind::Operator(Operator::Add)),
                '-' => self.make_token(TokenKind::Operator(Operator::Sub)),
                '*' => self.make_token(TokenKind::Operator(Operator::Mul)),
                '/' => self.make_token(TokenKind::Operator(Operator::FDiv)),
                '%' => self.make_token(TokenKind::Operator(Operator::FMod)),
                c if c.is_ascii_digit() => self.scan_number(c),
                c if is_identifier_start(c) => self.scan_identifier(c),
                c => {
                    return Err(LexError::UnexpectedChar {
                        ch: c,
                        offset: self.start_offset,
                    })
                }
            };

            Ok(Some(token))
        }

        fn scan_identifier(
            &mut self,
            first_char: char,
        ) -> Token {
            let mut value = String::new();
            value.push(first_char);

            while let Some(&c) = self.peek() {
                if is_identifier_char(c) {
                    value.push(c);
                    self.advance();
                } else {
                    break;
                }
            }

            match keyword_operator(&value) {
                Some(op) => self.make_token(TokenKind::Operator(op)),
                None => self.make_token(TokenKind::Identifier(value)),
            }
        }

        fn scan_number(
            &mut self,
            first_char: char,
        ) -> Token {
            let mut value = String::new();
            value.push(first_char);

            while let Some(&c) = self.peek() {
                if c.is_ascii_digit() {
                    value.push(c);
                    self.advance();
                } else {
                    break;
                }
            }

            // A digit run always parses; too many digits round to infinity.
            let n = value.parse::<f64>().unwrap_or(f64::INFINITY);
            self.make_token(TokenKind::Number(n))
        }
    }

    /// Reserved words that spell operators
    fn keyword_operator(word: &str) -> Option<Operator> {
        match word {
            "mod" => Some(Operator::FMod),
            "div" => Some(Operator::IDiv),
            _ => None,
        }
    }

    fn is_identifier_start(c: char) -> bool {
        c.is_ascii_alphabetic() || c == '_'
    }

    fn is_identifier_char(c: char) -> bool {
        c.is_ascii_alphanumeric() || c == '_'
    }
}

#[cfg(test)]
mod tests;
