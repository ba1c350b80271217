//! Token types

use serde::Serialize;
use std::fmt;

/// Binary operator code
///
/// The high nibble of the discriminant is the precedence tier (0 binds
/// tightest), the low nibble tells operators of one tier apart. `MaxP` is the
/// sentinel one tier above the loosest operator; it bounds precedence folding
/// and is never produced by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[repr(u8)]
pub enum Operator {
    Mul = 0x01,
    FDiv = 0x02,
    FMod = 0x03,
    IDiv = 0x04,
    Add = 0x10,
    Sub = 0x11,
    MaxP = 0x20,
}

impl Operator {
    /// Raw operator code
    #[inline]
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Precedence tier (high nibble)
    #[inline]
    pub fn tier(self) -> u8 {
        self.code() >> 4
    }

    /// Tier of the `MaxP` sentinel; folding runs over `0..max_tier()`
    #[inline]
    pub fn max_tier() -> u8 {
        Operator::MaxP.tier()
    }

    /// Source spelling
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Mul => "*",
            Operator::FDiv => "/",
            Operator::FMod => "%",
            Operator::IDiv => "div",
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::MaxP => "<maxp>",
        }
    }
}

impl TryFrom<u8> for Operator {
    type Error = u8;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0x01 => Ok(Operator::Mul),
            0x02 => Ok(Operator::FDiv),
            0x03 => Ok(Operator::FMod),
            0x04 => Ok(Operator::IDiv),
            0x10 => Ok(Operator::Add),
            0x11 => Ok(Operator::Sub),
            0x20 => Ok(Operator::MaxP),
            other => Err(other),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Token kind
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum TokenKind {
    /// End of input, always the last token
    Eof,
    Operator(Operator),
    ParenOpen,
    ParenClose,
    /// Digit run, parsed as a float
    Number(f64),
    Identifier(String),
}

impl fmt::Display for TokenKind {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            TokenKind::Eof => write!(f, "Eof"),
            TokenKind::Operator(op) => write!(f, "Operator({})", op),
            TokenKind::ParenOpen => write!(f, "ParenOpen"),
            TokenKind::ParenClose => write!(f, "ParenClose"),
            TokenKind::Number(value) => write!(f, "Number({})", value),
            TokenKind::Identifier(name) => write!(f, "Identifier({})", name),
        }
    }
}

/// Token
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    /// Byte offset of the first character
    pub offset: usize,
}

impl Token {
    #[inline]
    pub fn new(
        kind: TokenKind,
        offset: usize,
    ) -> Self {
        Self { kind, offset }
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        matches!(self.kind, TokenKind::Eof)
    }
}

impl fmt::Display for Token {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{} @{}", self.kind, self.offset)
    }
}
