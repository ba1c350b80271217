//! Frontend compilation pipeline
//!
//! This module contains the lexer and parser, and drives code generation.
//! The frontend transforms source text into a linear stack program.

use crate::middle::bytecode::Program;
use crate::middle::codegen::{self, CodegenError};
use crate::util::config::Stage;
use crate::util::diagnostic::{Diagnostic, ToDiagnostic};
use lexer::Token;
use parser::ast::Node;
use thiserror::Error;
use tracing::debug;

pub mod lexer;
pub mod parser;

/// Compiler context
///
/// Stateless between calls: every compilation builds its own lexer, parser
/// and codegen state.
#[derive(Debug, Default)]
pub struct Compiler {}

impl Compiler {
    /// Create a new compiler
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Compile source text to a stack program
    pub fn compile(
        &mut self,
        source: &str,
    ) -> Result<Program, CompileError> {
        self.compile_with(source, |_| {})
    }

    /// Compile source text, handing each intermediate result to `inspect`
    /// as soon as its phase succeeds
    pub fn compile_with<F>(
        &mut self,
        source: &str,
        mut inspect: F,
    ) -> Result<Program, CompileError>
    where
        F: FnMut(StageOutput<'_>),
    {
        debug!("Compiling source code ({} bytes)", source.len());
        // Lexical analysis
        let tokens = lexer::tokenize(source)?;
        debug!("Tokenized into {} tokens", tokens.len());
        inspect(StageOutput::Tokens(&tokens));

        // Parsing
        let ast = parser::parse(&tokens)?;
        debug!("Parsing successful: {}", ast);
        inspect(StageOutput::Ast(&ast));

        // Code generation
        let program = codegen::compile(&ast)?;
        debug!("Compiled into {} actions", program.len());
        inspect(StageOutput::Actions(&program));

        Ok(program)
    }
}

/// Result of one compilation phase
#[derive(Debug, Clone, Copy)]
pub enum StageOutput<'a> {
    Tokens(&'a [Token]),
    Ast(&'a Node),
    Actions(&'a Program),
}

impl StageOutput<'_> {
    pub fn stage(&self) -> Stage {
        match self {
            StageOutput::Tokens(_) => Stage::Tokens,
            StageOutput::Ast(_) => Stage::Ast,
            StageOutput::Actions(_) => Stage::Actions,
        }
    }
}

/// Compilation errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CompileError {
    #[error("Lexical error: {0}")]
    LexError(#[from] lexer::LexError),

    #[error("Parse error: {0}")]
    ParseError(#[from] parser::ParseError),

    #[error("Codegen error: {0}")]
    CodegenError(#[from] CodegenError),
}

impl ToDiagnostic for CompileError {
    fn to_diagnostic(&self) -> Diagnostic {
        match self {
            CompileError::LexError(e) => e.to_diagnostic(),
            CompileError::ParseError(e) => e.to_diagnostic(),
            CompileError::CodegenError(e) => e.to_diagnostic(),
        }
    }
}
