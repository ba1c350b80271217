//! txr - arithmetic expression compiler and evaluator
//!
//! Source text goes through four phases: tokenizer, parser, code generator
//! and a stack VM. Each phase fails fast with a single diagnostic.
//!
//! # Example
//!
//! ```
//! assert_eq!(txr::evaluate("(10 + 2) * 4").unwrap(), 48.0);
//! assert_eq!(txr::evaluate("-7 div 2").unwrap(), -3.0);
//! assert_eq!(txr::evaluate("5 / 0").unwrap(), 0.0);
//! ```

#![warn(rust_2018_idioms)]

// Public modules
pub mod frontend;
pub mod middle;
pub mod vm;

// Utility modules
pub mod util;

// Re-exports
pub use anyhow::{Context, Result};
pub use frontend::{CompileError, Compiler, StageOutput};
pub use middle::bytecode::{Action, Program};
pub use util::diagnostic::{Diagnostic, ToDiagnostic};
pub use vm::{VMConfig, VMError, VM};

use thiserror::Error;
use tracing::debug;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Program name
pub const NAME: &str = "txr";

/// Any fault raised by the pipeline
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TxrError {
    #[error(transparent)]
    Compile(#[from] CompileError),

    #[error("Runtime error: {0}")]
    Runtime(#[from] VMError),
}

impl TxrError {
    /// Whether the fault was raised before evaluation started
    pub fn is_compile_fault(&self) -> bool {
        matches!(self, TxrError::Compile(_))
    }
}

impl ToDiagnostic for TxrError {
    fn to_diagnostic(&self) -> Diagnostic {
        match self {
            TxrError::Compile(e) => e.to_diagnostic(),
            TxrError::Runtime(e) => e.to_diagnostic(),
        }
    }
}

/// Pipeline context holding the diagnostic slot
///
/// The slot keeps only the most recent fault; a successful [`Txr::evaluate`]
/// clears it. Contexts share nothing with each other.
#[derive(Debug, Default)]
pub struct Txr {
    config: VMConfig,
    error: Option<Diagnostic>,
}

impl Txr {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: VMConfig) -> Self {
        Self {
            config,
            error: None,
        }
    }

    /// Most recent diagnostic, if the last run failed
    pub fn error(&self) -> Option<&Diagnostic> {
        self.error.as_ref()
    }

    /// Compile source text without running it
    pub fn compile(
        &mut self,
        source: &str,
    ) -> std::result::Result<Program, TxrError> {
        self.compile_with(source, |_| {})
    }

    /// Compile source text, handing each intermediate stage to `inspect`
    pub fn compile_with<F>(
        &mut self,
        source: &str,
        inspect: F,
    ) -> std::result::Result<Program, TxrError>
    where
        F: FnMut(StageOutput<'_>),
    {
        Compiler::new()
            .compile_with(source, inspect)
            .map_err(|e| self.record(e.into()))
    }

    /// Run a compiled program
    pub fn execute(
        &mut self,
        program: &Program,
    ) -> std::result::Result<f64, TxrError> {
        VM::new_with_config(self.config.clone())
            .execute(program)
            .map_err(|e| self.record(e.into()))
    }

    /// Compile and run source text
    pub fn evaluate(
        &mut self,
        source: &str,
    ) -> std::result::Result<f64, TxrError> {
        let program = self.compile(source)?;
        let value = self.execute(&program)?;
        self.error = None;
        debug!("Evaluated to {}", value);
        Ok(value)
    }

    fn record(
        &mut self,
        error: TxrError,
    ) -> TxrError {
        self.error = Some(error.to_diagnostic());
        error
    }
}

/// Evaluate source text with a fresh context
pub fn evaluate(source: &str) -> std::result::Result<f64, TxrError> {
    Txr::new().evaluate(source)
}
