//! Code generation
//!
//! This module handles the transformation from AST to a linear stack program.

pub mod bytecode;
pub mod codegen;

pub use bytecode::{Action, Program};
pub use codegen::{compile, CodegenContext, CodegenError};
