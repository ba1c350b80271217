//! Virtual Machine
//!
//! This module contains the stack-based action interpreter.

pub use executor::{VM, VMConfig, VMStatus};
pub use errors::{VMError, VMResult};

mod executor;
pub mod instructions;
mod errors;
