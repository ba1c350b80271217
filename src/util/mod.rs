//! Utility types and functions

pub mod config;
pub mod diagnostic;
pub mod dump;
pub mod logger;
pub mod span;
