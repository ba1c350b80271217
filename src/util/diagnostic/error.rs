//! 诊断数据结构
//!
//! 每个阶段的错误最终都归约为一个 `Diagnostic`：一条消息加一个位置。
//! 管线中只保留最近的一条诊断，不做累积。

use crate::util::span::Location;
use serde::Serialize;
use std::fmt;

/// A single error with its source location
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnostic {
    /// Human-readable message, without location
    pub message: String,
    /// Byte offset or end of input
    pub location: Location,
}

impl Diagnostic {
    pub fn new(
        message: impl Into<String>,
        location: Location,
    ) -> Self {
        Self {
            message: message.into(),
            location,
        }
    }

    /// Diagnostic anchored at a byte offset
    #[inline]
    pub fn at(
        message: impl Into<String>,
        offset: usize,
    ) -> Self {
        Self::new(message, Location::Offset(offset))
    }

    /// Diagnostic anchored at end of input
    #[inline]
    pub fn at_eof(message: impl Into<String>) -> Self {
        Self::new(message, Location::Eof)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{} at {}", self.message, self.location)
    }
}

impl std::error::Error for Diagnostic {}

/// Conversion implemented by every phase error
pub trait ToDiagnostic {
    fn to_diagnostic(&self) -> Diagnostic;
}
