//! txr configuration
//!
//! There is no configuration file and no environment lookup: a [`Config`] is
//! assembled from command-line flags, falling back to [`Config::default`].

use crate::util::dump::DumpFormat;
use crate::util::logger::LogLevel;
use crate::vm::VMConfig;

/// Intermediate pipeline stage that can be printed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Token sequence
    Tokens,
    /// Expression tree
    Ast,
    /// Linear stack program
    Actions,
}

/// Run configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Log level
    pub log_level: LogLevel,
    /// Evaluator settings
    pub vm: VMConfig,
    /// Stages to print before the result, in pipeline order
    pub emit: Vec<Stage>,
    /// Format of printed stages
    pub format: DumpFormat,
    /// Colored diagnostics
    pub use_colors: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Warn,
            vm: VMConfig::default(),
            emit: Vec::new(),
            format: DumpFormat::Text,
            use_colors: true,
        }
    }
}

impl Config {
    /// Whether `stage` should be printed
    #[inline]
    pub fn emits(
        &self,
        stage: Stage,
    ) -> bool {
        self.emit.contains(&stage)
    }

    /// Set the stages to print; duplicates are dropped and pipeline order kept
    pub fn with_emit(
        mut self,
        stages: impl IntoIterator<Item = Stage>,
    ) -> Self {
        let requested: Vec<Stage> = stages.into_iter().collect();
        self.emit = [Stage::Tokens, Stage::Ast, Stage::Actions]
            .into_iter()
            .filter(|stage| requested.contains(stage))
            .collect();
        self
    }

    /// Raise logging to DEBUG
    pub fn verbose(mut self) -> Self {
        self.log_level = LogLevel::Debug;
        self
    }

    /// Enable per-action evaluator tracing; implies TRACE logging
    pub fn trace(mut self) -> Self {
        self.vm.trace_execution = true;
        self.log_level = LogLevel::Trace;
        self
    }
}
