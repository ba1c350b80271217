//! 诊断系统
//!
//! 提供单槽诊断记录和终端渲染
//!
//! # 模块结构
//!
//! - [`error`] - 诊断数据结构 (Diagnostic, ToDiagnostic)
//!
//! # 示例
//!
//! ```
//! use txr::util::diagnostic::{Diagnostic, DiagnosticRenderer, EmitterConfig};
//! use txr::util::span::SourceFile;
//!
//! let renderer = DiagnosticRenderer::with_config(EmitterConfig::plain());
//! let source = SourceFile::new("<expr>", "10 $ 2");
//! let output = renderer.render(&Diagnostic::at("unexpected character `$`", 3), Some(&source));
//! assert!(output.starts_with("error: unexpected character `$`"));
//! ```

pub mod error;

pub use error::{Diagnostic, ToDiagnostic};

use crate::util::span::SourceFile;
use owo_colors::OwoColorize;

/// 渲染器配置
#[derive(Debug, Clone)]
pub struct EmitterConfig {
    /// 是否启用颜色输出
    pub use_colors: bool,
    /// 是否显示源码片段
    pub show_source: bool,
}

impl EmitterConfig {
    /// 无颜色配置，用于测试和管道输出
    pub fn plain() -> Self {
        Self {
            use_colors: false,
            show_source: true,
        }
    }
}

impl Default for EmitterConfig {
    fn default() -> Self {
        Self {
            use_colors: true,
            show_source: true,
        }
    }
}

/// 诊断渲染器
#[derive(Debug, Clone, Default)]
pub struct DiagnosticRenderer {
    /// 渲染配置
    config: EmitterConfig,
}

impl DiagnosticRenderer {
    /// 创建新的渲染器
    pub fn new() -> Self {
        Self::default()
    }

    /// 使用自定义配置创建渲染器
    pub fn with_config(config: EmitterConfig) -> Self {
        Self { config }
    }

    /// 渲染单个诊断信息
    pub fn render(
        &self,
        diagnostic: &Diagnostic,
        source_file: Option<&SourceFile>,
    ) -> String {
        let mut output = self.render_header(diagnostic);

        if self.config.show_source {
            if let Some(source_file) = source_file {
                output.push_str(&self.render_source_snippet(diagnostic, source_file));
            }
        }

        output
    }

    /// 渲染错误头部
    fn render_header(
        &self,
        diagnostic: &Diagnostic,
    ) -> String {
        let label = if self.config.use_colors {
            format!("{}", "error".red().bold())
        } else {
            "error".to_string()
        };
        format!("{}: {} at {}\n", label, diagnostic.message, diagnostic.location)
    }

    /// 渲染源码片段，用 `^` 标出出错的字节
    fn render_source_snippet(
        &self,
        diagnostic: &Diagnostic,
        source_file: &SourceFile,
    ) -> String {
        let pos = source_file.position(diagnostic.location);
        let line = source_file.line_text(pos.line).unwrap_or("");

        let gutter = " ".repeat(4);
        let caret = if self.config.use_colors {
            format!("{}", "^".red().bold())
        } else {
            "^".to_string()
        };

        format!(
            " --> {}:{}\n{} |\n{:>4} | {}\n{} | {}{}\n",
            source_file.name,
            pos,
            gutter,
            pos.line,
            line,
            gutter,
            " ".repeat(pos.column - 1),
            caret
        )
    }
}

#[cfg(test)]
mod tests;
