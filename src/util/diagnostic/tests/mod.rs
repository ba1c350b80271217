//! 诊断渲染测试

use crate::util::diagnostic::{Diagnostic, DiagnosticRenderer, EmitterConfig};
use crate::util::span::{Location, SourceFile};

#[test]
fn test_diagnostic_display() {
    let diagnostic = Diagnostic::at("trailing data", 2);
    assert_eq!(diagnostic.to_string(), "trailing data at position 2");

    let diagnostic = Diagnostic::at_eof("expected a closing parenthesis");
    assert_eq!(
        diagnostic.to_string(),
        "expected a closing parenthesis at <EOF>"
    );
    assert_eq!(diagnostic.location, Location::Eof);
}

#[test]
fn test_render_plain_with_caret() {
    let renderer = DiagnosticRenderer::with_config(EmitterConfig::plain());
    let source = SourceFile::new("<expr>", "10 $ 2");
    let output = renderer.render(
        &Diagnostic::at("unexpected character `$`", 3),
        Some(&source),
    );
    let expected = "error: unexpected character `$` at position 3\n \
                    --> <expr>:1:4\n     |\n   1 | 10 $ 2\n     |    ^\n";
    assert_eq!(output, expected);
}

#[test]
fn test_render_eof_points_past_end() {
    let renderer = DiagnosticRenderer::with_config(EmitterConfig::plain());
    let source = SourceFile::new("<expr>", "(1 + 2");
    let output = renderer.render(
        &Diagnostic::at_eof("expected a closing parenthesis"),
        Some(&source),
    );
    assert!(output.contains("at <EOF>"));
    assert!(output.ends_with("     |       ^\n"));
}

#[test]
fn test_render_without_source() {
    let renderer = DiagnosticRenderer::with_config(EmitterConfig::plain());
    let output = renderer.render(&Diagnostic::at("unexpected token", 0), None);
    assert_eq!(output, "error: unexpected token at position 0\n");
}

#[test]
fn test_render_hides_source_when_disabled() {
    let renderer = DiagnosticRenderer::with_config(EmitterConfig {
        use_colors: false,
        show_source: false,
    });
    let source = SourceFile::new("<expr>", "1 2");
    let output = renderer.render(&Diagnostic::at("trailing data", 2), Some(&source));
    assert_eq!(output, "error: trailing data at position 2\n");
}

#[test]
fn test_colored_header_still_contains_message() {
    let renderer = DiagnosticRenderer::new();
    let output = renderer.render(&Diagnostic::at("unexpected token", 0), None);
    assert!(output.contains("unexpected token at position 0"));
    assert!(output.contains('\u{1b}'));
}
