//! 代码生成测试

use crate::frontend::lexer::{tokenize, Operator};
use crate::frontend::parser::ast::{Node, UnaryOp};
use crate::frontend::parser::parse;
use crate::middle::bytecode::{Action, Program};
use crate::middle::codegen::{compile, CodegenContext, CodegenError};
use crate::util::diagnostic::ToDiagnostic;
use crate::util::span::Location;

fn program(source: &str) -> Program {
    let tokens = tokenize(source).unwrap();
    compile(&parse(&tokens).unwrap()).unwrap()
}

fn listing(source: &str) -> Vec<String> {
    program(source).iter().map(|a| a.to_string()).collect()
}

#[test]
fn test_number_literal() {
    assert_eq!(
        program("42").actions,
        vec![Action::PushNumber {
            value: 42.0,
            offset: 0
        }]
    );
}

#[test]
fn test_identifier_compiles() {
    assert_eq!(
        program("x").actions,
        vec![Action::PushIdentifier {
            name: "x".to_string(),
            offset: 0
        }]
    );
}

#[test]
fn test_post_order_binary() {
    assert_eq!(listing("10 + 2 * 4"), ["push 10", "push 2", "push 4", "apply *", "apply +"]);
    assert_eq!(listing("(10 + 2) * 4"), ["push 10", "push 2", "apply +", "push 4", "apply *"]);
}

#[test]
fn test_left_operand_first() {
    assert_eq!(listing("10 - 2 - 3"), ["push 10", "push 2", "apply -", "push 3", "apply -"]);
}

#[test]
fn test_unary_after_operand() {
    let program = program("-(1 + x)");
    assert_eq!(
        program.actions.last(),
        Some(&Action::ApplyUnary {
            op: UnaryOp::Negate,
            offset: 0
        })
    );
    assert_eq!(
        program.iter().map(|a| a.to_string()).collect::<Vec<_>>(),
        ["push 1", "load x", "apply +", "apply neg"]
    );
}

#[test]
fn test_action_offsets() {
    let program = program("7 div 2");
    let offsets: Vec<usize> = program.iter().map(Action::offset).collect();
    assert_eq!(offsets, [0, 6, 2]);
    assert_eq!(
        program.actions[2],
        Action::ApplyBinary {
            op: Operator::IDiv,
            offset: 2
        }
    );
}

#[test]
fn test_program_length_matches_node_count() {
    // 4 leaves, 3 binary operators, 1 unary
    assert_eq!(program("1 + 2 * -3 - 4").len(), 8);
}

#[test]
fn test_program_display() {
    let rendered = program("1 + 2").to_string();
    assert_eq!(rendered, "[  0] push 1\n[  1] push 2\n[  2] apply +\n");
}

#[test]
fn test_sentinel_operator_node_is_rejected() {
    let node = Node::binary(
        Operator::MaxP,
        Node::number(1.0, 0),
        Node::number(2.0, 4),
        2,
    );
    let err = CodegenContext::new().generate(&node).unwrap_err();
    assert_eq!(
        err,
        CodegenError::UnsupportedNode {
            kind: "BinaryOp",
            location: Location::Offset(2)
        }
    );
    assert_eq!(
        err.to_diagnostic().message,
        "cannot compile node type BinaryOp"
    );
}

#[test]
fn test_nested_sentinel_is_rejected() {
    let bad = Node::binary(Operator::MaxP, Node::number(1.0, 1), Node::number(2.0, 3), 2);
    let node = Node::unary(UnaryOp::Negate, bad, 0);
    assert!(compile(&node).is_err());
}
