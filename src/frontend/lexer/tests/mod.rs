//! Lexer 单元测试
//!
//! 测试词法分析器的分词功能
use crate::frontend::lexer::{tokenize, LexError, Operator, Token, TokenKind};
use crate::util::diagnostic::ToDiagnostic;
use crate::util::span::Location;

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source)
        .unwrap()
        .into_iter()
        .map(|t| t.kind)
        .collect()
}

#[cfg(test)]
mod lexer_basic_tests {
    use super::*;

    #[test]
    fn test_empty_source() {
        let tokens = tokenize("").unwrap();
        assert_eq!(tokens, vec![Token::new(TokenKind::Eof, 0)]);
    }

    #[test]
    fn test_whitespace_only() {
        let tokens = tokenize("   \t\n\r   ").unwrap();
        assert_eq!(tokens.len(), 1);
        assert!(tokens[0].is_eof());
        assert_eq!(tokens[0].offset, 9);
    }

    #[test]
    fn test_single_number() {
        let tokens = tokenize("   42").unwrap();
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0], Token::new(TokenKind::Number(42.0), 3));
        assert_eq!(tokens[1], Token::new(TokenKind::Eof, 5));
    }

    #[test]
    fn test_digit_run_is_maximal() {
        assert_eq!(
            kinds("1234 5"),
            vec![
                TokenKind::Number(1234.0),
                TokenKind::Number(5.0),
                TokenKind::Eof
            ]
        );
    }

    #[test]
    fn test_any_digit_run_is_a_number() {
        assert_eq!(kinds("007")[0], TokenKind::Number(7.0));

        let huge = "9".repeat(400);
        let tokens = tokenize(&huge).unwrap();
        assert_eq!(tokens[0], Token::new(TokenKind::Number(f64::INFINITY), 0));
        assert_eq!(tokens[1], Token::new(TokenKind::Eof, 400));
    }

    #[test]
    fn test_no_decimal_point() {
        let err = tokenize("3.14").unwrap_err();
        assert_eq!(err, LexError::UnexpectedChar { ch: '.', offset: 1 });
    }

    #[test]
    fn test_parens() {
        assert_eq!(
            kinds("()"),
            vec![TokenKind::ParenOpen, TokenKind::ParenClose, TokenKind::Eof]
        );
    }

    #[test]
    fn test_exactly_one_eof() {
        let tokens = tokenize("(10 + 2) * 4").unwrap();
        assert_eq!(tokens.iter().filter(|t| t.is_eof()).count(), 1);
        assert!(tokens.last().unwrap().is_eof());
    }
}

#[cfg(test)]
mod lexer_operator_tests {
    use super::*;

    #[test]
    fn test_symbol_operators() {
        assert_eq!(
            kinds("+ - * / %"),
            vec![
                TokenKind::Operator(Operator::Add),
                TokenKind::Operator(Operator::Sub),
                TokenKind::Operator(Operator::Mul),
                TokenKind::Operator(Operator::FDiv),
                TokenKind::Operator(Operator::FMod),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_reserved_word_operators() {
        assert_eq!(
            kinds("7 mod 2 div 3"),
            vec![
                TokenKind::Number(7.0),
                TokenKind::Operator(Operator::FMod),
                TokenKind::Number(2.0),
                TokenKind::Operator(Operator::IDiv),
                TokenKind::Number(3.0),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_reserved_word_prefix_is_identifier() {
        assert_eq!(
            kinds("modulo divide Mod"),
            vec![
                TokenKind::Identifier("modulo".to_string()),
                TokenKind::Identifier("divide".to_string()),
                TokenKind::Identifier("Mod".to_string()),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_minus_is_not_part_of_literal() {
        assert_eq!(
            kinds("-7"),
            vec![
                TokenKind::Operator(Operator::Sub),
                TokenKind::Number(7.0),
                TokenKind::Eof
            ]
        );
    }

    #[test]
    fn test_operator_codes() {
        assert_eq!(Operator::Mul.code(), 0x01);
        assert_eq!(Operator::IDiv.code(), 0x04);
        assert_eq!(Operator::Sub.code(), 0x11);
        assert_eq!(Operator::Mul.tier(), 0);
        assert_eq!(Operator::FMod.tier(), 0);
        assert_eq!(Operator::Add.tier(), 1);
        assert_eq!(Operator::max_tier(), 2);
    }

    #[test]
    fn test_operator_try_from() {
        assert_eq!(Operator::try_from(0x03), Ok(Operator::FMod));
        assert_eq!(Operator::try_from(0x20), Ok(Operator::MaxP));
        assert_eq!(Operator::try_from(0x05), Err(0x05));
    }
}

#[cfg(test)]
mod lexer_identifier_tests {
    use super::*;

    #[test]
    fn test_identifier() {
        let tokens = tokenize("x").unwrap();
        assert_eq!(tokens[0], Token::new(TokenKind::Identifier("x".into()), 0));
    }

    #[test]
    fn test_identifier_with_underscore_and_digits() {
        assert_eq!(
            kinds("_tmp1 a_b2"),
            vec![
                TokenKind::Identifier("_tmp1".to_string()),
                TokenKind::Identifier("a_b2".to_string()),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_digit_then_letters_split() {
        assert_eq!(
            kinds("2x"),
            vec![
                TokenKind::Number(2.0),
                TokenKind::Identifier("x".to_string()),
                TokenKind::Eof,
            ]
        );
    }
}

#[cfg(test)]
mod lexer_error_tests {
    use super::*;

    #[test]
    fn test_unexpected_char() {
        let err = tokenize("10 $ 2").unwrap_err();
        assert_eq!(err, LexError::UnexpectedChar { ch: '$', offset: 3 });
        assert_eq!(err.offset(), 3);
        assert_eq!(err.to_string(), "unexpected character `$` at position 3");
    }

    #[test]
    fn test_unexpected_char_diagnostic() {
        let diagnostic = tokenize("1 + #").unwrap_err().to_diagnostic();
        assert_eq!(diagnostic.message, "unexpected character `#`");
        assert_eq!(diagnostic.location, Location::Offset(4));
    }

    #[test]
    fn test_offset_is_in_bytes() {
        let err = tokenize("é").unwrap_err();
        assert_eq!(err, LexError::UnexpectedChar { ch: 'é', offset: 0 });

        let err = tokenize("x é").unwrap_err();
        assert_eq!(err.offset(), 2);

        let err = tokenize("éé").unwrap_err();
        assert_eq!(err.offset(), 0);
    }

    #[test]
    fn test_first_fault_wins() {
        let err = tokenize("1 @ 2 $").unwrap_err();
        assert_eq!(err, LexError::UnexpectedChar { ch: '@', offset: 2 });
    }
}

#[cfg(test)]
mod quickcheck_tests {
    use super::*;
    use quickcheck::{quickcheck, TestResult};

    fn lexes_or_reports(input: String) -> TestResult {
        if !input.is_ascii() {
            return TestResult::discard();
        }
        match tokenize(&input) {
            Ok(tokens) => TestResult::from_bool(
                tokens.last().map(|t| t.is_eof()).unwrap_or(false)
                    && tokens.iter().filter(|t| t.is_eof()).count() == 1,
            ),
            Err(err) => TestResult::from_bool(err.offset() < input.len()),
        }
    }

    fn digit_runs_are_numbers(n: u32) -> bool {
        let tokens = tokenize(&n.to_string()).unwrap();
        tokens[0].kind == TokenKind::Number(n as f64)
    }

    #[test]
    fn quickcheck_tokenize_is_total() {
        quickcheck(lexes_or_reports as fn(String) -> TestResult);
    }

    #[test]
    fn quickcheck_digit_runs() {
        quickcheck(digit_runs_are_numbers as fn(u32) -> bool);
    }
}
