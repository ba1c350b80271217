//! Span 单元测试
//!
//! 测试 Location、Position 和 SourceFile

use crate::util::span::{Location, Position, SourceFile};

#[cfg(test)]
mod location_tests {
    use super::*;

    #[test]
    fn test_location_display() {
        assert_eq!(Location::Offset(3).to_string(), "position 3");
        assert_eq!(Location::Eof.to_string(), "<EOF>");
    }

    #[test]
    fn test_location_offset() {
        assert_eq!(Location::Offset(7).offset(), Some(7));
        assert_eq!(Location::Eof.offset(), None);
        assert!(Location::Eof.is_eof());
        assert!(!Location::Offset(0).is_eof());
    }
}

#[cfg(test)]
mod source_file_tests {
    use super::*;

    #[test]
    fn test_single_line_position() {
        let file = SourceFile::new("<expr>", "10 $ 2");
        let pos = file.position(Location::Offset(3));
        assert_eq!(pos, Position::with_offset(1, 4, 3));
        assert_eq!(file.line_text(1), Some("10 $ 2"));
    }

    #[test]
    fn test_eof_position() {
        let file = SourceFile::new("<expr>", "(1 + 2");
        let pos = file.position(Location::Eof);
        assert_eq!(pos.line, 1);
        assert_eq!(pos.column, 7);
        assert_eq!(pos.offset, 6);
    }

    #[test]
    fn test_multi_line_position() {
        let file = SourceFile::new("<expr>", "1 +\r\n  x");
        assert_eq!(file.line_count(), 2);
        let pos = file.position(Location::Offset(7));
        assert_eq!(pos.line, 2);
        assert_eq!(pos.column, 3);
        assert_eq!(file.line_text(1), Some("1 +"));
        assert_eq!(file.line_text(2), Some("  x"));
        assert_eq!(file.line_text(3), None);
    }

    #[test]
    fn test_offset_past_end_is_clamped() {
        let file = SourceFile::new("<expr>", "12");
        let pos = file.position(Location::Offset(99));
        assert_eq!(pos.offset, 2);
        assert_eq!(pos.column, 3);
    }

    #[test]
    fn test_display_is_name() {
        let file = SourceFile::new("<expr>", "1");
        assert_eq!(format!("{}", file), "<expr>");
    }
}
