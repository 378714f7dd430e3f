//! Literal grammar
//!
//! Every rule skips leading whitespace, is wrapped in [`rollback`] so a failure
//! leaves the caller's cursor untouched, and returns a [`Token`] whose lexeme
//! excludes the skipped whitespace. Numeric rules refuse to stop in front of an
//! identifier character, so `123abc` is an error rather than `123`.
//!
//! [`rollback`]: crate::rollback::rollback

pub mod boolean;
pub mod double;
pub mod identifier;
pub mod int;
pub mod string;

pub use boolean::bool_literal;
pub use double::double_literal;
pub use identifier::identifier;
pub use int::{decimal_int_literal, hexadecimal_int_literal, int_literal, octal_int_literal};
pub use string::string_literal;

use crate::classify::is_letter_tail;
use crate::cursor::Cursor;
use crate::error::{ErrorKind, ParseError};
use crate::or::OrExt;
use crate::parser::Parser;
use crate::position::Span;
use crate::token::{Token, TokenKind};

/// Any literal
///
/// Doubles come before integers: `3.14` must not stop at `3`.
pub fn literal<'code>() -> impl Parser<'code, Output = Token<'code>> {
    double_literal()
        .or(int_literal())
        .or(bool_literal())
        .or(string_literal())
}

fn optional_minus(cursor: &mut Cursor<'_>) {
    if cursor.peek() == Some('-') {
        *cursor = cursor.advance();
    }
}

fn reject_suffix<'code>(cursor: &Cursor<'code>) -> Result<(), ParseError<'code>> {
    if is_letter_tail(cursor) {
        return Err(ParseError::new(ErrorKind::UnknownLiteralSuffix, *cursor));
    }
    Ok(())
}

fn token_since<'code>(kind: TokenKind, start: &Cursor<'code>, end: &Cursor<'code>) -> Token<'code> {
    Token::new(kind, Span::between(start, end))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::Source;
    use rstest::rstest;

    #[rstest]
    #[case("42 rest", TokenKind::DecimalInt, "42", " rest")]
    #[case("0x1F", TokenKind::HexadecimalInt, "0x1F", "")]
    #[case("3.14.15", TokenKind::Double, "3.14", ".15")]
    #[case(" -2.5;", TokenKind::Double, "-2.5", ";")]
    #[case("true)", TokenKind::Bool, "true", ")")]
    #[case("\n\"hi\" there", TokenKind::String, "\"hi\"", " there")]
    #[case("017", TokenKind::OctalInt, "017", "")]
    fn test_literal(
        #[case] input: &str,
        #[case] kind: TokenKind,
        #[case] lexeme: &str,
        #[case] rest: &str,
    ) {
        let source = Source::from_string(input);
        let (token, cursor) = literal().parse(source.cursor()).unwrap();
        assert_eq!(token.kind(), kind);
        assert_eq!(token.lexeme(), lexeme);
        assert_eq!(cursor.rest(), rest);
    }

    #[test]
    fn test_literal_round_trip() {
        for input in ["42 rest", "  0x1F", "\t-3.5;", "false", " \"a\\\"b\" c", "0777 8"] {
            let source = Source::from_string(input);
            let (token, cursor) = literal().parse(source.cursor()).unwrap();
            let rebuilt = format!("{}{}", token.lexeme(), cursor.rest());
            assert_eq!(rebuilt, input.trim_start(), "{input:?}");
            assert_eq!(&source.content()[token.span().start..], rebuilt);
        }
    }

    #[test]
    fn test_literal_unknown_suffix() {
        let source = Source::from_string("123abc");
        let mut cursor = source.cursor();
        let error = literal().parse_mut(&mut cursor).unwrap_err();

        assert!(error.len() > 1);
        let suffix = error
            .diagnostics()
            .iter()
            .find(|d| d.kind == ErrorKind::UnknownLiteralSuffix)
            .unwrap();
        assert_eq!(suffix.loc.position(), 3);
        assert_eq!(cursor, source.cursor());
    }

    #[test]
    fn test_literal_rejects_keyword_with_tail() {
        let source = Source::from_string("truee");
        assert!(bool_literal().parse(source.cursor()).is_err());

        let error = literal().parse(source.cursor()).unwrap_err();
        assert!(error.contains(&ErrorKind::NotDoubleLiteral));
        assert!(error.contains(&ErrorKind::ExpectedKeyword("true".into())));
        assert!(error.contains(&ErrorKind::NotStringLiteral));
    }

    #[test]
    fn test_literal_empty_input() {
        let source = Source::from_string("");
        let error = literal().parse(source.cursor()).unwrap_err();
        assert!(error.len() >= 4);
    }

    #[test]
    fn test_literal_error_rendering() {
        let source = Source::new("x", "in.kz");
        let error = literal().parse(source.cursor()).unwrap_err();
        let rendered = error.to_string();

        assert!(rendered.starts_with("in.kz:1:1: error: not double literal\nx\n^"));
        assert!(rendered.contains("in.kz:1:1: error: not hexadecimal int literal"));
        assert!(rendered.contains("in.kz:1:1: error: not string literal"));
        assert_eq!(rendered.matches("\n\n").count(), error.len() - 1);
    }
}
