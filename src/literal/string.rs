use super::token_since;
use crate::char::parse_char;
use crate::classify::{is_endline, skip_spaces};
use crate::cursor::Cursor;
use crate::error::{ErrorKind, ParseError};
use crate::parser::Parser;
use crate::rollback::rollback;
use crate::token::{Token, TokenKind};

/// Double-quoted string on a single line
///
/// A backslash escapes exactly the next character, which may not be a line
/// break. The lexeme keeps the quotes and escapes; see [`Token::unescaped`].
pub fn string_literal<'code>() -> impl Parser<'code, Output = Token<'code>> {
    rollback(|cursor: &mut Cursor<'code>| {
        *cursor = skip_spaces(*cursor);
        let start = *cursor;

        parse_char('"')
            .parse_mut(cursor)
            .map_err(|_| ParseError::new(ErrorKind::NotStringLiteral, *cursor))?;

        loop {
            if cursor.is_end() || is_endline(cursor) {
                return Err(ParseError::new(ErrorKind::UnterminatedString, *cursor));
            }
            match cursor.peek() {
                Some('"') => {
                    *cursor = cursor.advance();
                    break;
                }
                Some('\\') => {
                    *cursor = cursor.advance();
                    if cursor.is_end() || is_endline(cursor) {
                        return Err(ParseError::new(ErrorKind::UnterminatedString, *cursor));
                    }
                    *cursor = cursor.advance();
                }
                _ => *cursor = cursor.advance(),
            }
        }

        Ok(token_since(TokenKind::String, &start, cursor))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::Source;
    use rstest::rstest;

    #[rstest]
    #[case(r#""hello" world"#, r#""hello""#, " world")]
    #[case(r#""""#, r#""""#, "")]
    #[case(r#"  "a\"b"x"#, r#""a\"b""#, "x")]
    #[case(r#""back\\slash""#, r#""back\\slash""#, "")]
    #[case("\"tab\there\"", "\"tab\there\"", "")]
    #[case("\"日本\"", "\"日本\"", "")]
    fn test_string_matches(#[case] input: &str, #[case] lexeme: &str, #[case] rest: &str) {
        let source = Source::from_string(input);
        let (token, cursor) = string_literal().parse(source.cursor()).unwrap();
        assert_eq!(token.lexeme(), lexeme);
        assert_eq!(token.kind(), TokenKind::String);
        assert_eq!(cursor.rest(), rest);
    }

    #[test]
    fn test_unterminated_at_end_of_input() {
        let source = Source::from_string("\"open string");
        let mut cursor = source.cursor();
        let error = string_literal().parse_mut(&mut cursor).unwrap_err();

        assert!(error.contains(&ErrorKind::UnterminatedString));
        assert_eq!(error.position(), source.len());
        assert_eq!(cursor, source.cursor());
    }

    #[rstest]
    #[case("\"line\nbreak\"", 5)]
    #[case("\"line\r\n\"", 5)]
    #[case("\"escaped\\\nbreak\"", 9)]
    #[case("\"trailing\\", 10)]
    fn test_unterminated(#[case] input: &str, #[case] at: usize) {
        let source = Source::from_string(input);
        let error = string_literal().parse(source.cursor()).unwrap_err();
        assert!(error.contains(&ErrorKind::UnterminatedString));
        assert_eq!(error.position(), at);
    }

    #[test]
    fn test_not_a_string() {
        let source = Source::from_string("'single'");
        let error = string_literal().parse(source.cursor()).unwrap_err();
        assert!(error.contains(&ErrorKind::NotStringLiteral));
    }

    #[test]
    fn test_unescaped_contents() {
        let source = Source::from_string(r#""say \"hi\"""#);
        let (token, _) = string_literal().parse(source.cursor()).unwrap();
        assert_eq!(token.unescaped().as_deref(), Some(r#"say "hi""#));
    }
}
