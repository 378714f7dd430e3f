use crate::classify::{is_letter_tail, skip_spaces};
use crate::cursor::Cursor;
use crate::error::{ErrorKind, ParseError};
use crate::parser::Parser;
use std::borrow::Cow;

/// Parser that matches an exact word that is not the prefix of a longer identifier
///
/// `true` matches in `true)` and `true 1` but not in `truee` or `true-x`.
pub struct KeywordParser {
    expected: Cow<'static, str>,
}

impl KeywordParser {
    pub fn new(expected: impl Into<Cow<'static, str>>) -> Self {
        Self {
            expected: expected.into(),
        }
    }

    fn error<'code>(&self, at: Cursor<'code>) -> ParseError<'code> {
        ParseError::new(ErrorKind::ExpectedKeyword(self.expected.clone()), at)
    }
}

impl<'code> Parser<'code> for KeywordParser {
    type Output = Cow<'static, str>;

    fn parse(
        &self,
        cursor: Cursor<'code>,
    ) -> Result<(Self::Output, Cursor<'code>), ParseError<'code>> {
        let mut current = cursor;

        for expected in self.expected.chars() {
            match current.peek() {
                Some(c) if c == expected => current = current.advance(),
                Some(_) => return Err(self.error(current)),
                None => return Err(ParseError::new(ErrorKind::UnexpectedEndOfInput, current)),
            }
        }

        if is_letter_tail(&current) {
            return Err(self.error(current));
        }

        Ok((self.expected.clone(), current))
    }
}

/// Convenience function to create a KeywordParser
pub fn parse_keyword(expected: impl Into<Cow<'static, str>>) -> KeywordParser {
    KeywordParser::new(expected)
}

/// Parser that succeeds only when nothing but whitespace is left
pub struct EndOfInputParser;

impl<'code> Parser<'code> for EndOfInputParser {
    type Output = ();

    fn parse(
        &self,
        cursor: Cursor<'code>,
    ) -> Result<(Self::Output, Cursor<'code>), ParseError<'code>> {
        let cursor = skip_spaces(cursor);
        if cursor.is_end() {
            Ok(((), cursor))
        } else {
            Err(ParseError::new(ErrorKind::ExpectedEndOfInput, cursor))
        }
    }
}

/// Convenience function to create an EndOfInputParser
pub fn end_of_input() -> EndOfInputParser {
    EndOfInputParser
}
