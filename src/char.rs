use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::Parser;
use std::ops::RangeInclusive;

/// Parser that consumes and returns any single character
pub struct AnyCharParser;

impl<'code> Parser<'code> for AnyCharParser {
    type Output = char;

    fn parse(
        &self,
        cursor: Cursor<'code>,
    ) -> Result<(Self::Output, Cursor<'code>), ParseError<'code>> {
        let c = cursor.value()?;
        Ok((c, cursor.advance()))
    }
}

/// Convenience function to create an AnyCharParser
pub fn parse_anychar() -> AnyCharParser {
    AnyCharParser
}

/// Parser that matches a specific character
pub struct IsCharParser {
    expected: char,
}

impl<'code> Parser<'code> for IsCharParser {
    type Output = char;

    fn parse(
        &self,
        cursor: Cursor<'code>,
    ) -> Result<(Self::Output, Cursor<'code>), ParseError<'code>> {
        match cursor.peek() {
            Some(c) if c == self.expected => Ok((c, cursor.advance())),
            _ => Err(ParseError::mismatch(format!("'{}'", self.expected), cursor)),
        }
    }
}

/// Convenience function to create an IsCharParser
pub fn parse_char(expected: char) -> IsCharParser {
    IsCharParser { expected }
}

/// Parser that matches a character within a range (inclusive)
pub struct CharRangeParser {
    range: RangeInclusive<char>,
}

impl<'code> Parser<'code> for CharRangeParser {
    type Output = char;

    fn parse(
        &self,
        cursor: Cursor<'code>,
    ) -> Result<(Self::Output, Cursor<'code>), ParseError<'code>> {
        match cursor.peek() {
            Some(c) if self.range.contains(&c) => Ok((c, cursor.advance())),
            _ => Err(ParseError::mismatch(
                format!("character in '{}'-'{}'", self.range.start(), self.range.end()),
                cursor,
            )),
        }
    }
}

/// Convenience function to create a CharRangeParser
pub fn parse_char_range(range: RangeInclusive<char>) -> CharRangeParser {
    CharRangeParser { range }
}

/// Parser that matches either of two characters
pub struct EitherCharParser {
    first: char,
    second: char,
}

impl<'code> Parser<'code> for EitherCharParser {
    type Output = char;

    fn parse(
        &self,
        cursor: Cursor<'code>,
    ) -> Result<(Self::Output, Cursor<'code>), ParseError<'code>> {
        match cursor.peek() {
            Some(c) if c == self.first || c == self.second => Ok((c, cursor.advance())),
            _ => Err(ParseError::mismatch(
                format!("'{}' or '{}'", self.first, self.second),
                cursor,
            )),
        }
    }
}

/// Convenience function to create an EitherCharParser
pub fn parse_char_or(first: char, second: char) -> EitherCharParser {
    EitherCharParser { first, second }
}
