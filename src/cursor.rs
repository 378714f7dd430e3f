use crate::error::{CodeLoc, ErrorKind, ParseError};
use crate::source::Source;

/// A position in a [`Source`]
///
/// Cursors are `Copy`: saving a backtrack point is just keeping a copy around,
/// and advancing never affects copies made earlier. Offsets are byte offsets
/// and always fall on character boundaries.
#[derive(Debug, Copy, Clone)]
pub enum Cursor<'code> {
    Valid {
        source: &'code Source,
        position: usize,
    },
    EndOfFile {
        source: &'code Source,
    },
}

impl<'code> Cursor<'code> {
    pub fn new(source: &'code Source) -> Self {
        if source.is_empty() {
            return Cursor::EndOfFile { source };
        }
        Cursor::Valid {
            source,
            position: 0,
        }
    }

    /// Character under the cursor, `None` at end of input
    pub fn peek(&self) -> Option<char> {
        match self {
            Cursor::Valid { source, position } => source.content()[*position..].chars().next(),
            Cursor::EndOfFile { .. } => None,
        }
    }

    /// Like [`Cursor::peek`] but end of input is an error
    pub fn value(&self) -> Result<char, ParseError<'code>> {
        self.peek()
            .ok_or_else(|| ParseError::new(ErrorKind::UnexpectedEndOfInput, *self))
    }

    /// Move past the current character
    ///
    /// At end of input the cursor is returned unchanged.
    pub fn advance(self) -> Self {
        match self {
            Cursor::Valid { source, position } => {
                let width = self.peek().map_or(1, char::len_utf8);
                let next = position + width;
                if next >= source.len() {
                    Cursor::EndOfFile { source }
                } else {
                    Cursor::Valid {
                        source,
                        position: next,
                    }
                }
            }
            Cursor::EndOfFile { source } => Cursor::EndOfFile { source },
        }
    }

    /// Advance, failing if there was nothing left to consume
    pub fn try_advance(self) -> Result<Self, ParseError<'code>> {
        match self {
            Cursor::Valid { .. } => Ok(self.advance()),
            Cursor::EndOfFile { .. } => Err(ParseError::new(ErrorKind::UnexpectedEndOfInput, self)),
        }
    }

    pub fn is_end(&self) -> bool {
        matches!(self, Cursor::EndOfFile { .. })
    }

    /// Byte offset into the source; the source length at end of input
    pub fn position(&self) -> usize {
        match self {
            Cursor::Valid { position, .. } => *position,
            Cursor::EndOfFile { source } => source.len(),
        }
    }

    pub fn source(&self) -> &'code Source {
        match self {
            Cursor::Valid { source, .. } => source,
            Cursor::EndOfFile { source } => source,
        }
    }

    /// Unconsumed input from this position on
    pub fn rest(&self) -> &'code str {
        &self.source().content()[self.position()..]
    }

    /// Text between an earlier cursor and this one
    pub fn slice_from(&self, start: &Cursor<'code>) -> &'code str {
        let from = start.position().min(self.position());
        &self.source().content()[from..self.position()]
    }

    pub fn loc(&self) -> CodeLoc<'code> {
        CodeLoc::new(self.source(), self.position())
    }
}

impl PartialEq for Cursor<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.source(), other.source()) && self.position() == other.position()
    }
}

impl Eq for Cursor<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_operations() {
        let source = Source::from_string("hello\nworld");
        let cursor = source.cursor();

        assert_eq!(cursor.peek(), Some('h'));

        let cursor = cursor.advance();
        assert_eq!(cursor.peek(), Some('e'));
        assert_eq!(cursor.position(), 1);
    }

    #[test]
    fn test_eof() {
        let source = Source::from_string("ab");
        let mut cursor = source.cursor();

        assert_eq!(cursor.value().unwrap(), 'a');
        cursor = cursor.advance();
        assert_eq!(cursor.value().unwrap(), 'b');

        cursor = cursor.advance();
        assert!(matches!(cursor, Cursor::EndOfFile { .. }));
        assert!(cursor.is_end());
        assert_eq!(cursor.peek(), None);
        assert_eq!(cursor.position(), 2);
    }

    #[test]
    fn test_advance_at_end_is_noop() {
        let source = Source::from_string("x");
        let cursor = source.cursor().advance();
        assert!(cursor.is_end());

        let again = cursor.advance();
        assert_eq!(again, cursor);
    }

    #[test]
    fn test_empty_data() {
        let source = Source::from_string("");
        let cursor = source.cursor();

        assert!(cursor.is_end());
        let error = cursor.value().unwrap_err();
        assert_eq!(error.kinds().next(), Some(&ErrorKind::UnexpectedEndOfInput));
    }

    #[test]
    fn test_try_advance() {
        let source = Source::from_string("x");
        let cursor = source.cursor();

        let cursor = cursor.try_advance().unwrap();
        assert!(cursor.is_end());

        let error = cursor.try_advance().unwrap_err();
        assert!(error.to_string().contains("unexpected end of input"));
    }

    #[test]
    fn test_copy_independence() {
        let source = Source::from_string("abcd");
        let cursor = source.cursor();

        let saved_at_a = cursor;
        let cursor = cursor.advance();
        assert_eq!(cursor.peek(), Some('b'));
        assert_eq!(saved_at_a.peek(), Some('a'));

        let saved_at_b = cursor;
        let cursor = cursor.advance();
        assert_eq!(cursor.peek(), Some('c'));

        assert_eq!(saved_at_a.advance(), saved_at_b);
        assert_eq!(saved_at_b.advance(), cursor);
    }

    #[test]
    fn test_equality_requires_same_source() {
        let first = Source::from_string("abc");
        let second = Source::from_string("abc");

        assert_eq!(first.cursor(), first.cursor());
        assert_ne!(first.cursor(), second.cursor());
        assert_ne!(first.cursor(), first.cursor().advance());
    }

    #[test]
    fn test_multibyte_characters() {
        let source = Source::from_string("é1");
        let cursor = source.cursor();

        assert_eq!(cursor.peek(), Some('é'));
        let cursor = cursor.advance();
        assert_eq!(cursor.position(), 2);
        assert_eq!(cursor.peek(), Some('1'));
    }

    #[test]
    fn test_rest_and_slice() {
        let source = Source::from_string("42 rest");
        let start = source.cursor();
        let cursor = start.advance().advance();

        assert_eq!(cursor.slice_from(&start), "42");
        assert_eq!(cursor.rest(), " rest");
        assert_eq!(start.rest(), "42 rest");
    }
}
