use crate::cursor::Cursor;
use crate::error::{CodeLoc, ParseError};
use crate::parser::Parser;
use crate::source::Source;

/// Represents a span in the source code with start and end positions
/// and a reference to the source code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span<'code> {
    /// Reference to the source code
    pub source: &'code Source,
    /// Start position (inclusive)
    pub start: usize,
    /// End position (exclusive)
    pub end: usize,
}

impl<'code> Span<'code> {
    /// Create a new span
    pub fn new(source: &'code Source, start: usize, end: usize) -> Self {
        Span { source, start, end }
    }

    /// Span covering everything between two cursors into the same source
    pub fn between(start: &Cursor<'code>, end: &Cursor<'code>) -> Self {
        Span::new(start.source(), start.position(), end.position())
    }

    /// Get the length of the span
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if the span is empty
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The spanned text
    pub fn as_str(&self) -> &'code str {
        &self.source.content()[self.start..self.end]
    }

    pub fn start_loc(&self) -> CodeLoc<'code> {
        CodeLoc::new(self.source, self.start)
    }
}

/// A parser combinator that captures the position span of a successful parse
pub struct Position<P> {
    parser: P,
}

impl<P> Position<P> {
    pub fn new(parser: P) -> Self {
        Position { parser }
    }
}

impl<'code, P> Parser<'code> for Position<P>
where
    P: Parser<'code>,
{
    type Output = (P::Output, Span<'code>);

    fn parse(
        &self,
        cursor: Cursor<'code>,
    ) -> Result<(Self::Output, Cursor<'code>), ParseError<'code>> {
        let (output, new_cursor) = self.parser.parse(cursor)?;
        let span = Span::between(&cursor, &new_cursor);
        Ok(((output, span), new_cursor))
    }
}

/// Extension trait to add position tracking to any parser
pub trait PositionExt<'code>: Parser<'code> + Sized {
    /// Wrap this parser to capture its position span
    fn with_position(self) -> Position<Self> {
        Position::new(self)
    }
}

impl<'code, P> PositionExt<'code> for P where P: Parser<'code> {}

/// Convenience function to create a Position combinator
pub fn position<P>(parser: P) -> Position<P> {
    Position::new(parser)
}
