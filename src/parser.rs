use crate::cursor::Cursor;
use crate::error::ParseError;

/// Core parser trait for parser combinators
pub trait Parser<'code>: Sized {
    type Output;

    /// Attempt to parse from the given cursor position
    ///
    /// Returns Ok with the parsed value and updated cursor on success,
    /// or Err if the parse fails. The caller's cursor is a copy, so a
    /// failure never moves it.
    fn parse(
        &self,
        cursor: Cursor<'code>,
    ) -> Result<(Self::Output, Cursor<'code>), ParseError<'code>>;

    /// Parse in place, moving `cursor` only on success
    fn parse_mut(&self, cursor: &mut Cursor<'code>) -> Result<Self::Output, ParseError<'code>> {
        let (output, next) = self.parse(*cursor)?;
        *cursor = next;
        Ok(output)
    }
}

impl<'code, P> Parser<'code> for &P
where
    P: Parser<'code>,
{
    type Output = P::Output;

    fn parse(
        &self,
        cursor: Cursor<'code>,
    ) -> Result<(Self::Output, Cursor<'code>), ParseError<'code>> {
        (**self).parse(cursor)
    }
}
