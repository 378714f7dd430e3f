use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::Parser;

/// Parser combinator that tries the first parser, and if it fails, tries the second parser
///
/// Both parsers start from the same cursor. When both fail, the error carries
/// the diagnostics of the first followed by those of the second, so a chain of
/// `.or()` calls reports every alternative that was tried.
pub struct Or<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> Or<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        Or { parser1, parser2 }
    }
}

impl<'code, P1, P2, O> Parser<'code> for Or<P1, P2>
where
    P1: Parser<'code, Output = O>,
    P2: Parser<'code, Output = O>,
{
    type Output = O;

    fn parse(
        &self,
        cursor: Cursor<'code>,
    ) -> Result<(Self::Output, Cursor<'code>), ParseError<'code>> {
        match self.parser1.parse(cursor) {
            Ok(result) => Ok(result),
            Err(first) => {
                log::trace!(
                    "alternative failed at {}, trying next: {:?}",
                    cursor.position(),
                    first.kinds().collect::<Vec<_>>()
                );
                match self.parser2.parse(cursor) {
                    Ok(result) => Ok(result),
                    Err(second) => Err(first.merge(second)),
                }
            }
        }
    }
}

/// Extension trait to add .or() method support for parsers
pub trait OrExt<'code>: Parser<'code> + Sized {
    fn or<P>(self, other: P) -> Or<Self, P>
    where
        P: Parser<'code, Output = Self::Output>,
    {
        Or::new(self, other)
    }
}

/// Implement OrExt for all parsers
impl<'code, P> OrExt<'code> for P where P: Parser<'code> {}

/// Convenience function to create an Or parser
pub fn or<'code, P1, P2, O>(parser1: P1, parser2: P2) -> Or<P1, P2>
where
    P1: Parser<'code, Output = O>,
    P2: Parser<'code, Output = O>,
{
    Or::new(parser1, parser2)
}
