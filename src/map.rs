use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::Parser;

/// Runs a parser and passes its output through a function
///
/// Rules use it to turn a matched shape into a [`Token`](crate::token::Token),
/// for example the `(keyword, span)` pair of `with_position()`. Errors and the
/// resulting cursor pass through untouched.
pub struct Map<P, F> {
    parser: P,
    mapper: F,
}

impl<P, F> Map<P, F> {
    pub fn new(parser: P, mapper: F) -> Self {
        Map { parser, mapper }
    }
}

impl<'code, P, F, U> Parser<'code> for Map<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> U,
{
    type Output = U;

    fn parse(
        &self,
        cursor: Cursor<'code>,
    ) -> Result<(Self::Output, Cursor<'code>), ParseError<'code>> {
        self.parser
            .parse(cursor)
            .map(|(value, next)| ((self.mapper)(value), next))
    }
}

/// `.map()` for every parser
pub trait MapExt<'code>: Parser<'code> + Sized {
    fn map<F, U>(self, mapper: F) -> Map<Self, F>
    where
        F: Fn(Self::Output) -> U,
    {
        Map::new(self, mapper)
    }
}

impl<'code, P> MapExt<'code> for P where P: Parser<'code> {}
