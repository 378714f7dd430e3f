use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::Parser;

/// Parser built from a function that steps a cursor in place
///
/// The function works on a copy of the caller's cursor. If it fails, the copy
/// is dropped and the caller still holds the position it started from, no
/// matter how far the function got before giving up.
pub struct Rollback<F> {
    step: F,
}

impl<F> Rollback<F> {
    pub fn new(step: F) -> Self {
        Rollback { step }
    }
}

impl<'code, F, O> Parser<'code> for Rollback<F>
where
    F: Fn(&mut Cursor<'code>) -> Result<O, ParseError<'code>>,
{
    type Output = O;

    fn parse(
        &self,
        cursor: Cursor<'code>,
    ) -> Result<(Self::Output, Cursor<'code>), ParseError<'code>> {
        let start = cursor;
        let mut working = start;
        match (self.step)(&mut working) {
            Ok(output) => Ok((output, working)),
            Err(error) => {
                log::trace!(
                    "rolled back from {} to {}",
                    working.position(),
                    start.position()
                );
                Err(error)
            }
        }
    }
}

/// Convenience function to create a Rollback parser
pub fn rollback<'code, F, O>(step: F) -> Rollback<F>
where
    F: Fn(&mut Cursor<'code>) -> Result<O, ParseError<'code>>,
{
    Rollback::new(step)
}
