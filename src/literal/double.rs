use super::{optional_minus, reject_suffix, token_since};
use crate::char::parse_char;
use crate::classify::{is_digit, skip_spaces, skip_while};
use crate::cursor::Cursor;
use crate::error::{ErrorKind, ParseError};
use crate::parser::Parser;
use crate::rollback::rollback;
use crate::token::{Token, TokenKind};

fn digits<'code>(cursor: &mut Cursor<'code>) -> Result<(), ParseError<'code>> {
    if !is_digit(cursor) {
        return Err(ParseError::new(ErrorKind::NotDoubleLiteral, *cursor));
    }
    *cursor = skip_while(*cursor, is_digit);
    Ok(())
}

/// `-?[0-9]+\.[0-9]+`
pub fn double_literal<'code>() -> impl Parser<'code, Output = Token<'code>> {
    rollback(|cursor: &mut Cursor<'code>| {
        *cursor = skip_spaces(*cursor);
        let start = *cursor;
        optional_minus(cursor);

        digits(cursor)?;
        parse_char('.')
            .parse_mut(cursor)
            .map_err(|_| ParseError::new(ErrorKind::NotDoubleLiteral, *cursor))?;
        digits(cursor)?;

        reject_suffix(cursor)?;
        Ok(token_since(TokenKind::Double, &start, cursor))
    })
}
