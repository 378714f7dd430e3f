use super::token_since;
use crate::classify::{is_letter_head, is_letter_tail, skip_spaces, skip_while};
use crate::cursor::Cursor;
use crate::error::{ErrorKind, ParseError};
use crate::parser::Parser;
use crate::rollback::rollback;
use crate::token::{Token, TokenKind};

/// `[A-Za-z_][A-Za-z0-9_-]*`
pub fn identifier<'code>() -> impl Parser<'code, Output = Token<'code>> {
    rollback(|cursor: &mut Cursor<'code>| {
        *cursor = skip_spaces(*cursor);
        let start = *cursor;

        if !is_letter_head(cursor) {
            return Err(ParseError::new(ErrorKind::NotIdentifier, *cursor));
        }
        *cursor = skip_while(cursor.advance(), is_letter_tail);

        Ok(token_since(TokenKind::Identifier, &start, cursor))
    })
}
