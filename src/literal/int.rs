use super::{optional_minus, reject_suffix, token_since};
use crate::char::{parse_char, parse_char_or};
use crate::classify::{
    is_digit, is_hex_digit, is_nonzero_digit, is_octal_digit, skip_spaces, skip_while,
};
use crate::cursor::Cursor;
use crate::error::{ErrorKind, ParseError};
use crate::or::OrExt;
use crate::parser::Parser;
use crate::rollback::rollback;
use crate::token::{Token, TokenKind};

/// `-?(0|[1-9][0-9]*)`
pub fn decimal_int_literal<'code>() -> impl Parser<'code, Output = Token<'code>> {
    rollback(|cursor: &mut Cursor<'code>| {
        *cursor = skip_spaces(*cursor);
        let start = *cursor;
        optional_minus(cursor);

        if cursor.peek() == Some('0') {
            *cursor = cursor.advance();
        } else if is_nonzero_digit(cursor) {
            *cursor = skip_while(cursor.advance(), is_digit);
        } else {
            return Err(ParseError::new(ErrorKind::NotDecimalIntLiteral, *cursor));
        }

        reject_suffix(cursor)?;
        Ok(token_since(TokenKind::DecimalInt, &start, cursor))
    })
}

/// `-?0[0-7]+`
pub fn octal_int_literal<'code>() -> impl Parser<'code, Output = Token<'code>> {
    rollback(|cursor: &mut Cursor<'code>| {
        *cursor = skip_spaces(*cursor);
        let start = *cursor;
        optional_minus(cursor);

        parse_char('0')
            .parse_mut(cursor)
            .map_err(|_| ParseError::new(ErrorKind::NotOctalIntLiteral, *cursor))?;
        if !is_octal_digit(cursor) {
            return Err(ParseError::new(ErrorKind::NotOctalIntLiteral, *cursor));
        }
        *cursor = skip_while(*cursor, is_octal_digit);

        reject_suffix(cursor)?;
        Ok(token_since(TokenKind::OctalInt, &start, cursor))
    })
}

/// `-?0[xX][0-9A-Fa-f]+`
pub fn hexadecimal_int_literal<'code>() -> impl Parser<'code, Output = Token<'code>> {
    rollback(|cursor: &mut Cursor<'code>| {
        *cursor = skip_spaces(*cursor);
        let start = *cursor;
        optional_minus(cursor);

        parse_char('0')
            .parse_mut(cursor)
            .map_err(|_| ParseError::new(ErrorKind::NotHexadecimalIntLiteral, *cursor))?;
        parse_char_or('x', 'X')
            .parse_mut(cursor)
            .map_err(|_| ParseError::new(ErrorKind::NotHexadecimalIntLiteral, *cursor))?;
        if !is_hex_digit(cursor) {
            return Err(ParseError::new(ErrorKind::NotHexadecimalIntLiteral, *cursor));
        }
        *cursor = skip_while(*cursor, is_hex_digit);

        reject_suffix(cursor)?;
        Ok(token_since(TokenKind::HexadecimalInt, &start, cursor))
    })
}

/// Any integer literal
///
/// Hexadecimal and octal both start with `0`, so they are tried before decimal.
pub fn int_literal<'code>() -> impl Parser<'code, Output = Token<'code>> {
    hexadecimal_int_literal()
        .or(octal_int_literal())
        .or(decimal_int_literal())
}
