use crate::classify::skip_spaces;
use crate::cursor::Cursor;
use crate::keyword::parse_keyword;
use crate::map::MapExt;
use crate::or::OrExt;
use crate::parser::Parser;
use crate::position::PositionExt;
use crate::rollback::rollback;
use crate::token::{Token, TokenKind};

/// `true` or `false`, not followed by an identifier character
pub fn bool_literal<'code>() -> impl Parser<'code, Output = Token<'code>> {
    rollback(|cursor: &mut Cursor<'code>| {
        *cursor = skip_spaces(*cursor);
        parse_keyword("true")
            .or(parse_keyword("false"))
            .with_position()
            .map(|(_, span)| Token::new(TokenKind::Bool, span))
            .parse_mut(cursor)
    })
}
