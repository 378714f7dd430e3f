//! # Kizuna - Backtracking Literal Parser
//!
//! Recognizes literal tokens (decimal, octal and hexadecimal integers, doubles,
//! booleans, strings, identifiers) in a text buffer and returns the matched
//! lexeme with the unconsumed rest, or a diagnostic pointing at the offending
//! line and column.
//!
//! - **Copyable cursors**: a saved cursor is a backtrack point
//! - **No partial consumption**: rules built with [`rollback`] leave the
//!   caller's cursor untouched when they fail
//! - **Complete reports**: when every alternative of an [`or`] fails, the error
//!   lists all of them
//!
//! ```
//! use kizuna::{Parser, Source, literal::int_literal};
//!
//! let source = Source::from_string("0x1F rest");
//! let (token, cursor) = int_literal().parse(source.cursor()).unwrap();
//! assert_eq!(token.lexeme(), "0x1F");
//! assert_eq!(cursor.rest(), " rest");
//! ```

pub mod char;
pub mod classify;
pub mod cursor;
pub mod error;
pub mod keyword;
pub mod literal;
pub mod map;
pub mod or;
pub mod parser;
pub mod position;
pub mod rollback;
pub mod rule;
pub mod source;
pub mod token;

pub use cursor::Cursor;
pub use error::{CodeLoc, Diagnostic, ErrorKind, ParseError, ReadablePosition, Severity};
pub use map::{Map, MapExt};
pub use or::{OrExt, or};
pub use parser::Parser;
pub use position::{Position, PositionExt, Span, position};
pub use rollback::{Rollback, rollback};
pub use rule::Rule;
pub use source::Source;
pub use token::{Token, TokenKind};
