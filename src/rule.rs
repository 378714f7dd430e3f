use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::keyword::end_of_input;
use crate::literal;
use crate::parser::Parser;
use crate::source::Source;
use crate::token::Token;
use std::fmt;

/// Top-level rules that can be selected by name
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Rule {
    #[default]
    Literal,
    Int,
    Decimal,
    Octal,
    #[value(alias = "hex")]
    Hexadecimal,
    Double,
    Bool,
    String,
    Identifier,
}

impl Rule {
    pub fn parse<'code>(
        self,
        cursor: Cursor<'code>,
    ) -> Result<(Token<'code>, Cursor<'code>), ParseError<'code>> {
        match self {
            Rule::Literal => literal::literal().parse(cursor),
            Rule::Int => literal::int_literal().parse(cursor),
            Rule::Decimal => literal::decimal_int_literal().parse(cursor),
            Rule::Octal => literal::octal_int_literal().parse(cursor),
            Rule::Hexadecimal => literal::hexadecimal_int_literal().parse(cursor),
            Rule::Double => literal::double_literal().parse(cursor),
            Rule::Bool => literal::bool_literal().parse(cursor),
            Rule::String => literal::string_literal().parse(cursor),
            Rule::Identifier => literal::identifier().parse(cursor),
        }
    }

    /// Run the rule from the start of `source`
    ///
    /// With `complete`, anything but trailing whitespace after the match is an
    /// error.
    pub fn run<'code>(
        self,
        source: &'code Source,
        complete: bool,
    ) -> Result<(Token<'code>, Cursor<'code>), ParseError<'code>> {
        log::debug!("running rule {self} on {}", source.name());
        let (token, cursor) = self.parse(source.cursor())?;
        log::debug!("matched {} {:?}", token.kind(), token.lexeme());
        if complete {
            end_of_input().parse(cursor)?;
        }
        Ok((token, cursor))
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Rule::Literal => "literal",
            Rule::Int => "int",
            Rule::Decimal => "decimal",
            Rule::Octal => "octal",
            Rule::Hexadecimal => "hexadecimal",
            Rule::Double => "double",
            Rule::Bool => "bool",
            Rule::String => "string",
            Rule::Identifier => "identifier",
        };
        f.write_str(name)
    }
}
