use crate::position::Span;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TokenKind {
    DecimalInt,
    OctalInt,
    HexadecimalInt,
    Double,
    Bool,
    String,
    Identifier,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::DecimalInt => "decimal int",
            TokenKind::OctalInt => "octal int",
            TokenKind::HexadecimalInt => "hexadecimal int",
            TokenKind::Double => "double",
            TokenKind::Bool => "bool",
            TokenKind::String => "string",
            TokenKind::Identifier => "identifier",
        };
        f.write_str(name)
    }
}

/// A matched lexeme and what rule matched it
///
/// The lexeme is carried verbatim; the decoding helpers below are
/// conveniences for callers and never run during parsing.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Token<'code> {
    kind: TokenKind,
    span: Span<'code>,
}

impl<'code> Token<'code> {
    pub fn new(kind: TokenKind, span: Span<'code>) -> Self {
        Self { kind, span }
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn span(&self) -> Span<'code> {
        self.span
    }

    pub fn lexeme(&self) -> &'code str {
        self.span.as_str()
    }

    /// Radix of an integer token
    pub fn radix(&self) -> Option<u32> {
        match self.kind {
            TokenKind::DecimalInt => Some(10),
            TokenKind::OctalInt => Some(8),
            TokenKind::HexadecimalInt => Some(16),
            _ => None,
        }
    }

    /// Value of an integer token; `None` for other kinds or on overflow
    pub fn to_i64(&self) -> Option<i64> {
        let radix = self.radix()?;
        let lexeme = self.lexeme();
        let (negative, digits) = match lexeme.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, lexeme),
        };
        let digits = match self.kind {
            TokenKind::HexadecimalInt => &digits[2..],
            TokenKind::OctalInt => &digits[1..],
            _ => digits,
        };
        let magnitude = u64::from_str_radix(digits, radix).ok()?;
        if negative {
            if magnitude > i64::MAX as u64 + 1 {
                return None;
            }
            Some((magnitude as i64).wrapping_neg())
        } else {
            i64::try_from(magnitude).ok()
        }
    }

    pub fn to_f64(&self) -> Option<f64> {
        match self.kind {
            TokenKind::Double => self.lexeme().parse().ok(),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match (self.kind, self.lexeme()) {
            (TokenKind::Bool, "true") => Some(true),
            (TokenKind::Bool, "false") => Some(false),
            _ => None,
        }
    }

    /// Contents of a string token without quotes, each `\c` replaced by `c`
    pub fn unescaped(&self) -> Option<String> {
        if self.kind != TokenKind::String {
            return None;
        }
        let lexeme = self.lexeme();
        let inner = lexeme.get(1..lexeme.len().saturating_sub(1))?;
        let mut out = String::with_capacity(inner.len());
        let mut chars = inner.chars();
        while let Some(c) = chars.next() {
            match c {
                '\\' => out.extend(chars.next()),
                _ => out.push(c),
            }
        }
        Some(out)
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.lexeme())
    }
}
