use crate::cursor::Cursor;
use crate::source::Source;
use std::borrow::Cow;
use std::fmt;

/// What went wrong at a single location
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ErrorKind {
    #[error("not decimal int literal")]
    NotDecimalIntLiteral,
    #[error("not octal int literal")]
    NotOctalIntLiteral,
    #[error("not hexadecimal int literal")]
    NotHexadecimalIntLiteral,
    #[error("not double literal")]
    NotDoubleLiteral,
    #[error("not string literal")]
    NotStringLiteral,
    #[error("not identifier")]
    NotIdentifier,
    #[error("expected keyword '{0}'")]
    ExpectedKeyword(Cow<'static, str>),
    #[error("expected {expected}, found '{found}'")]
    Mismatch {
        expected: Cow<'static, str>,
        found: char,
    },
    #[error("unknown literal suffix")]
    UnknownLiteralSuffix,
    #[error("unterminated string literal")]
    UnterminatedString,
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,
    #[error("expected end of input")]
    ExpectedEndOfInput,
}

/// Line, column and line text of a location, all resolved in one scan
#[derive(Debug, PartialEq, Eq)]
pub struct ReadablePosition<'code> {
    /// 1-based
    pub line: usize,
    /// 1-based, counted in characters
    pub column: usize,
    pub line_text: &'code str,
}

/// A location inside a source
#[derive(Debug, Copy, Clone)]
pub struct CodeLoc<'code> {
    source: &'code Source,
    loc: usize,
}

impl<'code> CodeLoc<'code> {
    pub fn new(source: &'code Source, loc: usize) -> Self {
        Self {
            source,
            loc: loc.min(source.len()),
        }
    }

    pub fn position(&self) -> usize {
        self.loc
    }

    pub fn source(&self) -> &'code Source {
        self.source
    }

    /// `\n`, `\r` and `\r\n` each end exactly one line.
    pub fn readable_position(&self) -> ReadablePosition<'code> {
        let text = self.source.content();
        let mut line = 1;
        let mut line_start = 0;
        let mut chars = text.char_indices().peekable();

        while let Some((i, ch)) = chars.next() {
            if i >= self.loc {
                break;
            }
            match ch {
                '\r' => {
                    let mut end = i + 1;
                    if let Some(&(j, '\n')) = chars.peek() {
                        if j < self.loc {
                            chars.next();
                            end = j + 1;
                        } else {
                            // the location is the '\n' of a "\r\n": it belongs to
                            // the line the '\r' ends
                            continue;
                        }
                    }
                    line += 1;
                    line_start = end;
                }
                '\n' => {
                    line += 1;
                    line_start = i + 1;
                }
                _ => {}
            }
        }

        let line_start = line_start.min(self.loc);
        let column = text[line_start..self.loc].chars().count() + 1;
        let line_end = text[line_start..]
            .find(['\n', '\r'])
            .map_or(text.len(), |offset| line_start + offset);

        ReadablePosition {
            line,
            column,
            line_text: &text[line_start..line_end],
        }
    }
}

/// Label printed in front of a diagnostic message
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Severity {
    Suggestion,
    Warning,
    #[default]
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Severity::Suggestion => "suggestion",
            Severity::Warning => "warning",
            Severity::Error => "error",
        };
        f.write_str(label)
    }
}

/// One record of a [`ParseError`]
#[derive(Debug, Clone)]
pub struct Diagnostic<'code> {
    pub kind: ErrorKind,
    pub loc: CodeLoc<'code>,
    pub severity: Severity,
}

impl<'code> Diagnostic<'code> {
    pub fn new(kind: ErrorKind, loc: CodeLoc<'code>) -> Self {
        Self {
            kind,
            loc,
            severity: Severity::default(),
        }
    }

    /// ```text
    /// <name>:<line>:<col>: <severity>: <message>
    /// <source line>
    ///     ^
    /// ```
    pub fn render(&self) -> String {
        let pos = self.loc.readable_position();
        format!(
            "{}:{}:{}: {}: {}\n{}\n{}^",
            self.loc.source().name(),
            pos.line,
            pos.column,
            self.severity,
            self.kind,
            pos.line_text,
            " ".repeat(pos.column - 1)
        )
    }
}

/// Failure of a parsing rule
///
/// Holds at least one diagnostic. Alternatives that all fail merge their
/// errors, so the final report lists every rule that was tried, in the order
/// they were tried.
#[derive(Debug, Clone)]
pub struct ParseError<'code> {
    diagnostics: Vec<Diagnostic<'code>>,
}

impl<'code> ParseError<'code> {
    pub fn new(kind: ErrorKind, at: Cursor<'code>) -> Self {
        Self::at(kind, at.loc())
    }

    pub fn at(kind: ErrorKind, loc: CodeLoc<'code>) -> Self {
        Self {
            diagnostics: vec![Diagnostic::new(kind, loc)],
        }
    }

    /// Shorthand for a mismatch against the character under `at`
    ///
    /// At end of input this becomes [`ErrorKind::UnexpectedEndOfInput`].
    pub fn mismatch(expected: impl Into<Cow<'static, str>>, at: Cursor<'code>) -> Self {
        match at.peek() {
            Some(found) => Self::new(
                ErrorKind::Mismatch {
                    expected: expected.into(),
                    found,
                },
                at,
            ),
            None => Self::new(ErrorKind::UnexpectedEndOfInput, at),
        }
    }

    /// Relabel every diagnostic
    pub fn with_severity(mut self, severity: Severity) -> Self {
        for diagnostic in &mut self.diagnostics {
            diagnostic.severity = severity;
        }
        self
    }

    /// Union of both errors, `self` first
    pub fn merge(mut self, other: ParseError<'code>) -> Self {
        self.diagnostics.extend(other.diagnostics);
        self
    }

    pub fn diagnostics(&self) -> &[Diagnostic<'code>] {
        &self.diagnostics
    }

    pub fn kinds(&self) -> impl Iterator<Item = &ErrorKind> {
        self.diagnostics.iter().map(|d| &d.kind)
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    /// Never true for errors built through `new`, `at` or `merge`
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Offset of the first diagnostic
    pub fn position(&self) -> usize {
        self.diagnostics
            .first()
            .map_or(0, |diagnostic| diagnostic.loc.position())
    }

    pub fn contains(&self, kind: &ErrorKind) -> bool {
        self.kinds().any(|k| k == kind)
    }

    /// Render every diagnostic, separated by blank lines
    pub fn render(&self) -> String {
        self.diagnostics
            .iter()
            .map(Diagnostic::render)
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

impl fmt::Display for ParseError<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl std::error::Error for ParseError<'_> {}
