//! ASCII character classes over a cursor position
//!
//! Every predicate looks at the character under the cursor without advancing
//! it and is false at end of input.

use crate::cursor::Cursor;

fn peek_is(cursor: &Cursor<'_>, predicate: impl Fn(char) -> bool) -> bool {
    cursor.peek().is_some_and(predicate)
}

pub fn is_end(cursor: &Cursor<'_>) -> bool {
    cursor.is_end()
}

pub fn is_digit(cursor: &Cursor<'_>) -> bool {
    peek_is(cursor, |c| c.is_ascii_digit())
}

pub fn is_nonzero_digit(cursor: &Cursor<'_>) -> bool {
    peek_is(cursor, |c| ('1'..='9').contains(&c))
}

pub fn is_octal_digit(cursor: &Cursor<'_>) -> bool {
    peek_is(cursor, |c| ('0'..='7').contains(&c))
}

pub fn is_hex_digit(cursor: &Cursor<'_>) -> bool {
    peek_is(cursor, |c| c.is_ascii_hexdigit())
}

pub fn is_upper(cursor: &Cursor<'_>) -> bool {
    peek_is(cursor, |c| c.is_ascii_uppercase())
}

pub fn is_lower(cursor: &Cursor<'_>) -> bool {
    peek_is(cursor, |c| c.is_ascii_lowercase())
}

pub fn is_alpha(cursor: &Cursor<'_>) -> bool {
    is_upper(cursor) || is_lower(cursor)
}

/// First character of an identifier: `[A-Za-z_]`
pub fn is_letter_head(cursor: &Cursor<'_>) -> bool {
    is_alpha(cursor) || peek_is(cursor, |c| c == '_')
}

/// Any later identifier character: `[A-Za-z0-9_-]`
pub fn is_letter_tail(cursor: &Cursor<'_>) -> bool {
    is_letter_head(cursor) || is_digit(cursor) || peek_is(cursor, |c| c == '-')
}

pub fn is_endline(cursor: &Cursor<'_>) -> bool {
    peek_is(cursor, |c| c == '\n' || c == '\r')
}

pub fn is_space_noendline(cursor: &Cursor<'_>) -> bool {
    peek_is(cursor, |c| c == ' ' || c == '\t')
}

pub fn is_space(cursor: &Cursor<'_>) -> bool {
    is_space_noendline(cursor) || is_endline(cursor)
}

/// Advance while `predicate` holds
pub fn skip_while<'code>(
    mut cursor: Cursor<'code>,
    predicate: impl Fn(&Cursor<'code>) -> bool,
) -> Cursor<'code> {
    while predicate(&cursor) {
        cursor = cursor.advance();
    }
    cursor
}

pub fn skip_spaces(cursor: Cursor<'_>) -> Cursor<'_> {
    skip_while(cursor, is_space)
}

/// Skip blanks but stop at a line break
pub fn skip_spaces_noendline(cursor: Cursor<'_>) -> Cursor<'_> {
    skip_while(cursor, is_space_noendline)
}

/// Skip to the next line break or end of input
pub fn skip_noendline(cursor: Cursor<'_>) -> Cursor<'_> {
    skip_while(cursor, |c| !c.is_end() && !is_endline(c))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::Source;
    use rstest::rstest;

    type Classifier = fn(&Cursor<'_>) -> bool;

    #[rstest]
    #[case(is_digit, "7", true)]
    #[case(is_digit, "a", false)]
    #[case(is_nonzero_digit, "0", false)]
    #[case(is_nonzero_digit, "9", true)]
    #[case(is_octal_digit, "7", true)]
    #[case(is_octal_digit, "8", false)]
    #[case(is_hex_digit, "f", true)]
    #[case(is_hex_digit, "G", false)]
    #[case(is_upper, "Q", true)]
    #[case(is_upper, "q", false)]
    #[case(is_lower, "z", true)]
    #[case(is_lower, "[", false)]
    #[case(is_lower, "Z", false)]
    #[case(is_alpha, "m", true)]
    #[case(is_letter_head, "_", true)]
    #[case(is_letter_head, "1", false)]
    #[case(is_letter_tail, "-", true)]
    #[case(is_letter_tail, "5", true)]
    #[case(is_letter_tail, ".", false)]
    #[case(is_endline, "\r", true)]
    #[case(is_endline, " ", false)]
    #[case(is_space_noendline, "\t", true)]
    #[case(is_space_noendline, "\n", false)]
    #[case(is_space, "\n", true)]
    #[case(is_lower, "é", false)]
    fn test_classifier(
        #[case] classifier: Classifier,
        #[case] input: &str,
        #[case] expected: bool,
    ) {
        let source = Source::from_string(input);
        assert_eq!(classifier(&source.cursor()), expected);
    }

    #[rstest]
    #[case(is_digit)]
    #[case(is_upper)]
    #[case(is_lower)]
    #[case(is_alpha)]
    #[case(is_letter_head)]
    #[case(is_letter_tail)]
    #[case(is_endline)]
    #[case(is_space_noendline)]
    #[case(is_space)]
    fn test_classifier_false_at_end(#[case] classifier: Classifier) {
        let source = Source::from_string("");
        assert!(!classifier(&source.cursor()));
    }

    #[test]
    fn test_classifier_does_not_advance() {
        let source = Source::from_string("1");
        let cursor = source.cursor();
        assert!(is_digit(&cursor));
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_skip_spaces() {
        let source = Source::from_string(" \t\n\r x");
        let cursor = skip_spaces(source.cursor());
        assert_eq!(cursor.peek(), Some('x'));
    }

    #[test]
    fn test_skip_spaces_noendline_stops_at_newline() {
        let source = Source::from_string(" \t\nx");
        let cursor = skip_spaces_noendline(source.cursor());
        assert_eq!(cursor.peek(), Some('\n'));
    }

    #[test]
    fn test_skip_noendline() {
        let source = Source::from_string("# comment\r\nnext");
        let cursor = skip_noendline(source.cursor());
        assert_eq!(cursor.rest(), "\r\nnext");

        let source = Source::from_string("no break");
        assert!(skip_noendline(source.cursor()).is_end());
    }

    #[test]
    fn test_skip_spaces_all_whitespace() {
        let source = Source::from_string("   ");
        assert!(skip_spaces(source.cursor()).is_end());
    }
}
