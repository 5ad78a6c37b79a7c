//! # Whitespace and Line Terminators
//!
//! Both are scanned as real lexemes so the lexer can count lines through
//! them, then dropped before tokens are emitted.
//!
//! Line terminators follow ECMAScript: `\r\n` (one terminator), `\n`, `\r`,
//! U+2028 and U+2029.

use nom::{
    branch::alt,
    bytes::complete::{tag, take_while1},
    combinator::map,
    error::context,
};

use super::token::{ParserResult, TokenKind};

pub fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

fn is_whitespace(c: char) -> bool {
    !is_line_terminator(c) && (c.is_whitespace() || c == '\u{FEFF}')
}

#[tracing::instrument(level = "debug", skip(input))]
pub fn parse_whitespace(input: &str) -> ParserResult<TokenKind> {
    context(
        "whitespace",
        map(take_while1(is_whitespace), |_| TokenKind::Whitespace),
    )(input)
}

#[tracing::instrument(level = "debug", skip(input))]
pub fn parse_line_terminator(input: &str) -> ParserResult<TokenKind> {
    context(
        "line terminator",
        map(
            alt((
                tag("\r\n"),
                tag("\n"),
                tag("\r"),
                tag("\u{2028}"),
                tag("\u{2029}"),
            )),
            |_| TokenKind::LineTerminator,
        ),
    )(input)
}

/// Number of line terminators in `text`, counting `\r\n` once.
pub fn count_line_terminators(text: &str) -> usize {
    let mut count = 0;
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                count += 1;
            }
            '\n' | '\u{2028}' | '\u{2029}' => count += 1,
            _ => {}
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace() {
        let (rest, kind) = parse_whitespace(" \t\u{00A0}x").unwrap();
        assert_eq!(kind, TokenKind::Whitespace);
        assert_eq!(rest, "x");
    }

    #[test]
    fn test_whitespace_stops_at_newline() {
        let (rest, _) = parse_whitespace("  \nx").unwrap();
        assert_eq!(rest, "\nx");
    }

    #[test]
    fn test_line_terminators() {
        for (input, rest) in [("\r\nx", "x"), ("\nx", "x"), ("\rx", "x"), ("\u{2028}x", "x")] {
            let (remaining, kind) = parse_line_terminator(input).unwrap();
            assert_eq!(kind, TokenKind::LineTerminator);
            assert_eq!(remaining, rest);
        }
    }

    #[test]
    fn test_error() {
        assert!(parse_whitespace("x").is_err());
        assert!(parse_line_terminator(" ").is_err());
    }

    #[test]
    fn test_count_line_terminators() {
        assert_eq!(count_line_terminators(""), 0);
        assert_eq!(count_line_terminators("a\nb"), 1);
        assert_eq!(count_line_terminators("a\r\nb\rc\n"), 3);
        assert_eq!(count_line_terminators("\u{2028}\u{2029}"), 2);
    }
}
