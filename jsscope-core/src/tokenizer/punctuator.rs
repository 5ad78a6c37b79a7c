//! # Punctuators
//!
//! Scanning and classification are both table driven. [`PUNCTUATORS`] lists
//! every symbol the lexer accepts, longest first, so a plain prefix search
//! gives the longest match (`>>>=` before `>>>` before `>>` before `>`).
//!
//! Classification looks the raw symbol up in a static map. Symbols without a
//! dedicated kind fall back to [`TokenKind::CompoundAssignment`] when they
//! contain `=`, otherwise to [`TokenKind::Operator`].

use std::collections::HashMap;

use lazy_static::lazy_static;
use nom::error::{ErrorKind, ParseError, VerboseError};

use super::token::{ParserResult, TokenKind};

pub const PUNCTUATORS: &[&str] = &[
    ">>>=", "...", "===", "!==", "**=", "<<=", ">>=", ">>>", "&&=", "||=", "??=", "=>", "==",
    "!=", "<=", ">=", "&&", "||", "??", "?.", "++", "--", "**", "+=", "-=", "*=", "/=", "%=",
    "&=", "|=", "^=", "<<", ">>", "{", "}", "(", ")", "[", "]", ";", ",", ".", ":", "?", "<",
    ">", "+", "-", "*", "/", "%", "&", "|", "^", "!", "~", "=", "@", "#",
];

lazy_static! {
    static ref PUNCTUATOR_KINDS: HashMap<&'static str, TokenKind> = HashMap::from([
        ("(", TokenKind::OpenParen),
        (")", TokenKind::CloseParen),
        ("{", TokenKind::OpenBrace),
        ("}", TokenKind::CloseBrace),
        ("[", TokenKind::OpenBracket),
        ("]", TokenKind::CloseBracket),
        (";", TokenKind::Semicolon),
        (",", TokenKind::Comma),
        (".", TokenKind::Dot),
        (":", TokenKind::Colon),
        ("||", TokenKind::LogicalOr),
        ("&&", TokenKind::LogicalAnd),
        ("|", TokenKind::BitwiseOr),
        ("^", TokenKind::BitwiseXor),
        ("&", TokenKind::BitwiseAnd),
        ("==", TokenKind::Equality),
        ("!=", TokenKind::Inequality),
        ("===", TokenKind::StrictEquality),
        ("!==", TokenKind::StrictInequality),
        ("<", TokenKind::LessThan),
        (">", TokenKind::GreaterThan),
        ("<=", TokenKind::LessThanOrEqual),
        (">=", TokenKind::GreaterThanOrEqual),
        ("+", TokenKind::Plus),
        ("-", TokenKind::Minus),
        ("*", TokenKind::Multiply),
        ("/", TokenKind::Divide),
        ("%", TokenKind::Modulo),
        ("**", TokenKind::Exponent),
        ("++", TokenKind::Increment),
        ("--", TokenKind::Decrement),
        ("!", TokenKind::LogicalNot),
        ("~", TokenKind::BitwiseNot),
        ("=>", TokenKind::Arrow),
        ("...", TokenKind::Ellipsis),
        ("=", TokenKind::Assignment),
    ]);
}

pub fn classify_punctuator(symbol: &str) -> TokenKind {
    if let Some(kind) = PUNCTUATOR_KINDS.get(symbol) {
        return *kind;
    }
    if symbol.contains('=') {
        TokenKind::CompoundAssignment
    } else {
        TokenKind::Operator
    }
}

#[tracing::instrument(level = "debug", skip(input))]
pub fn parse_punctuator(input: &str) -> ParserResult<TokenKind> {
    match PUNCTUATORS.iter().find(|symbol| input.starts_with(**symbol)) {
        Some(symbol) => Ok((&input[symbol.len()..], classify_punctuator(symbol))),
        None => Err(nom::Err::Error(VerboseError::from_error_kind(
            input,
            ErrorKind::Tag,
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_longest_first() {
        for pair in PUNCTUATORS.windows(2) {
            assert!(
                pair[0].len() >= pair[1].len(),
                "{} listed before {}",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn test_every_named_symbol_is_scannable() {
        for symbol in PUNCTUATOR_KINDS.keys() {
            assert!(PUNCTUATORS.contains(symbol), "missing {}", symbol);
        }
    }

    #[test]
    fn test_longest_match() {
        let cases = [
            ("===x", TokenKind::StrictEquality, "x"),
            ("==x", TokenKind::Equality, "x"),
            ("=>x", TokenKind::Arrow, "x"),
            ("...x", TokenKind::Ellipsis, "x"),
            ("**2", TokenKind::Exponent, "2"),
            ("++i", TokenKind::Increment, "i"),
            ("!==y", TokenKind::StrictInequality, "y"),
            (">>>=1", TokenKind::CompoundAssignment, "1"),
        ];
        for (input, kind, rest) in cases {
            let (remaining, parsed) = parse_punctuator(input).unwrap();
            assert_eq!(parsed, kind, "input: {}", input);
            assert_eq!(remaining, rest, "input: {}", input);
        }
    }

    #[test]
    fn test_fallback_buckets() {
        for symbol in ["+=", "-=", "**=", "??=", "&&=", "<<="] {
            assert_eq!(
                classify_punctuator(symbol),
                TokenKind::CompoundAssignment,
                "symbol: {}",
                symbol
            );
        }
        for symbol in ["??", "?.", "?", "<<", ">>>", "@", "#"] {
            assert_eq!(
                classify_punctuator(symbol),
                TokenKind::Operator,
                "symbol: {}",
                symbol
            );
        }
    }

    #[test]
    fn test_unknown_symbol() {
        assert!(parse_punctuator("\\n").is_err());
        assert!(parse_punctuator("").is_err());
    }
}
