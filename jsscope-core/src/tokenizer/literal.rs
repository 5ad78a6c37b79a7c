//! # Literal Handling
//!
//! Numeric, string and template literals. Each is recognized as one raw
//! lexeme; values are never decoded.
//!
//! Template substitutions (`${ ... }`) are scanned structurally so that a `}`
//! inside a nested object literal, string or template does not end the
//! substitution early. Nesting is capped at [`MAX_TEMPLATE_NESTING`]; deeper
//! input fails hard instead of exhausting the stack.

use nom::{
    branch::alt,
    bytes::complete::{is_not, tag, take_while1},
    character::complete::{anychar, char, digit1, one_of},
    combinator::{cut, map, opt, recognize},
    error::{VerboseError, VerboseErrorKind, context},
    multi::many0,
    sequence::{pair, terminated, tuple},
};

use super::{
    comment::parse_comment,
    token::{ParserResult, TokenKind},
};

/// Deepest `${`, `{` and template nesting scanned inside one template literal.
pub const MAX_TEMPLATE_NESTING: usize = 256;

/// Error context attached when a template nests past [`MAX_TEMPLATE_NESTING`].
pub const TEMPLATE_NESTING_CONTEXT: &str = "template nesting";

fn decimal_digits(input: &str) -> ParserResult<&str> {
    recognize(pair(digit1, many0(pair(char('_'), digit1))))(input)
}

fn exponent_part(input: &str) -> ParserResult<&str> {
    recognize(tuple((one_of("eE"), opt(one_of("+-")), decimal_digits)))(input)
}

fn prefixed_integer(input: &str) -> ParserResult<&str> {
    recognize(tuple((
        char('0'),
        one_of("xXoObB"),
        take_while1(|c: char| c.is_ascii_hexdigit() || c == '_'),
    )))(input)
}

fn decimal_literal(input: &str) -> ParserResult<&str> {
    alt((
        recognize(tuple((
            decimal_digits,
            opt(pair(char('.'), opt(decimal_digits))),
            opt(exponent_part),
        ))),
        recognize(tuple((char('.'), decimal_digits, opt(exponent_part)))),
    ))(input)
}

#[tracing::instrument(level = "debug", skip(input))]
pub fn parse_numeric_literal(input: &str) -> ParserResult<TokenKind> {
    context(
        "numeric literal",
        map(
            recognize(pair(alt((prefixed_integer, decimal_literal)), opt(char('n')))),
            |_| TokenKind::NumericLiteral,
        ),
    )(input)
}

/// A backslash and the character it escapes; `\` + CRLF is one escape.
fn escape_sequence(input: &str) -> ParserResult<&str> {
    recognize(pair(char('\\'), alt((tag("\r\n"), recognize(anychar)))))(input)
}

/// A quoted string. `stops` must contain the quote, `\`, `\r` and `\n`.
fn quoted<'a>(
    quote: char,
    stops: &'static str,
) -> impl FnMut(&'a str) -> ParserResult<'a, &'a str> {
    recognize(pair(
        char(quote),
        cut(terminated(
            many0(alt((escape_sequence, is_not(stops)))),
            char(quote),
        )),
    ))
}

#[tracing::instrument(level = "debug", skip(input))]
pub fn parse_string_literal(input: &str) -> ParserResult<TokenKind> {
    context(
        "string literal",
        map(
            alt((quoted('"', "\"\\\r\n"), quoted('\'', "'\\\r\n"))),
            |_| TokenKind::StringLiteral,
        ),
    )(input)
}

fn template(input: &str, depth: usize) -> ParserResult<&str> {
    recognize(pair(
        char('`'),
        cut(terminated(
            many0(alt((
                escape_sequence,
                |i| template_substitution(i, depth),
                is_not("`\\$"),
                tag("$"),
            ))),
            char('`'),
        )),
    ))(input)
}

fn template_substitution(input: &str, depth: usize) -> ParserResult<&str> {
    recognize(pair(
        tag("${"),
        cut(terminated(|i| substitution_body(i, depth + 1), char('}'))),
    ))(input)
}

/// Fails hard once `depth` passes [`MAX_TEMPLATE_NESTING`].
fn nesting_guard(input: &str, depth: usize) -> ParserResult<()> {
    if depth > MAX_TEMPLATE_NESTING {
        return Err(nom::Err::Failure(VerboseError {
            errors: vec![(input, VerboseErrorKind::Context(TEMPLATE_NESTING_CONTEXT))],
        }));
    }
    Ok((input, ()))
}

fn substitution_body(input: &str, depth: usize) -> ParserResult<&str> {
    let (input, _) = nesting_guard(input, depth)?;
    recognize(many0(alt((
        |i| template(i, depth),
        quoted('"', "\"\\\r\n"),
        quoted('\'', "'\\\r\n"),
        recognize(parse_comment),
        recognize(pair(
            char('{'),
            cut(terminated(|i| substitution_body(i, depth + 1), char('}'))),
        )),
        is_not("{}`'\"/"),
        tag("/"),
    ))))(input)
}

#[tracing::instrument(level = "debug", skip(input))]
pub fn parse_template_literal(input: &str) -> ParserResult<TokenKind> {
    context(
        "template literal",
        map(|i| template(i, 0), |_| TokenKind::TemplateLiteral),
    )(input)
}
