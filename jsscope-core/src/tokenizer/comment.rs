//! # Comment Handling
//!
//! Line comments (`// ...`) run to the next line terminator, which is left for
//! the line terminator parser. Block comments (`/* ... */`) may span lines;
//! an unterminated block comment is a hard failure so the scan stops there
//! instead of reading the `/` as a division.

use nom::{
    branch::alt,
    bytes::complete::{tag, take_till, take_until},
    combinator::{cut, map, recognize},
    error::context,
    sequence::{pair, terminated},
};

use super::{
    token::{ParserResult, TokenKind},
    whitespace::is_line_terminator,
};

#[tracing::instrument(level = "debug", skip(input))]
pub fn parse_line_comment(input: &str) -> ParserResult<TokenKind> {
    context(
        "line comment",
        map(
            recognize(pair(tag("//"), take_till(is_line_terminator))),
            |_| TokenKind::Comment,
        ),
    )(input)
}

#[tracing::instrument(level = "debug", skip(input))]
pub fn parse_block_comment(input: &str) -> ParserResult<TokenKind> {
    context(
        "block comment",
        map(
            recognize(pair(tag("/*"), cut(terminated(take_until("*/"), tag("*/"))))),
            |_| TokenKind::Comment,
        ),
    )(input)
}

#[tracing::instrument(level = "debug", skip(input))]
pub fn parse_comment(input: &str) -> ParserResult<TokenKind> {
    alt((parse_line_comment, parse_block_comment))(input)
}
