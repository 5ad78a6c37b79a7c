//! # Identifiers and Reserved Words
//!
//! An identifier starts with a letter, `_` or `$` and continues with letters,
//! digits, `_` or `$`. Unicode letters are accepted so JSX text such as
//! `Añade` scans as a run of identifiers.
//!
//! Reserved words are recognized after the whole word is read, so `constant`
//! is an identifier and not `const` followed by `ant`.

use nom::{
    bytes::complete::{take_while, take_while1},
    combinator::recognize,
    error::context,
    sequence::pair,
};

use super::token::{ParserResult, TokenKind};

/// ECMAScript reserved words, including the strict-mode and future ones.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    strum::EnumString,
    strum::Display,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[strum(serialize_all = "lowercase")]
pub enum Keyword {
    Break,
    Case,
    Catch,
    Class,
    Const,
    Continue,
    Debugger,
    Default,
    Delete,
    Do,
    Else,
    Enum,
    Export,
    Extends,
    False,
    Finally,
    For,
    Function,
    If,
    Import,
    In,
    InstanceOf,
    Interface,
    Let,
    New,
    Null,
    Package,
    Private,
    Protected,
    Public,
    Return,
    Static,
    Super,
    Switch,
    This,
    Throw,
    True,
    Try,
    TypeOf,
    Var,
    Void,
    While,
    With,
    Yield,
}

pub fn is_identifier_start(c: char) -> bool {
    c.is_alphabetic() || c == '_' || c == '$'
}

pub fn is_identifier_part(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

#[tracing::instrument(level = "debug", skip(input))]
pub fn parse_identifier(input: &str) -> ParserResult<TokenKind> {
    let (input, word) = context(
        "identifier",
        recognize(pair(
            take_while1(is_identifier_start),
            take_while(is_identifier_part),
        )),
    )(input)?;

    if Keyword::try_from(word).is_ok() {
        return Ok((input, TokenKind::Keyword));
    }

    Ok((input, TokenKind::Identifier))
}
