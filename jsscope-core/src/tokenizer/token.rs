use nom::{
    IResult,
    branch::alt,
    error::{VerboseError, VerboseErrorKind},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

use super::{
    comment::parse_comment,
    keyword::parse_identifier,
    literal::{
        TEMPLATE_NESTING_CONTEXT, parse_numeric_literal, parse_string_literal,
        parse_template_literal,
    },
    punctuator::parse_punctuator,
    whitespace::{count_line_terminators, parse_line_terminator, parse_whitespace},
};

/// The closed set of token kinds either tokenizer may produce.
///
/// `Whitespace`, `LineTerminator` and `Comment` exist so the lexer can track
/// lines through them; they are never emitted.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    ToSchema,
    strum::Display,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenKind {
    Identifier,
    Keyword,
    NumericLiteral,
    StringLiteral,
    TemplateLiteral,
    /// Any other non-whitespace run (coarse tokenizer only).
    Literal,
    /// Structural punctuation (coarse tokenizer only).
    Punctuation,

    OpenParen,
    CloseParen,
    OpenBrace,
    CloseBrace,
    OpenBracket,
    CloseBracket,
    Semicolon,
    Comma,
    Dot,
    Colon,

    LogicalOr,
    LogicalAnd,
    BitwiseOr,
    BitwiseXor,
    BitwiseAnd,
    Equality,
    Inequality,
    StrictEquality,
    StrictInequality,
    LessThan,
    GreaterThan,
    LessThanOrEqual,
    GreaterThanOrEqual,
    Plus,
    Minus,
    Multiply,
    Divide,
    Modulo,
    Exponent,
    Increment,
    Decrement,
    LogicalNot,
    BitwiseNot,
    Arrow,
    Ellipsis,
    Assignment,
    /// Any other symbol containing `=`.
    CompoundAssignment,
    /// Last-resort bucket for symbols with no dedicated kind.
    Operator,

    Whitespace,
    LineTerminator,
    Comment,
}

impl TokenKind {
    /// Formatting kinds that advance line tracking but are never emitted.
    pub fn is_trivia(&self) -> bool {
        matches!(
            self,
            TokenKind::Whitespace | TokenKind::LineTerminator | TokenKind::Comment
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// 1-based line the lexeme starts on.
    pub line: usize,
    pub kind: TokenKind,
    /// Raw lexeme.
    pub text: String,
}

impl Token {
    pub fn new(line: usize, kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            line,
            kind,
            text: text.into(),
        }
    }
}

pub type ParserResult<'a, T> = IResult<&'a str, T, VerboseError<&'a str>>;

/// Why the lexer stopped before the end of its input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexerError {
    #[error("Invalid character '{found}'")]
    InvalidCharacter { found: char, line: usize },

    #[error("Unterminated string literal")]
    UnterminatedString { line: usize },

    #[error("Unterminated template literal")]
    UnterminatedTemplate { line: usize },

    #[error("Unterminated comment")]
    UnterminatedComment { line: usize },

    #[error("Template literal nested too deeply")]
    NestingTooDeep { line: usize },
}

impl LexerError {
    /// Describes the failure at the start of `remaining`.
    fn at(remaining: &str, line: usize) -> Self {
        if remaining.starts_with("/*") {
            return LexerError::UnterminatedComment { line };
        }
        match remaining.chars().next() {
            Some('"') | Some('\'') => LexerError::UnterminatedString { line },
            Some('`') => LexerError::UnterminatedTemplate { line },
            Some(found) => LexerError::InvalidCharacter { found, line },
            None => LexerError::InvalidCharacter { found: '\0', line },
        }
    }

    pub fn line(&self) -> usize {
        match self {
            LexerError::InvalidCharacter { line, .. }
            | LexerError::UnterminatedString { line }
            | LexerError::UnterminatedTemplate { line }
            | LexerError::UnterminatedComment { line }
            | LexerError::NestingTooDeep { line } => *line,
        }
    }
}

/// Tokens collected by a scan, plus the reason it stopped early, if it did.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanOutcome {
    pub tokens: Vec<Token>,
    pub error: Option<LexerError>,
}

/// Stateful fine-grained lexer.
#[derive(Debug, Clone)]
pub struct Lexer {
    current_position: usize,
    current_line: usize,
}

impl Default for Lexer {
    fn default() -> Self {
        Self::new()
    }
}

impl Lexer {
    pub fn new() -> Self {
        Self {
            current_position: 0,
            current_line: 1, // 1-based
        }
    }

    /// Line the next lexeme would start on.
    pub fn current_line(&self) -> usize {
        self.current_line
    }

    #[tracing::instrument(level = "debug", skip(self, input))]
    pub fn scan(&mut self, input: &str) -> ScanOutcome {
        let mut tokens = Vec::new();
        let mut remaining = input;

        while !remaining.is_empty() {
            let start_line = self.current_line;

            let error = match parse_lexeme(remaining) {
                Ok((new_remaining, kind)) if new_remaining.len() < remaining.len() => {
                    let consumed = &remaining[..(remaining.len() - new_remaining.len())];
                    self.current_position += consumed.len();
                    self.current_line += count_line_terminators(consumed);

                    if !kind.is_trivia() {
                        tokens.push(Token::new(start_line, kind, consumed));
                    }

                    remaining = new_remaining;
                    continue;
                }
                Err(nom::Err::Failure(e)) if hit_nesting_limit(&e) => {
                    LexerError::NestingTooDeep { line: start_line }
                }
                _ => LexerError::at(remaining, start_line),
            };

            tracing::warn!(
                position = self.current_position,
                "Scan stopped early: {} at line {}",
                error,
                start_line
            );
            return ScanOutcome {
                tokens,
                error: Some(error),
            };
        }

        ScanOutcome {
            tokens,
            error: None,
        }
    }
}

fn hit_nesting_limit(error: &VerboseError<&str>) -> bool {
    error.errors.iter().any(|(_, kind)| {
        matches!(kind, VerboseErrorKind::Context(context) if *context == TEMPLATE_NESTING_CONTEXT)
    })
}

/// Scans exactly one lexeme, trivia included.
#[tracing::instrument(level = "debug", skip(input))]
pub fn parse_lexeme(input: &str) -> ParserResult<TokenKind> {
    alt((
        // Formatting
        parse_line_terminator,
        parse_whitespace,
        parse_comment,
        // Literals
        parse_template_literal,
        parse_string_literal,
        parse_numeric_literal,
        // Code elements
        parse_identifier,
        parse_punctuator,
    ))(input)
}
