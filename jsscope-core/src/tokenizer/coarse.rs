//! # Coarse Tokenizer
//!
//! A single-regex classifier that sorts source text into four buckets:
//! KEYWORD, ARROW, PUNCTUATION and LITERAL (any other non-whitespace run).
//!
//! Lines are attributed from each match's absolute byte offset, so a lexeme
//! repeated on the same line is never credited to the wrong occurrence.

use lazy_static::lazy_static;
use regex::Regex;

use super::{
    token::{Token, TokenKind},
    whitespace::count_line_terminators,
};

const COARSE_PATTERN: &str = r"(?:import|from|export|default|const|let|var|function|return)\b|=>|[{}()\[\];,.:]|\S+";

lazy_static! {
    static ref COARSE_REGEX: Option<Regex> = match Regex::new(COARSE_PATTERN) {
        Ok(regex) => Some(regex),
        Err(e) => {
            tracing::error!("Failed to compile coarse token pattern: {}", e);
            None
        }
    };
}

fn classify(lexeme: &str) -> TokenKind {
    match lexeme {
        "import" | "from" | "export" | "default" | "const" | "let" | "var" | "function"
        | "return" => TokenKind::Keyword,
        "=>" => TokenKind::Arrow,
        "{" | "}" | "(" | ")" | "[" | "]" | ";" | "," | "." | ":" => TokenKind::Punctuation,
        _ => TokenKind::Literal,
    }
}

#[tracing::instrument(level = "debug", skip(code))]
pub fn tokenize_coarse(code: &str) -> Vec<Token> {
    let Some(pattern) = COARSE_REGEX.as_ref() else {
        return Vec::new();
    };

    let mut tokens = Vec::new();
    let mut line = 1;
    let mut cursor = 0;

    for found in pattern.find_iter(code) {
        line += count_line_terminators(&code[cursor..found.start()]);
        cursor = found.end();
        tokens.push(Token::new(line, classify(found.as_str()), found.as_str()));
    }

    tokens
}
