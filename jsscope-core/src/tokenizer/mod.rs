//! # Tokenizer Component
//!
//! Turns source text into an ordered sequence of [`Token`](token::Token)s for
//! display. The output is best effort: it is not a conformant ECMAScript
//! token stream and no AST is built from it.
//!
//! ## Modes
//!
//! * [`TokenizerMode::Lexer`] (default): a nom-driven lexer with a closed,
//!   fine-grained taxonomy (identifiers, literals, reserved words, every
//!   punctuator). Whitespace, line terminators and comments are scanned so
//!   line numbers stay correct across multi-line strings, templates and
//!   comments, then filtered out.
//! * [`TokenizerMode::Coarse`]: a single regex that only distinguishes
//!   keywords, `=>`, punctuation and everything else.
//!
//! ## Component Structure
//!
//! * [`token`]: token types, the [`Lexer`](token::Lexer) driver and its errors
//! * [`keyword`]: identifiers and reserved words
//! * [`punctuator`]: operator and delimiter table
//! * [`literal`]: numeric, string and template literals
//! * [`whitespace`]: whitespace and line terminators
//! * [`comment`]: line and block comments
//! * [`coarse`]: the regex classifier
//!
//! ## Error Handling
//!
//! Tokenizing never fails. When the lexer reaches text it cannot scan it
//! stops there and returns the tokens collected so far; the reason is
//! available from [`Lexer::scan`](token::Lexer::scan) as a
//! [`LexerError`](token::LexerError).
//!
//! Known early stops on valid code:
//!
//! * regular expression literals are not recognized; `/` is always a
//!   division punctuator, so a body like `\d` or `'` in `/\d+/` or `/'/`
//!   stops the scan
//! * template literals nested deeper than
//!   [`MAX_TEMPLATE_NESTING`](literal::MAX_TEMPLATE_NESTING)
//!
//! ## Usage Example
//!
//! ```rust
//! use jsscope_core::tokenizer::{TokenizerMode, tokenize, token::TokenKind};
//!
//! let tokens = tokenize("const answer = 42;", TokenizerMode::Lexer);
//! assert_eq!(tokens[0].kind, TokenKind::Keyword);
//! assert_eq!(tokens[3].text, "42");
//! ```

pub mod coarse;
pub mod comment;
pub mod keyword;
pub mod literal;
pub mod punctuator;
pub mod token;
pub mod whitespace;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use token::{Lexer, Token};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    ToSchema,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TokenizerMode {
    #[default]
    Lexer,
    Coarse,
}

pub fn tokenize(code: &str, mode: TokenizerMode) -> Vec<Token> {
    match mode {
        TokenizerMode::Lexer => Lexer::new().scan(code).tokens,
        TokenizerMode::Coarse => coarse::tokenize_coarse(code),
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn test_modes_disagree_on_granularity() {
        let code = "let total = a + b;";
        let fine = tokenize(code, TokenizerMode::Lexer);
        let coarse = tokenize(code, TokenizerMode::Coarse);
        assert_eq!(fine.len(), 7);
        // `b;` is a single run for the coarse tokenizer
        assert_eq!(coarse.len(), 6);
    }

    #[test]
    fn test_mode_from_str() {
        assert_eq!(TokenizerMode::from_str("coarse").unwrap(), TokenizerMode::Coarse);
        assert_eq!(TokenizerMode::Lexer.to_string(), "lexer");
        assert!(TokenizerMode::from_str("regex").is_err());
    }
}
