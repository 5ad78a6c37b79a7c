//! Maps a raw validator message onto a coarse [`ErrorCategory`].
//!
//! Matching is a case-insensitive substring test and the first rule wins:
//!
//! 1. `invalid character` is [`ErrorCategory::Lexical`]
//! 2. `type` or `assignable` is [`ErrorCategory::Semantic`]
//! 3. anything else is [`ErrorCategory::Syntactic`]
//!
//! Rule 2 also catches unrelated messages that merely mention the word
//! "type".

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};
use utoipa::ToSchema;

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
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum ErrorCategory {
    Lexical,
    Syntactic,
    Semantic,
}

pub fn classify(message: &str) -> ErrorCategory {
    let message = message.to_lowercase();

    if message.contains("invalid character") {
        ErrorCategory::Lexical
    } else if message.contains("type") || message.contains("assignable") {
        ErrorCategory::Semantic
    } else {
        ErrorCategory::Syntactic
    }
}
