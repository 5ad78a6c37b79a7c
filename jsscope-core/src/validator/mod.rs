//! # Validator
//!
//! Decides whether a snippet is syntactically valid. The rest of the pipeline
//! only sees the [`Validator`] trait, so any JS/TS parser can stand behind it.
//!
//! * [`OxcValidator`]: full JS/TS/JSX parser (`oxc`), TSX flavour
//! * [`StructuralValidator`]: the crate's own lexer plus bracket balance
//!
//! A validator may report several diagnostics; callers are expected to use
//! the first one only.

mod oxc;
mod structural;

pub use oxc::OxcValidator;
pub use structural::StructuralValidator;

use crate::tokenizer::whitespace::count_line_terminators;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatorDiagnostic {
    /// 1-based.
    pub line: usize,
    pub message: String,
}

impl ValidatorDiagnostic {
    pub fn new(line: usize, message: impl Into<String>) -> Self {
        Self {
            line,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    Valid,
    Invalid(Vec<ValidatorDiagnostic>),
}

impl ValidationOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationOutcome::Valid)
    }
}

#[mockall::automock]
pub trait Validator: Send + Sync {
    fn validate(&self, source: &str) -> ValidationOutcome;
}

/// 1-based line of a byte offset, counting line terminators the way the
/// lexer does. Offsets past the end count every line; offsets inside a
/// character are moved back to its start.
pub fn line_at_offset(source: &str, offset: usize) -> usize {
    let mut end = offset.min(source.len());
    while !source.is_char_boundary(end) {
        end -= 1;
    }
    1 + count_line_terminators(&source[..end])
}
