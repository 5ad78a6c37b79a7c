//! Analyzer configuration.
//!
//! Configuration is plain JSON; every field has a default so a partial file
//! (or `{}`) is accepted.

use serde::{Deserialize, Serialize};
use std::{fs::File, io::BufReader, path::Path};
use utoipa::ToSchema;

use crate::{
    Error, InternalResult,
    tokenizer::TokenizerMode,
    validator::{OxcValidator, StructuralValidator, Validator},
};

/// Which [`Validator`] implementation decides whether a snippet is valid.
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
pub enum ValidatorKind {
    /// Full JS/TS/JSX parser.
    #[default]
    Oxc,
    /// Lexer plus bracket balance, no grammar.
    Structural,
}

impl ValidatorKind {
    pub fn build(self) -> Box<dyn Validator> {
        match self {
            Self::Oxc => Box::new(OxcValidator),
            Self::Structural => Box::new(StructuralValidator),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AnalyzerConfig {
    #[serde(default)]
    pub tokenizer: TokenizerMode,

    #[serde(default)]
    pub validator: ValidatorKind,

    /// Largest accepted snippet, in bytes.
    #[serde(default = "default_max_source_bytes")]
    pub max_source_bytes: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            tokenizer: TokenizerMode::default(),
            validator: ValidatorKind::default(),
            max_source_bytes: default_max_source_bytes(),
        }
    }
}

pub fn from_file<T: for<'de> Deserialize<'de>, P: AsRef<Path>>(path: P) -> InternalResult<T> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let config = serde_json::from_reader(reader)
        .map_err(|e| Error::config(format!("Failed to parse config file: {}", e)))?;
    Ok(config)
}

pub fn from_str<T: for<'de> Deserialize<'de>>(s: &str) -> InternalResult<T> {
    let config = serde_json::from_str(s)
        .map_err(|e| Error::config(format!("Failed to parse config: {}", e)))?;
    Ok(config)
}

fn default_max_source_bytes() -> usize {
    1024 * 1024
}
