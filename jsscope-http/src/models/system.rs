use jsscope_core::{config::ValidatorKind, tokenizer::TokenizerMode};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// System information response model
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SystemInfo {
    /// Server version
    pub version: String,

    /// Tokenizer used for valid code
    pub tokenizer: TokenizerMode,

    /// Validator deciding validity
    pub validator: ValidatorKind,

    /// Largest accepted snippet, in bytes
    pub max_source_bytes: usize,

    /// Heap in use, e.g. `"3.14 MB"`
    pub memory_usage: String,
}
