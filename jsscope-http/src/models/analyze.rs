use jsscope_core::{
    analysis::AnalysisResult,
    classifier::ErrorCategory,
    tokenizer::token::{Token, TokenKind},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const INVALID_MESSAGE: &str = "An error was found in the code";
pub const VALID_MESSAGE: &str = "Analysis and optimization completed";

/// Analyze request
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AnalyzeRequest {
    /// JavaScript, TypeScript or JSX source
    pub code: String,
}

/// One token as shown to clients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TokenView {
    /// 1-based source line
    pub line: usize,

    #[serde(rename = "type")]
    pub kind: TokenKind,

    /// Raw lexeme
    pub value: String,
}

impl From<Token> for TokenView {
    fn from(token: Token) -> Self {
        Self {
            line: token.line,
            kind: token.kind,
            value: token.text,
        }
    }
}

/// Analyze response
///
/// Fields that only make sense for one outcome are omitted for the other.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResponse {
    pub is_valid: bool,

    /// Human readable summary
    pub message: String,

    /// `Line {n}: {message}`, invalid code only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_detail: Option<String>,

    /// Invalid code only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_type: Option<ErrorCategory>,

    /// Valid code only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tokens: Option<Vec<TokenView>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub optimized_code: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_size: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub optimized_size: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reduction_percentage: Option<f64>,

    /// Heap in use by the server, e.g. `"3.14 MB"`
    pub server_memory_usage: String,
}

impl AnalysisResponse {
    pub fn from_result(result: AnalysisResult, server_memory_usage: String) -> Self {
        match result {
            AnalysisResult::Invalid { diagnostic } => Self {
                is_valid: false,
                message: INVALID_MESSAGE.to_string(),
                error_detail: Some(diagnostic.detail()),
                error_type: Some(diagnostic.category),
                tokens: None,
                optimized_code: None,
                original_size: None,
                optimized_size: None,
                reduction_percentage: None,
                server_memory_usage,
            },
            AnalysisResult::Valid(analysis) => Self {
                is_valid: true,
                message: VALID_MESSAGE.to_string(),
                error_detail: None,
                error_type: None,
                tokens: Some(analysis.tokens.into_iter().map(TokenView::from).collect()),
                optimized_code: Some(analysis.optimized_text),
                original_size: Some(analysis.metrics.original_size),
                optimized_size: Some(analysis.metrics.optimized_size),
                reduction_percentage: Some(analysis.metrics.reduction_percent),
                server_memory_usage,
            },
        }
    }
}
