//! # Analysis Pipeline
//!
//! ```text
//! code -> Validator --invalid--> Classifier -> AnalysisResult::Invalid
//!             |
//!             +--valid--> Optimizer ---+
//!             |                        +--> Metrics -> AnalysisResult::Valid
//!             +--valid--> Tokenizer ---+
//! ```
//!
//! The [`Analyzer`] holds no per-request state and can be shared freely
//! between threads. Analysis is synchronous and CPU bound.

use serde::{Deserialize, Serialize};

use crate::{
    classifier::{ErrorCategory, classify},
    config::AnalyzerConfig,
    metrics::SizeMetrics,
    optimizer::Optimizer,
    tokenizer::{TokenizerMode, token::Token, tokenize},
    validator::{ValidationOutcome, Validator, ValidatorDiagnostic},
};

const UNKNOWN_FAILURE: &str = "Validation failed without a diagnostic";

/// The single diagnostic surfaced for an invalid snippet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub line: usize,
    pub message: String,
    pub category: ErrorCategory,
}

impl Diagnostic {
    fn from_validator(diagnostic: ValidatorDiagnostic) -> Self {
        let category = classify(&diagnostic.message);
        Self {
            line: diagnostic.line.max(1),
            message: diagnostic.message,
            category,
        }
    }

    /// `Line {n}: {message}`.
    pub fn detail(&self) -> String {
        format!("Line {}: {}", self.line, self.message)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidAnalysis {
    pub tokens: Vec<Token>,
    pub optimized_text: String,
    pub metrics: SizeMetrics,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AnalysisResult {
    Invalid { diagnostic: Diagnostic },
    Valid(ValidAnalysis),
}

impl AnalysisResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, AnalysisResult::Valid(_))
    }
}

pub struct Analyzer {
    validator: Box<dyn Validator>,
    optimizer: Optimizer,
    tokenizer_mode: TokenizerMode,
}

impl std::fmt::Debug for Analyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Analyzer")
            .field("optimizer", &self.optimizer)
            .field("tokenizer_mode", &self.tokenizer_mode)
            .finish_non_exhaustive()
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::from_config(&AnalyzerConfig::default())
    }
}

impl Analyzer {
    pub fn new(validator: Box<dyn Validator>, tokenizer_mode: TokenizerMode) -> Self {
        Self {
            validator,
            optimizer: Optimizer::new(),
            tokenizer_mode,
        }
    }

    pub fn from_config(config: &AnalyzerConfig) -> Self {
        Self::new(config.validator.build(), config.tokenizer)
    }

    pub fn with_optimizer(mut self, optimizer: Optimizer) -> Self {
        self.optimizer = optimizer;
        self
    }

    pub fn tokenizer_mode(&self) -> TokenizerMode {
        self.tokenizer_mode
    }

    #[tracing::instrument(level = "debug", skip(self, code), fields(code_bytes = code.len()))]
    pub fn analyze(&self, code: &str) -> AnalysisResult {
        match self.validator.validate(code) {
            ValidationOutcome::Invalid(diagnostics) => {
                let first = diagnostics
                    .into_iter()
                    .next()
                    .unwrap_or_else(|| ValidatorDiagnostic::new(1, UNKNOWN_FAILURE));
                let diagnostic = Diagnostic::from_validator(first);
                tracing::info!(
                    code_bytes = code.len(),
                    category = %diagnostic.category,
                    line = diagnostic.line,
                    "Rejected invalid snippet"
                );
                AnalysisResult::Invalid { diagnostic }
            }
            ValidationOutcome::Valid => {
                let optimized_text = self.optimizer.optimize(code);
                let tokens = tokenize(code, self.tokenizer_mode);
                let metrics = SizeMetrics::compute(code.len(), optimized_text.len());
                tracing::debug!(
                    tokens = tokens.len(),
                    reduction = metrics.reduction_percent,
                    "Analyzed valid snippet"
                );
                AnalysisResult::Valid(ValidAnalysis {
                    tokens,
                    optimized_text,
                    metrics,
                })
            }
        }
    }
}
