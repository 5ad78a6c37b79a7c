//! # jsscope core
//!
//! Analysis engine for JavaScript, TypeScript and JSX snippets. Given a piece
//! of source text it decides whether the text is valid and, when it is,
//! produces a token stream for display and a reduced copy of the code with
//! `console.log` calls stripped.
//!
//! ## Pipeline
//!
//! ```text
//! Source Code → Validator → (invalid) Classifier
//!                         → (valid)   Optimizer + Tokenizer → Metrics
//! ```
//!
//! * [`validator`]: the [`Validator`](validator::Validator) seam and its
//!   implementations
//! * [`classifier`]: LEXICAL / SYNTACTIC / SEMANTIC bucketing of diagnostics
//! * [`tokenizer`]: fine-grained lexer and coarse regex tokenizer
//! * [`optimizer`]: debug-call removal and blank-line compaction
//! * [`metrics`]: size reduction statistics
//! * [`analysis`]: the [`Analyzer`](analysis::Analyzer) tying it together
//!
//! ## Usage Example
//!
//! ```rust
//! use jsscope_core::analysis::{AnalysisResult, Analyzer};
//!
//! let analyzer = Analyzer::default();
//! match analyzer.analyze("const x = 1;\nconsole.log(x);\n") {
//!     AnalysisResult::Valid(analysis) => assert_eq!(analysis.optimized_text, "const x = 1;"),
//!     AnalysisResult::Invalid { diagnostic } => panic!("{}", diagnostic.detail()),
//! }
//! ```

pub mod analysis;
pub mod classifier;
pub mod config;
pub mod error;
pub mod metrics;
pub mod optimizer;
pub mod tokenizer;
pub mod validator;

pub use error::{Error, InternalResult};
