use jsscope_core::{
    analysis::{AnalysisResult, Analyzer},
    classifier::ErrorCategory,
    config::{AnalyzerConfig, ValidatorKind},
    tokenizer::{TokenizerMode, token::TokenKind},
    validator::{MockValidator, StructuralValidator, ValidationOutcome, ValidatorDiagnostic},
};
use pretty_assertions::assert_eq;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[ctor::ctor]
fn init_tests() {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");
}

fn analyzers() -> Vec<(ValidatorKind, Analyzer)> {
    [ValidatorKind::Oxc, ValidatorKind::Structural]
        .into_iter()
        .map(|kind| {
            let config = AnalyzerConfig {
                validator: kind,
                ..AnalyzerConfig::default()
            };
            (kind, Analyzer::from_config(&config))
        })
        .collect()
}

#[test]
fn test_debug_call_is_stripped() {
    for (kind, analyzer) in analyzers() {
        let AnalysisResult::Valid(analysis) = analyzer.analyze("const x = 1;\nconsole.log(x);\n")
        else {
            panic!("{} rejected valid code", kind);
        };
        assert_eq!(analysis.optimized_text, "const x = 1;");
        assert!(analysis.metrics.reduction_percent > 0.0);
        assert!(analysis.tokens.iter().any(|t| t.text == "console"));
    }
}

#[test]
fn test_empty_source() {
    for (kind, analyzer) in analyzers() {
        let AnalysisResult::Valid(analysis) = analyzer.analyze("") else {
            panic!("{} rejected empty source", kind);
        };
        assert!(analysis.tokens.is_empty());
        assert_eq!(analysis.optimized_text, "");
        assert_eq!(analysis.metrics.original_size, 0);
        assert_eq!(analysis.metrics.reduction_percent, 0.0);
    }
}

#[test]
fn test_unclosed_function_is_syntactic() {
    for (kind, analyzer) in analyzers() {
        let AnalysisResult::Invalid { diagnostic } = analyzer.analyze("function f( {") else {
            panic!("{} accepted broken code", kind);
        };
        assert_eq!(diagnostic.category, ErrorCategory::Syntactic, "{}", kind);
        assert_eq!(diagnostic.line, 1);
        assert!(diagnostic.detail().starts_with("Line 1: "));
    }
}

#[test]
fn test_multiline_call_between_statements() {
    let analyzer = Analyzer::default();
    let code = "const a = 1;\nconsole.log(\n  a,\n  2\n);\nconst b = 2;\n";

    let AnalysisResult::Valid(analysis) = analyzer.analyze(code) else {
        panic!("valid code rejected");
    };
    assert_eq!(analysis.optimized_text, "const a = 1;\nconst b = 2;");
    let last = analysis.tokens.last().map(|t| (t.line, t.text.as_str()));
    assert_eq!(last, Some((6, ";")));
}

#[test]
fn test_invalid_character_is_lexical() {
    let analyzer = Analyzer::new(Box::new(StructuralValidator), TokenizerMode::Lexer);
    let AnalysisResult::Invalid { diagnostic } = analyzer.analyze("let a = 1;\nlet b = \\u;") else {
        panic!("invalid character accepted");
    };
    assert_eq!(diagnostic.category, ErrorCategory::Lexical);
    assert_eq!(diagnostic.detail(), "Line 2: Invalid character '\\'");
}

#[test]
fn test_semantic_message_from_validator() {
    let mut validator = MockValidator::new();
    validator.expect_validate().returning(|_| {
        ValidationOutcome::Invalid(vec![ValidatorDiagnostic::new(
            4,
            "Type 'string' is not assignable to type 'number'",
        )])
    });
    let analyzer = Analyzer::new(Box::new(validator), TokenizerMode::Lexer);

    let AnalysisResult::Invalid { diagnostic } = analyzer.analyze("let n: number = 'x';") else {
        panic!("mock outcome ignored");
    };
    assert_eq!(diagnostic.category, ErrorCategory::Semantic);
    assert_eq!(
        diagnostic.detail(),
        "Line 4: Type 'string' is not assignable to type 'number'"
    );
}

#[test]
fn test_coarse_mode() {
    let analyzer = Analyzer::new(Box::new(StructuralValidator), TokenizerMode::Coarse);
    let AnalysisResult::Valid(analysis) = analyzer.analyze("import x from 'y';\nconst f = () => x;")
    else {
        panic!("valid code rejected");
    };
    let kinds: Vec<TokenKind> = analysis.tokens.iter().map(|t| t.kind).collect();
    assert_eq!(kinds[0], TokenKind::Keyword);
    assert!(kinds.contains(&TokenKind::Arrow));
    assert!(
        kinds
            .iter()
            .all(|k| matches!(k, TokenKind::Keyword | TokenKind::Arrow | TokenKind::Punctuation | TokenKind::Literal))
    );
}

#[test]
fn test_jsx_component() {
    let code = r#"import { useState } from 'react';

export default function Counter() {
  const [count, setCount] = useState(0);
  console.log("render", count);
  return <button onClick={() => setCount(count + 1)}>{count}</button>;
}
"#;
    let analyzer = Analyzer::default();
    let AnalysisResult::Valid(analysis) = analyzer.analyze(code) else {
        panic!("valid JSX rejected");
    };
    assert!(!analysis.optimized_text.contains("console.log"));
    assert!(!analysis.optimized_text.contains("\n\n"));
    assert!(analysis.metrics.optimized_size < analysis.metrics.original_size);
    assert!(analysis.tokens.windows(2).all(|w| w[0].line <= w[1].line));
}

#[test]
fn test_deeply_nested_template_is_rejected_without_crashing() {
    let depth = 10_000;
    let code = format!(
        "const s = `${{(() => {}{})()}}`;",
        "{".repeat(depth),
        "}".repeat(depth)
    );
    let analyzer = Analyzer::new(Box::new(StructuralValidator), TokenizerMode::Lexer);
    let AnalysisResult::Invalid { diagnostic } = analyzer.analyze(&code) else {
        panic!("nesting past the lexer limit was accepted");
    };
    assert_eq!(diagnostic.line, 1);
    assert_eq!(diagnostic.message, "Template literal nested too deeply");
    assert_eq!(diagnostic.category, ErrorCategory::Syntactic);
}

#[test]
fn test_deeply_nested_template_keeps_leading_tokens() {
    let depth = 10_000;
    let code = format!(
        "let a = 1;\nconst s = `${{{}{}}}`;",
        "{".repeat(depth),
        "}".repeat(depth)
    );
    let tokens = jsscope_core::tokenizer::tokenize(&code, TokenizerMode::Lexer);
    assert_eq!(tokens.len(), 8);
    assert_eq!(tokens[7].kind, TokenKind::Assignment);
}
