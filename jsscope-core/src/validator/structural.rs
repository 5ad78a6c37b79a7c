use crate::tokenizer::{
    token::{Lexer, Token, TokenKind},
    whitespace::count_line_terminators,
};

use super::{ValidationOutcome, Validator, ValidatorDiagnostic};

/// Lexer-based validator. A snippet is accepted when it scans to the end and
/// its `()`, `[]` and `{}` pairs balance. No grammar is checked, so
/// `let = ;` passes.
#[derive(Debug, Clone, Copy, Default)]
pub struct StructuralValidator;

impl Validator for StructuralValidator {
    #[tracing::instrument(level = "debug", skip(self, source))]
    fn validate(&self, source: &str) -> ValidationOutcome {
        let outcome = Lexer::new().scan(source);

        if let Some(error) = outcome.error {
            return ValidationOutcome::Invalid(vec![ValidatorDiagnostic::new(
                error.line(),
                error.to_string(),
            )]);
        }

        match check_brackets(&outcome.tokens, source) {
            Some(diagnostic) => ValidationOutcome::Invalid(vec![diagnostic]),
            None => ValidationOutcome::Valid,
        }
    }
}

fn closing_for(kind: TokenKind) -> Option<char> {
    match kind {
        TokenKind::OpenParen => Some(')'),
        TokenKind::OpenBracket => Some(']'),
        TokenKind::OpenBrace => Some('}'),
        _ => None,
    }
}

fn is_closing(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::CloseParen | TokenKind::CloseBracket | TokenKind::CloseBrace
    )
}

/// First bracket mismatch, if any.
fn check_brackets(tokens: &[Token], source: &str) -> Option<ValidatorDiagnostic> {
    let mut expected: Vec<char> = Vec::new();

    for token in tokens {
        if let Some(closing) = closing_for(token.kind) {
            expected.push(closing);
            continue;
        }
        if !is_closing(token.kind) {
            continue;
        }
        match expected.pop() {
            None => {
                return Some(ValidatorDiagnostic::new(
                    token.line,
                    format!("Unexpected token '{}'", token.text),
                ));
            }
            Some(closing) if token.text != closing.to_string() => {
                return Some(ValidatorDiagnostic::new(
                    token.line,
                    format!("Expected '{}' but found '{}'", closing, token.text),
                ));
            }
            Some(_) => {}
        }
    }

    expected.pop().map(|closing| {
        ValidatorDiagnostic::new(
            1 + count_line_terminators(source),
            format!("Expected '{}' but found end of file", closing),
        )
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn first(source: &str) -> Option<ValidatorDiagnostic> {
        match StructuralValidator.validate(source) {
            ValidationOutcome::Valid => None,
            ValidationOutcome::Invalid(mut diagnostics) => Some(diagnostics.remove(0)),
        }
    }

    #[test]
    fn test_balanced_sources() {
        for source in [
            "",
            "const x = 1;\nconsole.log(x);\n",
            "function f(a) { return [a, { b: (1) }]; }",
            "const s = `${ {a: 1}.a }`;",
            "const t = ')';",
        ] {
            assert_eq!(first(source), None, "source: {}", source);
        }
    }

    #[test]
    fn test_unclosed_at_end_of_file() {
        assert_eq!(
            first("function f( {"),
            Some(ValidatorDiagnostic::new(1, "Expected '}' but found end of file"))
        );
        assert_eq!(
            first("call(\n1,\n2\n"),
            Some(ValidatorDiagnostic::new(4, "Expected ')' but found end of file"))
        );
    }

    #[test]
    fn test_mismatched_close() {
        assert_eq!(
            first("if (a\n}"),
            Some(ValidatorDiagnostic::new(2, "Expected ')' but found '}'"))
        );
    }

    #[test]
    fn test_stray_close() {
        assert_eq!(
            first("let a = 1;\n}"),
            Some(ValidatorDiagnostic::new(2, "Unexpected token '}'"))
        );
    }

    #[test]
    fn test_lexer_errors() {
        assert_eq!(
            first("let a = 1;\nlet b = @@\\;"),
            Some(ValidatorDiagnostic::new(2, "Invalid character '\\'"))
        );
        assert_eq!(
            first("let s = 'open;"),
            Some(ValidatorDiagnostic::new(1, "Unterminated string literal"))
        );
    }
}
