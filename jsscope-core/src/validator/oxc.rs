use oxc_allocator::Allocator;
use oxc_parser::Parser;
use oxc_span::SourceType;

use super::{ValidationOutcome, Validator, ValidatorDiagnostic, line_at_offset};

/// Validates with the `oxc` parser. Sources are parsed as TSX so plain
/// JavaScript, TypeScript and JSX are all accepted.
#[derive(Debug, Clone, Copy, Default)]
pub struct OxcValidator;

impl Validator for OxcValidator {
    #[tracing::instrument(level = "debug", skip(self, source))]
    fn validate(&self, source: &str) -> ValidationOutcome {
        let allocator = Allocator::default();
        let parsed = Parser::new(&allocator, source, SourceType::tsx()).parse();

        if parsed.errors.is_empty() && !parsed.panicked {
            return ValidationOutcome::Valid;
        }

        let diagnostics: Vec<ValidatorDiagnostic> = parsed
            .errors
            .iter()
            .map(|error| {
                let line = error
                    .labels
                    .as_ref()
                    .and_then(|labels| labels.first())
                    .map(|label| line_at_offset(source, label.offset()))
                    .unwrap_or(1);
                ValidatorDiagnostic::new(line, error.to_string())
            })
            .collect();

        tracing::debug!("Parser reported {} diagnostics", diagnostics.len());
        ValidationOutcome::Invalid(diagnostics)
    }
}
