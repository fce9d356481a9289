use crate::core::interpretation::{interpret, DEFAULT_PLACEHOLDER_PREFIX};
use crate::core::report::calculate_all;
use crate::domain::model::{AnnotatedReport, AnnotatedResult, BirthDateInput};
use crate::domain::ports::InterpretationSource;

/// Calculates a report and attaches interpretation text from `S`.
pub struct NumerologyEngine<S: InterpretationSource> {
    source: S,
    placeholder_prefix: String,
}

impl<S: InterpretationSource> NumerologyEngine<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            placeholder_prefix: DEFAULT_PLACEHOLDER_PREFIX.to_string(),
        }
    }

    pub fn with_placeholder_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.placeholder_prefix = prefix.into();
        self
    }

    pub fn has_interpretations(&self) -> bool {
        !self.source.is_empty()
    }

    pub fn run(&self, name: &str, birth_date: impl Into<BirthDateInput>) -> AnnotatedReport {
        let report = calculate_all(name, birth_date);
        let mut annotated = AnnotatedReport::default();

        for (number_type, result) in report.iter() {
            let interpretation = if self.has_interpretations() {
                interpret(&result.number, &self.source, &self.placeholder_prefix)
            } else {
                None
            };

            if result.number.is_sentinel() {
                tracing::warn!("{} number could not be calculated: {}", number_type, result.number);
            } else {
                tracing::debug!("{} number: {} (sum {})", number_type, result.number, result.sum);
            }

            annotated.insert(
                number_type,
                AnnotatedResult {
                    result: result.clone(),
                    interpretation,
                },
            );
        }

        annotated
    }
}
