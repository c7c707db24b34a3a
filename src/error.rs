//! Error types.
//!
//! Infeasibility is not an error: items whose requirements cannot be
//! covered are simply left out of a candidate. Errors are reserved for
//! contract violations detected before the search starts.

use thiserror::Error;

use crate::validation::ValidationError;

/// Invalid optimizer configuration.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("population_size must be at least 1")]
    EmptyPopulation,

    #[error("survivors must be at least 1")]
    NoSurvivors,

    #[error("survivors ({survivors}) exceed population_size ({population_size})")]
    TooManySurvivors {
        survivors: usize,
        population_size: usize,
    },

    #[error("{field} must be a probability in [0, 1], got {value}")]
    InvalidProbability { field: &'static str, value: f64 },

    #[error("mutation_chance must be below 1, got {0}")]
    CertainMutation(f64),
}

/// Failure of an optimization call.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OptimizeError {
    #[error("invalid optimizer configuration: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error("invalid input: {}", summarize(.0))]
    InvalidInput(Vec<ValidationError>),

    #[error("acquisition price must be finite, got {0}")]
    InvalidPrice(f64),
}

fn summarize(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

impl From<Vec<ValidationError>> for OptimizeError {
    fn from(errors: Vec<ValidationError>) -> Self {
        OptimizeError::InvalidInput(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    #[test]
    fn test_config_error_messages() {
        let err = ConfigError::TooManySurvivors {
            survivors: 30,
            population_size: 10,
        };
        assert_eq!(err.to_string(), "survivors (30) exceed population_size (10)");

        let err = OptimizeError::from(ConfigError::EmptyPopulation);
        assert!(err.to_string().contains("population_size"));
    }

    #[test]
    fn test_invalid_input_lists_all_messages() {
        let err = OptimizeError::from(vec![
            ValidationError::new(ValidationErrorKind::DuplicateId, "Duplicate item ID: P1"),
            ValidationError::new(ValidationErrorKind::InvalidValue, "Item 'P2' has non-finite value"),
        ]);
        let msg = err.to_string();
        assert!(msg.contains("Duplicate item ID: P1"));
        assert!(msg.contains("non-finite"));
    }
}
