//! Tests for configuration error types.

use super::*;
use crate::validation::ValidationErrorType;

/// Verify error messages render with their context.
#[test]
fn test_error_display() {
    let error = ConfigError::NotFound {
        id: "missing".to_string(),
    };
    assert_eq!(
        error.to_string(),
        "Carousel configuration not found: missing"
    );

    let error = ConfigError::DuplicateId {
        id: "front".to_string(),
    };
    assert!(error.to_string().contains("front"));
}

/// Verify validation failures carry the collected errors and their count.
#[test]
fn test_from_validation_errors() {
    let errors = vec![ValidationError {
        error_type: ValidationErrorType::InvalidValue,
        field_path: "options.general.perPage".to_string(),
        message: "perPage must be at least 1".to_string(),
        suggestion: None,
    }];

    let error = ConfigError::from_validation_errors(errors.clone());
    match &error {
        ConfigError::ValidationFailed {
            error_count,
            errors: carried,
        } => {
            assert_eq!(*error_count, 1);
            assert_eq!(carried, &errors);
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(error.to_string().contains("1 error(s)"));
}
