//! Tests for validation result types.

use super::*;

fn sample_error(path: &str) -> ValidationError {
    ValidationError {
        error_type: ValidationErrorType::InvalidValue,
        field_path: path.to_string(),
        message: "bad value".to_string(),
        suggestion: None,
    }
}

/// Verify a new result is valid and empty.
#[test]
fn test_new_result_is_valid() {
    let result = ValidationResult::new();
    assert!(result.is_valid());
    assert!(result.errors.is_empty());
    assert!(result.warnings.is_empty());
}

/// Verify errors invalidate the result.
#[test]
fn test_errors_invalidate() {
    let mut result = ValidationResult::new();
    result.add_error(sample_error("a"));
    assert!(!result.is_valid());
}

/// Verify warnings alone keep the result valid.
#[test]
fn test_warnings_do_not_invalidate() {
    let mut result = ValidationResult::new();
    result.add_warning(ValidationWarning {
        field_path: "options.general.speed".to_string(),
        message: "slow".to_string(),
        recommendation: None,
    });
    assert!(result.is_valid());
    assert_eq!(result.warnings.len(), 1);
}

/// Verify merge combines errors and warnings from both results.
#[test]
fn test_merge_combines() {
    let mut first = ValidationResult::new();
    first.add_error(sample_error("a"));

    let mut second = ValidationResult::new();
    second.add_error(sample_error("b"));
    second.add_warning(ValidationWarning {
        field_path: "c".to_string(),
        message: "hint".to_string(),
        recommendation: None,
    });

    first.merge(second);
    assert_eq!(first.errors.len(), 2);
    assert_eq!(first.warnings.len(), 1);
}

/// Verify error types display as their names.
#[test]
fn test_error_type_display() {
    assert_eq!(
        ValidationErrorType::SchemaViolation.to_string(),
        "SchemaViolation"
    );
    assert_eq!(
        ValidationErrorType::ConstraintViolation.to_string(),
        "ConstraintViolation"
    );
}
