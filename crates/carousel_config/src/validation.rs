//! Validation result types.
//!
//! Field-scoped errors block a save; advisory warnings never do. All
//! problems found in a submission are collected and reported together so a
//! single submission surfaces every issue at once.

/// Result of validating a carousel configuration.
///
/// Contains all validation errors and warnings found during validation.
/// Validation is considered successful only if no errors are present.
///
/// # Examples
///
/// ```rust
/// use carousel_config::{ValidationResult, ValidationError, ValidationErrorType};
///
/// let mut result = ValidationResult::new();
/// assert!(result.is_valid());
///
/// result.add_error(ValidationError {
///     error_type: ValidationErrorType::InvalidValue,
///     field_path: "options.general.perPage".to_string(),
///     message: "perPage must be at least 1".to_string(),
///     suggestion: Some("Use a positive integer".to_string()),
/// });
///
/// assert!(!result.is_valid());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    /// List of validation errors (blocking issues).
    pub errors: Vec<ValidationError>,
    /// List of validation warnings (non-blocking suggestions).
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    /// Create a new empty validation result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if validation passed (no errors).
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Add a validation error.
    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Add a validation warning.
    pub fn add_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }

    /// Absorb the errors and warnings of another result.
    pub fn merge(&mut self, other: ValidationResult) {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }
}

/// Individual validation error with context.
///
/// Provides detailed information about what went wrong and how to fix it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The category of validation error.
    pub error_type: ValidationErrorType,
    /// Dot-separated path to the field that failed validation.
    pub field_path: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional suggestion for how to fix the error.
    pub suggestion: Option<String>,
}

/// Validation error categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationErrorType {
    /// A value doesn't match the expected shape (malformed JSON, unknown enum value).
    SchemaViolation,
    /// A required field is missing or blank.
    RequiredFieldMissing,
    /// A field value is invalid (wrong type, out of range, etc.).
    InvalidValue,
    /// A cross-field constraint was violated.
    ConstraintViolation,
}

impl std::fmt::Display for ValidationErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SchemaViolation => write!(f, "SchemaViolation"),
            Self::RequiredFieldMissing => write!(f, "RequiredFieldMissing"),
            Self::InvalidValue => write!(f, "InvalidValue"),
            Self::ConstraintViolation => write!(f, "ConstraintViolation"),
        }
    }
}

/// Non-blocking validation warning.
///
/// Warnings indicate potential issues that don't prevent the configuration
/// from being saved but should be addressed by the editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationWarning {
    /// Dot-separated path to the field that triggered the warning.
    pub field_path: String,
    /// Human-readable warning message.
    pub message: String,
    /// Optional recommendation for best practice.
    pub recommendation: Option<String>,
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod tests;
