use thiserror::Error;

/// Validation errors for record field primitives.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// When a value is shorter than the field's minimum length.
    #[error("{field} must be at least {min} characters in length")]
    TooShort {
        /// Field name that failed validation.
        field: &'static str,
        /// Observed length.
        len: usize,
        /// Minimum allowed length.
        min: usize,
    },
    /// When a value exceeds the field's maximum length.
    #[error("{field} must be no longer than {max} characters")]
    TooLong {
        /// Field name that failed validation.
        field: &'static str,
        /// Observed length.
        len: usize,
        /// Maximum allowed length.
        max: usize,
    },
    /// When a value exceeds the field's word cap.
    #[error("{field} must be no longer than {max} words")]
    TooManyWords {
        /// Field name that failed validation.
        field: &'static str,
        /// Observed word count.
        words: usize,
        /// Maximum allowed word count.
        max: usize,
    },
    /// When a value contains characters outside the field's charset,
    /// or is not one of the field's known values.
    #[error("{field} ('{value}') is not allowed")]
    NotAllowed {
        /// Field name that failed validation.
        field: &'static str,
        /// Offending value.
        value: String,
    },
}
