//! Validation errors for attendance form input.

use thiserror::Error;

/// Reasons a form submission is rejected.
///
/// The `Display` text of each variant is the message shown to the user.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter all values.")]
    EmptyField,

    #[error("Please enter valid numbers.")]
    NonNumeric,

    #[error("Values cannot be negative.")]
    NegativeValue,

    #[error("Classes attended cannot exceed total classes.")]
    AttendedExceedsTotal,

    #[error("Total classes must be greater than 0.")]
    ZeroTotal,

    #[error("Required percentage must be between 1 and 100.")]
    RequiredOutOfRange,
}

impl ValidationError {
    /// Short machine-readable name, used in log lines.
    pub fn kind(&self) -> &'static str {
        match self {
            ValidationError::EmptyField => "empty-field",
            ValidationError::NonNumeric => "non-numeric",
            ValidationError::NegativeValue => "negative-value",
            ValidationError::AttendedExceedsTotal => "attended-exceeds-total",
            ValidationError::ZeroTotal => "zero-total",
            ValidationError::RequiredOutOfRange => "required-out-of-range",
        }
    }
}
