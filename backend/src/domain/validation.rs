//! Field-level validation failures shared by the peak value objects.

use std::fmt;

/// A single field that failed validation.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum FieldViolation {
    /// A required text field was empty.
    #[error("{field} must not be empty")]
    Empty {
        /// Offending field.
        field: &'static str,
    },
    /// A numeric field held NaN or an infinity.
    #[error("{field} must be a finite number")]
    NonFinite {
        /// Offending field.
        field: &'static str,
    },
    /// A coordinate fell outside its inclusive range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange {
        /// Offending field.
        field: &'static str,
        /// Rejected value.
        value: f64,
        /// Inclusive lower bound.
        min: f64,
        /// Inclusive upper bound.
        max: f64,
    },
}

impl FieldViolation {
    /// Name of the offending payload field.
    pub fn field(&self) -> &'static str {
        match self {
            Self::Empty { field } | Self::NonFinite { field } | Self::OutOfRange { field, .. } => {
                field
            }
        }
    }

    /// Stable code describing the violation.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Empty { .. } => "empty",
            Self::NonFinite { .. } => "non_finite",
            Self::OutOfRange { .. } => "out_of_range",
        }
    }

    /// Rejected numeric value, when one is meaningful to report.
    pub fn value(&self) -> Option<f64> {
        match self {
            Self::OutOfRange { value, .. } => Some(*value),
            Self::Empty { .. } | Self::NonFinite { .. } => None,
        }
    }
}

/// Every violation found while validating one value object.
///
/// Validation never stops at the first failure so callers can report all
/// offending fields at once. The collection is never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationErrors {
    subject: &'static str,
    violations: Vec<FieldViolation>,
}

impl ValidationErrors {
    /// Name of the value object that failed validation, e.g. `peak`.
    pub fn subject(&self) -> &'static str {
        self.subject
    }

    /// Offending fields in the order they were checked.
    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} failed validation", self.subject)
    }
}

impl std::error::Error for ValidationErrors {}

/// Accumulates violations for a single value object.
#[derive(Debug)]
pub(crate) struct Validator {
    subject: &'static str,
    violations: Vec<FieldViolation>,
}

impl Validator {
    pub(crate) fn new(subject: &'static str) -> Self {
        Self {
            subject,
            violations: Vec::new(),
        }
    }

    /// Record the outcome of one field check.
    pub(crate) fn check<T>(&mut self, outcome: Result<T, FieldViolation>) -> Option<T> {
        match outcome {
            Ok(value) => Some(value),
            Err(violation) => {
                self.violations.push(violation);
                None
            }
        }
    }

    /// Finish validation, building the value only when every check passed.
    pub(crate) fn finish<T>(self, build: impl FnOnce() -> Option<T>) -> Result<T, ValidationErrors> {
        let built = if self.violations.is_empty() {
            build()
        } else {
            None
        };
        built.ok_or(ValidationErrors {
            subject: self.subject,
            violations: self.violations,
        })
    }
}

/// Reject NaN and infinities.
pub(crate) fn check_finite(value: f64, field: &'static str) -> Result<f64, FieldViolation> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(FieldViolation::NonFinite { field })
    }
}

/// Reject empty text. Whitespace counts as content and is kept as given.
pub(crate) fn check_not_empty(value: String, field: &'static str) -> Result<String, FieldViolation> {
    if value.is_empty() {
        Err(FieldViolation::Empty { field })
    } else {
        Ok(value)
    }
}
