//! Domain validation errors.

use std::fmt;

/// Why a value was rejected.
///
/// The string form (`as_str`) is stable and is what form layers key their
/// field-level messages on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationReason {
    /// A required value was blank.
    Empty,

    /// The number does not match the rule resolved for its dial code.
    PatternMismatch,

    /// The dial code is not 1-4 digits.
    InvalidDialCode,
}

impl ValidationReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::PatternMismatch => "pattern_mismatch",
            Self::InvalidDialCode => "invalid_dial_code",
        }
    }
}

impl fmt::Display for ValidationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub reason: ValidationReason,

    /// The raw input that was rejected.
    pub input: String,
}

impl ValidationError {
    pub fn new(reason: ValidationReason, input: impl Into<String>) -> Self {
        Self {
            reason,
            input: input.into(),
        }
    }

    /// Shorthand for the empty-id case.
    pub fn empty_id() -> Self {
        Self::new(ValidationReason::Empty, "")
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.reason {
            ValidationReason::Empty => write!(f, "Value cannot be empty"),
            ValidationReason::PatternMismatch => {
                write!(f, "Invalid phone number: {}", self.input)
            }
            ValidationReason::InvalidDialCode => write!(f, "Invalid dial code: {}", self.input),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reason_keys() {
        assert_eq!(ValidationReason::Empty.as_str(), "empty");
        assert_eq!(ValidationReason::PatternMismatch.as_str(), "pattern_mismatch");
        assert_eq!(ValidationReason::InvalidDialCode.to_string(), "invalid_dial_code");
    }

    #[test]
    fn test_error_display() {
        let err = ValidationError::new(ValidationReason::PatternMismatch, "12");
        assert_eq!(err.to_string(), "Invalid phone number: 12");
    }
}
