//! DialCode value object.

use super::errors::{ValidationError, ValidationReason};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// An international calling-code prefix such as `+254`.
///
/// Stored as digits only, which is the form used for rule lookup and matching.
/// Displayed and serialized with the leading `+`.
///
/// # Example
///
/// ```
/// use storefront_profile::domain::DialCode;
///
/// let code = DialCode::new("+254").unwrap();
/// assert_eq!(code.digits(), "254");
/// assert_eq!(code.to_string(), "+254");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DialCode(String);

impl DialCode {
    /// Create a DialCode from `"254"` or `"+254"`.
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` with reason `invalid_dial_code` unless the
    /// input is 1 to 4 ASCII digits, optionally preceded by a single `+`.
    pub fn new(code: impl AsRef<str>) -> Result<Self, ValidationError> {
        let raw = code.as_ref();
        let digits = raw.trim().strip_prefix('+').unwrap_or(raw.trim());

        if digits.is_empty() || digits.len() > 4 || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(ValidationError::new(ValidationReason::InvalidDialCode, raw));
        }

        Ok(Self(digits.to_string()))
    }

    /// Build from a digit literal known to be valid.
    pub(crate) fn from_static(digits: &'static str) -> Self {
        debug_assert!(Self::new(digits).is_ok());
        Self(digits.to_string())
    }

    /// The dial code without the `+`.
    pub fn digits(&self) -> &str {
        &self.0
    }
}

impl Serialize for DialCode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DialCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        DialCode::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for DialCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "+{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dial_code_accepts_both_forms() {
        assert_eq!(DialCode::new("254").unwrap(), DialCode::new("+254").unwrap());
        assert_eq!(DialCode::new(" +1 ").unwrap().digits(), "1");
    }

    #[test]
    fn test_dial_code_rejects_garbage() {
        for bad in ["", "+", "++254", "25a", "12345", "+ 254"] {
            let err = DialCode::new(bad).unwrap_err();
            assert_eq!(err.reason, ValidationReason::InvalidDialCode, "input {bad:?}");
        }
    }

    #[test]
    fn test_dial_code_serializes_with_plus() {
        let code = DialCode::new("256").unwrap();
        assert_eq!(serde_json::to_string(&code).unwrap(), "\"+256\"");

        let back: DialCode = serde_json::from_str("\"256\"").unwrap();
        assert_eq!(back, code);
    }
}
