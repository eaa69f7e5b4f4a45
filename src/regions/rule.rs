//! Phone validation and formatting against the region table.

use super::table::{RegionEntry, REGION_TABLE};
use crate::domain::phone::group_subscriber;
use crate::domain::{DialCode, ValidPhone, ValidationError, ValidationReason};
use std::borrow::Cow;
use std::ops::RangeInclusive;

/// Accepted total digit count (dial code + subscriber) for dial codes that
/// have no entry in the table.
pub const FALLBACK_DIGITS: RangeInclusive<usize> = 10..=15;

/// Whether a form treats the phone field as mandatory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldRequirement {
    #[default]
    Optional,
    Required,
}

/// Validates and formats locally entered phone numbers.
///
/// Both operations are pure. `format` never fails, so it is safe to call on
/// every keystroke; `validate` is meant for submit.
///
/// # Example
///
/// ```
/// use storefront_profile::domain::DialCode;
/// use storefront_profile::regions::RegionalPhoneRule;
///
/// let rule = RegionalPhoneRule::new();
/// let ke = DialCode::new("254").unwrap();
///
/// let phone = rule.validate(&ke, "0712 345 678").unwrap();
/// assert_eq!(phone.e164(), "+254712345678");
/// assert_eq!(rule.format(&ke, "712345678"), "+254 712 345 678");
/// ```
#[derive(Debug, Clone)]
pub struct RegionalPhoneRule {
    table: Cow<'static, [RegionEntry]>,
}

impl Default for RegionalPhoneRule {
    fn default() -> Self {
        Self::new()
    }
}

impl RegionalPhoneRule {
    /// Rule backed by the built-in East African table.
    pub fn new() -> Self {
        Self {
            table: Cow::Borrowed(REGION_TABLE.as_slice()),
        }
    }

    /// Rule backed by a caller-supplied table.
    pub fn with_table(table: Vec<RegionEntry>) -> Self {
        Self {
            table: Cow::Owned(table),
        }
    }

    /// Look up the entry registered for a dial code.
    pub fn region(&self, dial_code: &DialCode) -> Option<&RegionEntry> {
        self.table.iter().find(|entry| &entry.dial_code == dial_code)
    }

    /// Reduce raw input to subscriber digits.
    ///
    /// Non-digits are dropped and then a single trunk `0` is stripped. Input
    /// written in international form (`+254 7...`) has its dial code removed
    /// first.
    pub fn normalize(&self, dial_code: &DialCode, raw: &str) -> String {
        let raw = raw.trim();
        let mut digits: String = raw.chars().filter(char::is_ascii_digit).collect();

        if raw.starts_with('+') {
            if let Some(rest) = digits.strip_prefix(dial_code.digits()) {
                digits = rest.to_string();
            }
        }

        if let Some(rest) = digits.strip_prefix('0') {
            digits = rest.to_string();
        }

        digits
    }

    /// Validate a number for the given dial code.
    ///
    /// # Errors
    ///
    /// - reason `empty` when `raw` is blank
    /// - reason `pattern_mismatch` when the normalized number fails the rule
    ///   for the dial code, or the 10-15 digit fallback for unknown codes
    pub fn validate(&self, dial_code: &DialCode, raw: &str) -> Result<ValidPhone, ValidationError> {
        if raw.trim().is_empty() {
            return Err(ValidationError::new(ValidationReason::Empty, raw));
        }

        let subscriber = self.normalize(dial_code, raw);
        let full = format!("{}{}", dial_code.digits(), subscriber);

        let accepted = !subscriber.is_empty()
            && match self.region(dial_code) {
                Some(entry) => entry.matches(&full),
                None => FALLBACK_DIGITS.contains(&full.len()),
            };

        if !accepted {
            return Err(ValidationError::new(ValidationReason::PatternMismatch, raw));
        }

        Ok(ValidPhone::new(dial_code.clone(), subscriber))
    }

    /// Validate a form field, skipping blank input when the field is optional.
    pub fn validate_field(
        &self,
        dial_code: &DialCode,
        raw: &str,
        requirement: FieldRequirement,
    ) -> Result<Option<ValidPhone>, ValidationError> {
        if raw.trim().is_empty() && requirement == FieldRequirement::Optional {
            return Ok(None);
        }
        self.validate(dial_code, raw).map(Some)
    }

    /// Best-effort display form: dial code, then subscriber digits in blocks
    /// of three. Does not validate.
    pub fn format(&self, dial_code: &DialCode, raw: &str) -> String {
        group_subscriber(dial_code, &self.normalize(dial_code, raw))
    }
}
