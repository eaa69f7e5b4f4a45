//! ValidPhone value object.

use super::dial_code::DialCode;
use serde::{Serialize, Serializer};
use std::fmt;

/// A phone number that has passed its regional rule.
///
/// Only [`RegionalPhoneRule`](crate::regions::RegionalPhoneRule) constructs
/// these, so holding one means the number was validated.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ValidPhone {
    dial_code: DialCode,
    subscriber: String,
}

impl ValidPhone {
    pub(crate) fn new(dial_code: DialCode, subscriber: String) -> Self {
        Self {
            dial_code,
            subscriber,
        }
    }

    pub fn dial_code(&self) -> &DialCode {
        &self.dial_code
    }

    /// Subscriber digits, without trunk prefix or dial code.
    pub fn subscriber(&self) -> &str {
        &self.subscriber
    }

    /// E.164 form, e.g. `+254712345678`.
    pub fn e164(&self) -> String {
        format!("{}{}", self.dial_code, self.subscriber)
    }

    /// Display form, e.g. `+254 712 345 678`.
    pub fn formatted(&self) -> String {
        group_subscriber(&self.dial_code, &self.subscriber)
    }
}

/// Prefix the dial code and split the subscriber digits into blocks of three.
pub(crate) fn group_subscriber(dial_code: &DialCode, subscriber: &str) -> String {
    let mut out = dial_code.to_string();
    for (i, c) in subscriber.chars().enumerate() {
        if i % 3 == 0 {
            out.push(' ');
        }
        out.push(c);
    }
    out
}

impl Serialize for ValidPhone {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.e164())
    }
}

impl fmt::Display for ValidPhone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kenyan() -> ValidPhone {
        ValidPhone::new(DialCode::new("254").unwrap(), "712345678".to_string())
    }

    #[test]
    fn test_phone_forms() {
        let phone = kenyan();
        assert_eq!(phone.e164(), "+254712345678");
        assert_eq!(phone.formatted(), "+254 712 345 678");
        assert_eq!(phone.to_string(), "+254 712 345 678");
    }

    #[test]
    fn test_grouping_keeps_remainder_last() {
        let code = DialCode::new("257").unwrap();
        assert_eq!(group_subscriber(&code, "79123456"), "+257 791 234 56");
        assert_eq!(group_subscriber(&code, ""), "+257");
        assert_eq!(group_subscriber(&code, "7"), "+257 7");
    }

    #[test]
    fn test_phone_serialization() {
        let json = serde_json::to_string(&kenyan()).unwrap();
        assert_eq!(json, "\"+254712345678\"");
    }
}
