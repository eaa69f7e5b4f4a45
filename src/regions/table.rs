//! Per-country phone rules.

use crate::domain::DialCode;
use once_cell::sync::Lazy;
use regex::Regex;

/// A phone rule for one dial code.
///
/// `phone_pattern` is matched against the dial code digits followed by the
/// normalized subscriber digits, e.g. `254712345678`.
#[derive(Debug, Clone)]
pub struct RegionEntry {
    pub country_code: &'static str,
    pub dial_code: DialCode,
    pub phone_pattern: Regex,
}

impl RegionEntry {
    /// Build an entry from literal parts.
    ///
    /// Returns `None` if the dial code or pattern is malformed.
    pub fn new(country_code: &'static str, dial_code: &str, pattern: &str) -> Option<Self> {
        Some(Self {
            country_code,
            dial_code: DialCode::new(dial_code).ok()?,
            phone_pattern: Regex::new(pattern).ok()?,
        })
    }

    pub fn matches(&self, digits: &str) -> bool {
        self.phone_pattern.is_match(digits)
    }
}

const EAST_AFRICA: &[(&str, &str, &str)] = &[
    // Safaricom/Airtel 07xx and the newer 01xx ranges
    ("KE", "254", r"^254(7\d{8}|1\d{8})$"),
    ("UG", "256", r"^256(7\d{8}|3\d{8}|4\d{8})$"),
    ("TZ", "255", r"^255[67]\d{8}$"),
    ("RW", "250", r"^2507[2389]\d{7}$"),
    ("BI", "257", r"^257[2-7]\d{7}$"),
    ("SS", "211", r"^2119[1-9]\d{7}$"),
    ("ET", "251", r"^251[79]\d{8}$"),
    ("SO", "252", r"^252(6\d{8}|7\d{8})$"),
];

/// The built-in region table, compiled once on first use.
pub static REGION_TABLE: Lazy<Vec<RegionEntry>> = Lazy::new(|| {
    EAST_AFRICA
        .iter()
        .filter_map(|&(country, dial, pattern)| {
            let entry = RegionEntry::new(country, dial, pattern);
            if entry.is_none() {
                tracing::error!(country = %country, "Skipping malformed region rule");
            }
            entry
        })
        .collect()
});
