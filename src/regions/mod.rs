//! Regional phone rules and country reference data.
//!
//! One shared table maps each East African dial code to the subscriber
//! number shapes it accepts. Forms use [`RegionalPhoneRule`] for live
//! formatting and submit-time validation, and [`CountryCatalog`] to populate
//! the country selector.

pub mod countries;
pub mod rule;
pub mod table;

pub use countries::{Country, CountryCatalog};
pub use rule::{FieldRequirement, RegionalPhoneRule, FALLBACK_DIGITS};
pub use table::{RegionEntry, REGION_TABLE};
