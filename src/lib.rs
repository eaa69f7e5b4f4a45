//! Storefront profile - saved addresses, payment methods and East African
//! phone rules for the marketplace storefront.
//!
//! The two core pieces are pure and synchronous:
//!
//! - **default_set**: keeps at most one item of a collection flagged as the
//!   checkout default
//! - **regions**: validates and formats phone numbers per dial code
//!
//! Around them:
//!
//! - **domain**: value objects (item ids, dial codes, validated phones)
//! - **models**: addresses, payment methods and the profile aggregate
//! - **client** / **repositories**: adapter for the external profile service
//! - **services**: form handlers wiring the above together
//! - **config**, **error**, **metrics**, **observability**: ambient concerns

pub mod client;
pub mod config;
pub mod default_set;
pub mod domain;
pub mod error;
pub mod metrics;
pub mod models;
pub mod observability;
pub mod regions;
pub mod repositories;
pub mod services;

pub use client::ProfileClient;
pub use config::Config;
pub use default_set::DefaultFlagged;
pub use domain::{DialCode, ItemId, ValidPhone, ValidationError, ValidationReason};
pub use error::{CollectionError, ConfigError, ProfileApiError, ProfileError};
pub use metrics::{Metrics, MetricsSummary};
pub use models::{Address, AddressForm, PaymentDetails, PaymentMethod, Profile};
pub use regions::{CountryCatalog, FieldRequirement, RegionalPhoneRule};
pub use services::{
    AddressService, AddressServiceImpl, PaymentMethodService, PaymentMethodServiceImpl,
};
