//! Data models for the user profile.
//!
//! This module contains the data structures for saved addresses, payment
//! methods and the profile aggregate exchanged with the profile service.

pub mod address;
pub mod payment_method;
pub mod profile;

pub use address::{Address, AddressForm};
pub use payment_method::{PaymentDetails, PaymentMethod};
pub use profile::{AddressesUpdate, PaymentMethodsUpdate, Profile};
