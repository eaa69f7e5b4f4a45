//! Profile aggregate and update payloads.

use super::{Address, PaymentMethod};
use serde::{Deserialize, Serialize};

/// The parts of a user profile this crate manages.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct Profile {
    pub addresses: Vec<Address>,
    pub payment_methods: Vec<PaymentMethod>,
}

/// Body of an address-list update: `{"addresses": [...]}`.
#[derive(Debug, Serialize)]
pub struct AddressesUpdate<'a> {
    pub addresses: &'a [Address],
}

/// Body of a payment-method update: `{"paymentMethods": [...]}`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethodsUpdate<'a> {
    pub payment_methods: &'a [PaymentMethod],
}
