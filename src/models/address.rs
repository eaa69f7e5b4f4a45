//! Saved delivery address.

use crate::default_set::DefaultFlagged;
use crate::domain::{DialCode, ItemId};
use serde::{Deserialize, Serialize};

/// A delivery address on the user's profile.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    /// Unique identifier within the profile's address list
    pub id: ItemId,

    /// Recipient name
    pub full_name: String,

    pub street: String,

    pub city: String,

    /// County, district or region
    #[serde(default)]
    pub region: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,

    /// Country id from the country catalog (e.g. "KE")
    pub country: String,

    /// Dial code selected next to the phone field
    pub dial_code: DialCode,

    /// Contact phone, stored in display form once validated
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// Pre-selected at checkout
    #[serde(default)]
    pub is_default: bool,
}

impl DefaultFlagged for Address {
    fn id(&self) -> &ItemId {
        &self.id
    }

    fn is_default(&self) -> bool {
        self.is_default
    }

    fn set_default(&mut self, is_default: bool) {
        self.is_default = is_default;
    }
}

/// Submitted address form.
///
/// `id` is `None` for a new address and set when editing.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct AddressForm {
    pub id: Option<String>,
    pub full_name: String,
    pub street: String,
    pub city: String,
    pub region: String,
    pub postal_code: Option<String>,
    pub country: String,
    pub dial_code: String,
    pub phone: String,
    pub is_default: bool,
}
