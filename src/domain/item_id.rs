//! ItemId value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Opaque identifier of a saved address or payment method.
///
/// Ids are assigned by the profile service (or minted as `addr_<uuid>` for
/// new addresses) and are unique within their owning collection. The
/// single-default operations in [`crate::default_set`] locate items by exact
/// id match, so ids are compared verbatim: no trimming or case folding.
///
/// # Example
///
/// ```
/// use storefront_profile::domain::ItemId;
///
/// let id = ItemId::new("addr_1").unwrap();
/// assert_eq!(id, "addr_1");
/// assert_ne!(id, "ADDR_1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ItemId(String);

impl ItemId {
    /// Wrap a service-assigned id. Whitespace-only ids are rejected since
    /// they could never be selected from a form.
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` with reason `empty` if the id is blank.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ValidationError::empty_id());
        }
        Ok(Self(id))
    }

    /// Get the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

}

impl PartialEq<str> for ItemId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for ItemId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

// Serde support - serialize as string
impl Serialize for ItemId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for ItemId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ItemId::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
