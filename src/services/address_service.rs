//! Address book service.
//!
//! Form handlers for the saved-addresses page: validate, apply the
//! single-default rule, persist, and hand back the stored list.

use crate::default_set;
use crate::domain::{DialCode, ItemId};
use crate::error::ProfileResult;
use crate::models::{Address, AddressForm};
use crate::regions::{FieldRequirement, RegionalPhoneRule};
use crate::repositories::ProfileRepository;
use async_trait::async_trait;
use std::sync::Arc;

/// Address operations exposed to the form layer.
#[async_trait]
pub trait AddressService: Send + Sync {
    /// The stored address list.
    async fn list(&self) -> ProfileResult<Vec<Address>>;

    /// Create or edit an address from a submitted form.
    async fn save(&self, form: AddressForm) -> ProfileResult<Vec<Address>>;

    /// Make one address the default.
    async fn set_default(&self, id: &ItemId) -> ProfileResult<Vec<Address>>;

    /// Delete an address. Deleting the default leaves the list without one.
    async fn remove(&self, id: &ItemId) -> ProfileResult<Vec<Address>>;
}

/// Default implementation of AddressService.
pub struct AddressServiceImpl {
    repository: Arc<dyn ProfileRepository>,
    phone_rule: RegionalPhoneRule,
}

impl AddressServiceImpl {
    /// Create a new address service.
    pub fn new(repository: Arc<dyn ProfileRepository>, phone_rule: RegionalPhoneRule) -> Self {
        Self {
            repository,
            phone_rule,
        }
    }

    /// Turn a submitted form into an address, validating the phone field.
    fn build_address(&self, form: AddressForm) -> ProfileResult<Address> {
        let dial_code = DialCode::new(&form.dial_code)?;

        let phone = self
            .phone_rule
            .validate_field(&dial_code, &form.phone, FieldRequirement::Optional)?
            .map(|phone| phone.formatted());

        let id = match form.id {
            Some(id) => ItemId::new(id)?,
            None => ItemId::new(format!("addr_{}", uuid::Uuid::new_v4().simple()))?,
        };

        Ok(Address {
            id,
            full_name: form.full_name.trim().to_string(),
            street: form.street.trim().to_string(),
            city: form.city.trim().to_string(),
            region: form.region.trim().to_string(),
            postal_code: form
                .postal_code
                .map(|code| code.trim().to_string())
                .filter(|code| !code.is_empty()),
            country: form.country,
            dial_code,
            phone,
            is_default: form.is_default,
        })
    }

    /// The stored addresses, repaired to a single default before any edit.
    async fn current(&self) -> ProfileResult<Vec<Address>> {
        let profile = self.repository.load_profile().await?;
        Ok(default_set::enforce_single_default(&profile.addresses))
    }

    async fn persist(&self, addresses: Vec<Address>) -> ProfileResult<Vec<Address>> {
        let stored = self.repository.save_addresses(&addresses).await?;
        Ok(default_set::enforce_single_default(&stored))
    }
}

#[async_trait]
impl AddressService for AddressServiceImpl {
    async fn list(&self) -> ProfileResult<Vec<Address>> {
        self.current().await
    }

    async fn save(&self, form: AddressForm) -> ProfileResult<Vec<Address>> {
        let address = self.build_address(form)?;
        tracing::debug!(id = %address.id, is_default = address.is_default, "Saving address");

        let current = self.current().await?;
        let updated = default_set::upsert(&current, address);
        self.persist(updated).await
    }

    async fn set_default(&self, id: &ItemId) -> ProfileResult<Vec<Address>> {
        let current = self.current().await?;
        let updated = default_set::promote(&current, id)?;

        tracing::info!(id = %id, "Default address changed");
        self.persist(updated).await
    }

    async fn remove(&self, id: &ItemId) -> ProfileResult<Vec<Address>> {
        let current = self.current().await?;
        let updated = default_set::remove_and_reconcile(&current, id)?;

        tracing::info!(id = %id, "Address removed");
        self.persist(updated).await
    }
}
