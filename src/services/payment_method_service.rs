//! Payment method service.

use crate::default_set;
use crate::domain::ItemId;
use crate::error::ProfileResult;
use crate::models::{PaymentDetails, PaymentMethod};
use crate::regions::RegionalPhoneRule;
use crate::repositories::ProfileRepository;
use async_trait::async_trait;
use std::sync::Arc;

/// Payment method operations exposed to the form layer.
#[async_trait]
pub trait PaymentMethodService: Send + Sync {
    async fn list(&self) -> ProfileResult<Vec<PaymentMethod>>;

    /// Create or edit a payment method. Mobile-money phones must validate.
    async fn save(&self, method: PaymentMethod) -> ProfileResult<Vec<PaymentMethod>>;

    async fn set_default(&self, id: &ItemId) -> ProfileResult<Vec<PaymentMethod>>;

    async fn remove(&self, id: &ItemId) -> ProfileResult<Vec<PaymentMethod>>;
}

/// Default implementation of PaymentMethodService.
pub struct PaymentMethodServiceImpl {
    repository: Arc<dyn ProfileRepository>,
    phone_rule: RegionalPhoneRule,
}

impl PaymentMethodServiceImpl {
    /// Create a new payment method service.
    pub fn new(repository: Arc<dyn ProfileRepository>, phone_rule: RegionalPhoneRule) -> Self {
        Self {
            repository,
            phone_rule,
        }
    }

    /// Replace a mobile-money phone with its validated display form.
    fn normalize_details(&self, details: PaymentDetails) -> ProfileResult<PaymentDetails> {
        match details {
            PaymentDetails::MobileMoney {
                provider,
                dial_code,
                phone,
            } => {
                let phone = self.phone_rule.validate(&dial_code, &phone)?.formatted();

                Ok(PaymentDetails::MobileMoney {
                    provider,
                    dial_code,
                    phone,
                })
            }
            card @ PaymentDetails::Card { .. } => Ok(card),
        }
    }

    async fn current(&self) -> ProfileResult<Vec<PaymentMethod>> {
        let profile = self.repository.load_profile().await?;
        Ok(default_set::enforce_single_default(&profile.payment_methods))
    }

    async fn persist(&self, methods: Vec<PaymentMethod>) -> ProfileResult<Vec<PaymentMethod>> {
        let stored = self.repository.save_payment_methods(&methods).await?;
        Ok(default_set::enforce_single_default(&stored))
    }
}

#[async_trait]
impl PaymentMethodService for PaymentMethodServiceImpl {
    async fn list(&self) -> ProfileResult<Vec<PaymentMethod>> {
        self.current().await
    }

    async fn save(&self, method: PaymentMethod) -> ProfileResult<Vec<PaymentMethod>> {
        let method = PaymentMethod {
            details: self.normalize_details(method.details)?,
            ..method
        };
        tracing::debug!(id = %method.id, is_default = method.is_default, "Saving payment method");

        let current = self.current().await?;
        let updated = default_set::upsert(&current, method);
        self.persist(updated).await
    }

    async fn set_default(&self, id: &ItemId) -> ProfileResult<Vec<PaymentMethod>> {
        let current = self.current().await?;
        let updated = default_set::promote(&current, id)?;

        tracing::info!(id = %id, "Default payment method changed");
        self.persist(updated).await
    }

    async fn remove(&self, id: &ItemId) -> ProfileResult<Vec<PaymentMethod>> {
        let current = self.current().await?;
        let updated = default_set::remove_and_reconcile(&current, id)?;

        tracing::info!(id = %id, "Payment method removed");
        self.persist(updated).await
    }
}
