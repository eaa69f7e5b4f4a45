use crate::error::ProfileApiResult;
use crate::models::{Address, PaymentMethod, Profile};
use async_trait::async_trait;

/// Repository for the user's saved addresses and payment methods.
///
/// Provides abstraction over the profile/update service, enabling different
/// implementations (HTTP client, mock). Save operations return the stored
/// collection, which callers should prefer over their local copy.
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Retrieve the stored profile.
    async fn load_profile(&self) -> ProfileApiResult<Profile>;

    /// Replace the address list.
    async fn save_addresses(&self, addresses: &[Address]) -> ProfileApiResult<Vec<Address>>;

    /// Replace the payment-method list.
    async fn save_payment_methods(
        &self,
        payment_methods: &[PaymentMethod],
    ) -> ProfileApiResult<Vec<PaymentMethod>>;
}
