use crate::client::AsyncProfileClient;
use crate::error::ProfileApiResult;
use crate::models::{Address, PaymentMethod, Profile};
use crate::repositories::traits::ProfileRepository;
use async_trait::async_trait;
use std::sync::Arc;

/// Profile repository backed by the profile service's HTTP API.
///
/// Delegates every operation to the AsyncProfileClient.
pub struct HttpProfileRepository {
    client: Arc<dyn AsyncProfileClient>,
}

impl HttpProfileRepository {
    /// Create a new HttpProfileRepository with the given client.
    pub fn new(client: Arc<dyn AsyncProfileClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ProfileRepository for HttpProfileRepository {
    async fn load_profile(&self) -> ProfileApiResult<Profile> {
        self.client.get_profile().await
    }

    async fn save_addresses(&self, addresses: &[Address]) -> ProfileApiResult<Vec<Address>> {
        self.client.update_addresses(addresses).await
    }

    async fn save_payment_methods(
        &self,
        payment_methods: &[PaymentMethod],
    ) -> ProfileApiResult<Vec<PaymentMethod>> {
        self.client.update_payment_methods(payment_methods).await
    }
}
