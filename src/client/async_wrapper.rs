//! Async wrapper around synchronous ProfileClient.
//!
//! This module provides an async interface to the synchronous ProfileClient by using
//! `tokio::task::spawn_blocking` to run HTTP operations on a dedicated thread pool,
//! preventing blocking of the async runtime.

use crate::client::ProfileClient;
use crate::error::{ProfileApiError, ProfileApiResult};
use crate::models::{Address, PaymentMethod, Profile};
use async_trait::async_trait;
use std::sync::Arc;

/// Async wrapper trait for profile service operations.
#[async_trait]
pub trait AsyncProfileClient: Send + Sync {
    async fn get_profile(&self) -> ProfileApiResult<Profile>;
    async fn update_addresses(&self, addresses: &[Address]) -> ProfileApiResult<Vec<Address>>;
    async fn update_payment_methods(
        &self,
        payment_methods: &[PaymentMethod],
    ) -> ProfileApiResult<Vec<PaymentMethod>>;
}

/// Async wrapper around synchronous ProfileClient.
#[derive(Clone)]
pub struct AsyncProfileClientImpl {
    client: Arc<ProfileClient>,
}

impl AsyncProfileClientImpl {
    pub fn new(client: ProfileClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }
}

fn join_error(e: tokio::task::JoinError) -> ProfileApiError {
    ProfileApiError::HttpError(format!("Task join error: {}", e))
}

#[async_trait]
impl AsyncProfileClient for AsyncProfileClientImpl {
    async fn get_profile(&self) -> ProfileApiResult<Profile> {
        let client = self.client.clone();

        tokio::task::spawn_blocking(move || client.get_profile())
            .await
            .map_err(join_error)?
    }

    async fn update_addresses(&self, addresses: &[Address]) -> ProfileApiResult<Vec<Address>> {
        let client = self.client.clone();
        let addresses = addresses.to_vec();

        tokio::task::spawn_blocking(move || client.update_addresses(&addresses))
            .await
            .map_err(join_error)?
    }

    async fn update_payment_methods(
        &self,
        payment_methods: &[PaymentMethod],
    ) -> ProfileApiResult<Vec<PaymentMethod>> {
        let client = self.client.clone();
        let payment_methods = payment_methods.to_vec();

        tokio::task::spawn_blocking(move || client.update_payment_methods(&payment_methods))
            .await
            .map_err(join_error)?
    }
}
