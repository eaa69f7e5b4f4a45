//! HTTP client for the profile/update service.
//!
//! This module provides a synchronous HTTP client that can be used from async contexts
//! via `tokio::task::spawn_blocking`. The client handles authentication and error
//! mapping. The service answers every update with the stored profile, which callers
//! treat as authoritative.

mod async_wrapper;
pub use async_wrapper::{AsyncProfileClient, AsyncProfileClientImpl};

use crate::config::Config;
use crate::error::{ProfileApiError, ProfileApiResult};
use crate::metrics::Metrics;
use crate::models::{Address, AddressesUpdate, PaymentMethod, PaymentMethodsUpdate, Profile};
use std::sync::Arc;
use std::time::{Duration, Instant};

const PROFILE_PATH: &str = "/profile";

/// HTTP client for the profile service.
///
/// This client uses `ureq` for synchronous HTTP requests and can be called
/// from async contexts using `tokio::task::spawn_blocking`.
#[derive(Clone)]
pub struct ProfileClient {
    /// Base URL for the profile service
    base_url: String,

    /// Bearer token
    token: String,

    /// HTTP client agent
    agent: Arc<ureq::Agent>,

    /// Metrics collector
    metrics: Metrics,
}

impl ProfileClient {
    /// Create a new ProfileClient from configuration.
    pub fn new(config: &Config) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(config.request_timeout))
            .build();

        Self {
            base_url: config.profile_api_url.clone(),
            token: config.profile_api_token.clone(),
            agent: Arc::new(agent),
            metrics: Metrics::new(),
        }
    }

    /// Create a ProfileClient with a custom base URL (useful for testing).
    #[doc(hidden)]
    pub fn with_base_url(base_url: String, token: String) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(10))
            .build();

        Self {
            base_url,
            token,
            agent: Arc::new(agent),
            metrics: Metrics::new(),
        }
    }

    /// Get a reference to the metrics collector.
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Build a full URL from a path.
    fn build_url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }

    fn bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }

    /// Execute a GET request with authentication.
    fn get(&self, path: &str) -> ProfileApiResult<ureq::Response> {
        let start = Instant::now();
        let url = self.build_url(path);

        tracing::debug!("GET {}", url);

        let result = self
            .agent
            .get(&url)
            .set("Authorization", &self.bearer())
            .set("Accept", "application/json")
            .call()
            .map_err(|e| self.map_error(e));

        self.finish(&url, start, &result);
        result
    }

    /// Execute a PUT request with authentication and JSON body.
    fn put(&self, path: &str, body: &serde_json::Value) -> ProfileApiResult<ureq::Response> {
        let start = Instant::now();
        let url = self.build_url(path);

        tracing::debug!("PUT {}", url);

        let result = self
            .agent
            .put(&url)
            .set("Authorization", &self.bearer())
            .set("Content-Type", "application/json")
            .send_json(body)
            .map_err(|e| self.map_error(e));

        self.finish(&url, start, &result);
        result
    }

    fn finish(&self, url: &str, start: Instant, result: &ProfileApiResult<ureq::Response>) {
        let duration = start.elapsed();
        match result {
            Ok(response) => {
                tracing::debug!("{} - Success (status: {})", url, response.status());
            }
            Err(e) => {
                tracing::error!("{} - Error: {:?}", url, e);
                self.metrics.record_http_error();
            }
        }
        self.metrics.record_http_request(duration);
    }

    /// Map a ureq error to a ProfileApiError.
    fn map_error(&self, error: ureq::Error) -> ProfileApiError {
        match error {
            ureq::Error::Status(code, response) => {
                let message = response
                    .into_string()
                    .unwrap_or_else(|_| "Unknown error".to_string());

                match code {
                    401 => ProfileApiError::Unauthorized,
                    404 => ProfileApiError::NotFound(message),
                    429 => ProfileApiError::RateLimitExceeded,
                    _ => ProfileApiError::ApiError {
                        status: code,
                        message,
                    },
                }
            }
            ureq::Error::Transport(transport) => {
                if transport.kind() == ureq::ErrorKind::ConnectionFailed {
                    ProfileApiError::HttpError("Connection failed".to_string())
                } else if transport.kind() == ureq::ErrorKind::Io {
                    ProfileApiError::Timeout
                } else {
                    ProfileApiError::HttpError(transport.to_string())
                }
            }
        }
    }

    fn read_profile(&self, response: ureq::Response) -> ProfileApiResult<Profile> {
        let body = response
            .into_string()
            .map_err(|e| ProfileApiError::HttpError(e.to_string()))?;
        let profile: Profile = serde_json::from_str(&body)?;

        self.metrics
            .record_items_received(profile.addresses.len() + profile.payment_methods.len());
        Ok(profile)
    }

    /// Fetch the stored profile.
    pub fn get_profile(&self) -> ProfileApiResult<Profile> {
        let response = self.get(PROFILE_PATH)?;
        self.read_profile(response)
    }

    /// Replace the stored address list and return the service's copy.
    pub fn update_addresses(&self, addresses: &[Address]) -> ProfileApiResult<Vec<Address>> {
        let body = serde_json::to_value(AddressesUpdate { addresses })?;
        let response = self.put(PROFILE_PATH, &body)?;
        let profile = self.read_profile(response)?;

        self.metrics.record_profile_update();
        tracing::info!(count = profile.addresses.len(), "Addresses updated");
        Ok(profile.addresses)
    }

    /// Replace the stored payment-method list and return the service's copy.
    pub fn update_payment_methods(
        &self,
        payment_methods: &[PaymentMethod],
    ) -> ProfileApiResult<Vec<PaymentMethod>> {
        let body = serde_json::to_value(PaymentMethodsUpdate { payment_methods })?;
        let response = self.put(PROFILE_PATH, &body)?;
        let profile = self.read_profile(response)?;

        self.metrics.record_profile_update();
        tracing::info!(
            count = profile.payment_methods.len(),
            "Payment methods updated"
        );
        Ok(profile.payment_methods)
    }
}
