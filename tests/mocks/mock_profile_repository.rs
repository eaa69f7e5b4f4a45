use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use storefront_profile::error::{ProfileApiError, ProfileApiResult};
use storefront_profile::models::{Address, PaymentMethod, Profile};
use storefront_profile::repositories::ProfileRepository;

/// Mock profile repository for testing.
///
/// Holds the profile in memory, tracks method calls for verification and can
/// be told to fail the next save.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockProfileRepository {
    profile: Arc<Mutex<Profile>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
    fail_saves: Arc<Mutex<bool>>,
}

#[allow(dead_code)]
impl MockProfileRepository {
    /// Create a new empty MockProfileRepository.
    pub fn new() -> Self {
        Self::with_profile(Profile::default())
    }

    pub fn with_profile(profile: Profile) -> Self {
        Self {
            profile: Arc::new(Mutex::new(profile)),
            call_counts: Arc::new(Mutex::new(HashMap::new())),
            fail_saves: Arc::new(Mutex::new(false)),
        }
    }

    pub fn addresses(&self) -> Vec<Address> {
        self.profile.lock().unwrap().addresses.clone()
    }

    pub fn payment_methods(&self) -> Vec<PaymentMethod> {
        self.profile.lock().unwrap().payment_methods.clone()
    }

    /// Make subsequent saves fail with a 503.
    pub fn fail_saves(&self) {
        *self.fail_saves.lock().unwrap() = true;
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }

    fn check_save(&self) -> ProfileApiResult<()> {
        if *self.fail_saves.lock().unwrap() {
            return Err(ProfileApiError::ApiError {
                status: 503,
                message: "unavailable".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for MockProfileRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProfileRepository for MockProfileRepository {
    async fn load_profile(&self) -> ProfileApiResult<Profile> {
        self.track_call("load_profile");
        Ok(self.profile.lock().unwrap().clone())
    }

    async fn save_addresses(&self, addresses: &[Address]) -> ProfileApiResult<Vec<Address>> {
        self.track_call("save_addresses");
        self.check_save()?;

        let mut profile = self.profile.lock().unwrap();
        profile.addresses = addresses.to_vec();
        Ok(profile.addresses.clone())
    }

    async fn save_payment_methods(
        &self,
        payment_methods: &[PaymentMethod],
    ) -> ProfileApiResult<Vec<PaymentMethod>> {
        self.track_call("save_payment_methods");
        self.check_save()?;

        let mut profile = self.profile.lock().unwrap();
        profile.payment_methods = payment_methods.to_vec();
        Ok(profile.payment_methods.clone())
    }
}
