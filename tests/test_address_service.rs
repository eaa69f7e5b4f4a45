//! Integration tests for the address book service against an in-memory
//! profile repository.

mod mocks;

use mocks::MockProfileRepository;
use std::sync::Arc;
use storefront_profile::default_set::default_count;
use storefront_profile::error::{CollectionError, ProfileError};
use storefront_profile::models::{Address, AddressForm, Profile};
use storefront_profile::repositories::ProfileRepository;
use storefront_profile::{
    AddressService, AddressServiceImpl, DialCode, ItemId, RegionalPhoneRule, ValidationReason,
};

fn address(id: &str, is_default: bool) -> Address {
    Address {
        id: ItemId::new(id).unwrap(),
        full_name: format!("Recipient {}", id),
        street: "Kenyatta Avenue 1".to_string(),
        city: "Nairobi".to_string(),
        region: "Nairobi County".to_string(),
        postal_code: None,
        country: "KE".to_string(),
        dial_code: DialCode::new("254").unwrap(),
        phone: None,
        is_default,
    }
}

fn form(phone: &str) -> AddressForm {
    AddressForm {
        full_name: "  Achieng Otieno ".to_string(),
        street: "Oginga Odinga St 4".to_string(),
        city: "Kisumu".to_string(),
        country: "KE".to_string(),
        dial_code: "+254".to_string(),
        phone: phone.to_string(),
        ..Default::default()
    }
}

fn service_with(addresses: Vec<Address>) -> (MockProfileRepository, AddressServiceImpl) {
    let repo = MockProfileRepository::with_profile(Profile {
        addresses,
        payment_methods: Vec::new(),
    });
    let service = AddressServiceImpl::new(
        Arc::new(repo.clone()) as Arc<dyn ProfileRepository>,
        RegionalPhoneRule::new(),
    );
    (repo, service)
}

fn id(s: &str) -> ItemId {
    ItemId::new(s).unwrap()
}

#[tokio::test]
async fn test_save_new_address_formats_phone() {
    let (repo, service) = service_with(vec![address("a1", true)]);

    let stored = service.save(form("0712 345678")).await.unwrap();

    assert_eq!(stored.len(), 2);
    let added = &stored[1];
    assert!(added.id.as_str().starts_with("addr_"));
    assert_eq!(added.full_name, "Achieng Otieno");
    assert_eq!(added.phone.as_deref(), Some("+254 712 345 678"));
    assert!(!added.is_default);
    assert!(stored[0].is_default);
    assert_eq!(repo.get_call_count("save_addresses"), 1);
}

#[tokio::test]
async fn test_save_without_phone_is_allowed() {
    let (_repo, service) = service_with(Vec::new());

    let stored = service.save(form("")).await.unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].phone, None);
}

#[tokio::test]
async fn test_save_rejects_bad_phone_without_persisting() {
    let (repo, service) = service_with(vec![address("a1", true)]);

    let err = service.save(form("0512 345678")).await.unwrap_err();
    match err {
        ProfileError::Validation(e) => assert_eq!(e.reason, ValidationReason::PatternMismatch),
        other => panic!("Expected validation error, got: {:?}", other),
    }
    assert_eq!(repo.get_call_count("save_addresses"), 0);
    assert_eq!(repo.addresses().len(), 1);
}

#[tokio::test]
async fn test_save_rejects_bad_dial_code() {
    let (_repo, service) = service_with(Vec::new());

    let mut bad = form("0712345678");
    bad.dial_code = "Kenya".to_string();
    let err = service.save(bad).await.unwrap_err();
    assert!(matches!(
        err,
        ProfileError::Validation(ref e) if e.reason == ValidationReason::InvalidDialCode
    ));
}

#[tokio::test]
async fn test_save_default_address_clears_previous_default() {
    let (repo, service) = service_with(vec![address("a1", true), address("a2", false)]);

    let mut new_default = form("");
    new_default.is_default = true;
    let stored = service.save(new_default).await.unwrap();

    assert_eq!(default_count(&stored), 1);
    assert!(stored[2].is_default);
    assert!(!repo.addresses()[0].is_default);
}

#[tokio::test]
async fn test_edit_replaces_in_place() {
    let (_repo, service) = service_with(vec![address("a1", false), address("a2", true)]);

    let mut edit = form("+254 110 123 456");
    edit.id = Some("a1".to_string());
    let stored = service.save(edit).await.unwrap();

    assert_eq!(stored.len(), 2);
    assert_eq!(stored[0].id, "a1");
    assert_eq!(stored[0].city, "Kisumu");
    assert_eq!(stored[0].phone.as_deref(), Some("+254 110 123 456"));
    assert!(stored[1].is_default);
}

#[tokio::test]
async fn test_set_default() {
    let (repo, service) = service_with(vec![address("1", true), address("2", false)]);

    let stored = service.set_default(&id("2")).await.unwrap();
    let flags: Vec<bool> = stored.iter().map(|a| a.is_default).collect();
    assert_eq!(flags, vec![false, true]);
    assert_eq!(repo.addresses(), stored);
}

#[tokio::test]
async fn test_set_default_unknown_id() {
    let (repo, service) = service_with(vec![address("1", true)]);

    let err = service.set_default(&id("9")).await.unwrap_err();
    assert!(matches!(
        err,
        ProfileError::Collection(CollectionError::NotFound(_))
    ));
    assert_eq!(repo.get_call_count("save_addresses"), 0);
}

#[tokio::test]
async fn test_remove_default_leaves_no_default() {
    let (_repo, service) = service_with(vec![address("1", true), address("2", false)]);

    let stored = service.remove(&id("1")).await.unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].id, "2");
    assert!(!stored[0].is_default);
}

#[tokio::test]
async fn test_remove_from_empty_list() {
    let (_repo, service) = service_with(Vec::new());

    let err = service.remove(&id("1")).await.unwrap_err();
    assert!(matches!(
        err,
        ProfileError::Collection(CollectionError::NotFound(_))
    ));
}

#[tokio::test]
async fn test_list_repairs_multiple_defaults() {
    let (_repo, service) = service_with(vec![
        address("1", false),
        address("2", true),
        address("3", true),
    ]);

    let listed = service.list().await.unwrap();
    let flags: Vec<bool> = listed.iter().map(|a| a.is_default).collect();
    assert_eq!(flags, vec![false, true, false]);
}

#[tokio::test]
async fn test_remove_over_multiple_defaults_persists_one_default() {
    let (repo, service) = service_with(vec![
        address("1", true),
        address("2", true),
        address("3", false),
    ]);

    let stored = service.remove(&id("3")).await.unwrap();

    assert_eq!(default_count(&stored), 1);
    let persisted = repo.addresses();
    assert_eq!(default_count(&persisted), 1);
    assert!(persisted[0].is_default);
}

#[tokio::test]
async fn test_save_non_default_over_multiple_defaults_persists_one_default() {
    let (repo, service) = service_with(vec![address("1", true), address("2", true)]);

    let stored = service.save(form("")).await.unwrap();

    assert_eq!(stored.len(), 3);
    assert_eq!(default_count(&stored), 1);
    assert_eq!(default_count(&repo.addresses()), 1);
    assert!(repo.addresses()[0].is_default);
}

#[tokio::test]
async fn test_save_failure_is_reported() {
    let (repo, service) = service_with(vec![address("1", false)]);
    repo.fail_saves();

    let err = service.set_default(&id("1")).await.unwrap_err();
    assert!(matches!(err, ProfileError::Api(_)));
    assert!(!repo.addresses()[0].is_default);
}
