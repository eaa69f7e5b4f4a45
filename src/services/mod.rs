//! Application service layer.
//!
//! Services contain the form-submit logic and orchestrate the phone rules,
//! the single-default rule and the profile repository. Each service receives
//! its dependencies explicitly; there is no shared global state.

mod address_service;
mod payment_method_service;

pub use address_service::{AddressService, AddressServiceImpl};
pub use payment_method_service::{PaymentMethodService, PaymentMethodServiceImpl};
