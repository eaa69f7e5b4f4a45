//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for item ids, dial codes and
//! validated phone numbers. These value objects provide validation at
//! construction time and prevent invalid data from being represented in the
//! system.

pub mod dial_code;
pub mod errors;
pub mod item_id;
pub mod phone;

pub use dial_code::DialCode;
pub use errors::{ValidationError, ValidationReason};
pub use item_id::ItemId;
pub use phone::ValidPhone;
