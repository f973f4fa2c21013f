//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for the values a contact record
//! holds: its name, phone numbers, email addresses and birthday. These value
//! objects validate at construction time, so an invalid value can never reach
//! a record or the persisted ledger.

pub mod birthday;
pub mod email;
pub mod errors;
pub mod name;
pub mod phone;

pub use birthday::Birthday;
pub use email::EmailAddress;
pub use errors::ValidationError;
pub use name::ContactName;
pub use phone::PhoneNumber;
