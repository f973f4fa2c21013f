//! Data models for the contact ledger.
//!
//! This module contains the [`Record`] structure: one contact with its
//! validated phones, emails, birthday and free-text fields.

pub mod record;

pub use record::Record;
