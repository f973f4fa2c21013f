//! Free-text search over contact records.
//!
//! This module provides case-insensitive substring matching across a record's
//! name, phones, emails, address and notes.

pub mod substring;

pub use substring::{SearchHit, SearchableField, SubstringQuery};
