//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
///
/// Every variant is produced before any ledger state changes, so a failed
/// validation never leaves a record half-updated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided contact name is empty.
    EmptyName,

    /// The provided email address is invalid.
    InvalidEmail(String),

    /// The provided phone number is invalid.
    InvalidPhone(String),

    /// The provided date is malformed or not a real calendar date.
    InvalidDate(String),

    /// An operation argument is out of range.
    InvalidArgument(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Name cannot be empty"),
            Self::InvalidEmail(email) => write!(f, "Invalid email address: {}", email),
            Self::InvalidPhone(phone) => write!(f, "Invalid phone number: {}", phone),
            Self::InvalidDate(date) => {
                write!(f, "Invalid date (expected DD.MM.YYYY): {}", date)
            }
            Self::InvalidArgument(reason) => write!(f, "Invalid argument: {}", reason),
        }
    }
}

impl std::error::Error for ValidationError {}
