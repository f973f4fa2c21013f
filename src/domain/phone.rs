//! PhoneNumber value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Characters allowed in a phone number: an optional leading '+', then digits
/// and the separators space, hyphen, period and parentheses.
static PHONE_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9 ().-]+$").expect("valid phone regex"));

/// Fewest digits accepted (short local numbers).
const MIN_DIGITS: usize = 6;

/// Most digits accepted (E.164 maximum).
const MAX_DIGITS: usize = 15;

/// A type-safe wrapper for phone numbers.
///
/// The number is stored verbatim after trimming, so `"+1 (555) 123-4567"` and
/// `"15551234567"` are distinct entries on a record.
///
/// # Example
///
/// ```
/// use contact_ledger::domain::PhoneNumber;
///
/// let phone = PhoneNumber::new("+1-555-123-4567").unwrap();
/// assert_eq!(phone.as_str(), "+1-555-123-4567");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a new PhoneNumber, validating the format.
    ///
    /// # Validation Rules
    ///
    /// - Optional leading '+'
    /// - Otherwise only digits, spaces, hyphens, periods and parentheses
    /// - Between 6 and 15 digits in total
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if the phone format is invalid.
    pub fn new(phone: impl AsRef<str>) -> Result<Self, ValidationError> {
        let phone = phone.as_ref().trim();

        if !Self::is_valid(phone) {
            return Err(ValidationError::InvalidPhone(phone.to_string()));
        }

        Ok(Self(phone.to_string()))
    }

    fn is_valid(phone: &str) -> bool {
        if !PHONE_SHAPE.is_match(phone) {
            return false;
        }

        let digits = phone.chars().filter(|c| c.is_ascii_digit()).count();
        (MIN_DIGITS..=MAX_DIGITS).contains(&digits)
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

// Serde support - serialize as string
impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for PhoneNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PhoneNumber::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
