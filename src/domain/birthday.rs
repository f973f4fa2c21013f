//! Birthday value object and anniversary arithmetic.

use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Textual form used for parsing, display and persistence.
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

static BIRTHDAY_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{2}\.\d{2}\.\d{4}$").expect("valid birthday regex"));

/// A contact's date of birth.
///
/// Parsed from the fixed `DD.MM.YYYY` form. Impossible dates such as
/// `30.02.2021` are rejected rather than rolled over.
///
/// # Example
///
/// ```
/// use contact_ledger::domain::Birthday;
///
/// let birthday = Birthday::parse("29.02.2000").unwrap();
/// assert_eq!(birthday.to_string(), "29.02.2000");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parse a birthday from `DD.MM.YYYY` text.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidDate` on malformed text or a date that
    /// does not exist in the calendar.
    pub fn parse(raw: impl AsRef<str>) -> Result<Self, ValidationError> {
        let raw = raw.as_ref().trim();

        if !BIRTHDAY_SHAPE.is_match(raw) {
            return Err(ValidationError::InvalidDate(raw.to_string()));
        }

        NaiveDate::parse_from_str(raw, BIRTHDAY_FORMAT)
            .map(Self)
            .map_err(|_| ValidationError::InvalidDate(raw.to_string()))
    }

    /// The underlying date of birth.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// The date this birthday is celebrated in `year`.
    ///
    /// A 29 February birthday is celebrated on 1 March in non-leap years.
    /// Returns `None` only when `year` is outside chrono's supported range.
    pub fn anniversary_in(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.0.month(), self.0.day())
            .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
    }

    /// The first celebration on or after `today`.
    pub fn next_occurrence(&self, today: NaiveDate) -> Option<NaiveDate> {
        let this_year = self.anniversary_in(today.year())?;
        if this_year >= today {
            Some(this_year)
        } else {
            self.anniversary_in(today.year() + 1)
        }
    }

    /// Whole days from `today` to the next celebration (0 when it is today).
    pub fn days_until(&self, today: NaiveDate) -> Option<i64> {
        self.next_occurrence(today)
            .map(|next| (next - today).num_days())
    }
}

impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::parse(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}
