//! Record model representing one contact in the ledger.

use crate::domain::{Birthday, ContactName, EmailAddress, PhoneNumber, ValidationError};
use crate::error::{EntryKind, LedgerError, LedgerResult};
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static TAG_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"#([\w-]+)").expect("valid tag regex"));

/// A contact in the ledger.
///
/// Phones and emails keep the order they were added in and never hold
/// duplicates. Every mutator validates its input first and leaves the record
/// untouched when it fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RecordDocument")]
pub struct Record {
    name: ContactName,
    phones: Vec<PhoneNumber>,
    emails: Vec<EmailAddress>,
    #[serde(skip_serializing_if = "Option::is_none")]
    address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
    #[serde(skip_serializing_if = "Option::is_none")]
    notes: Option<String>,
}

/// Raw persisted shape of a record, validated into a [`Record`] on load.
#[derive(Debug, Deserialize)]
struct RecordDocument {
    name: String,
    #[serde(default)]
    phones: Vec<String>,
    #[serde(default)]
    emails: Vec<String>,
    #[serde(default)]
    address: Option<String>,
    #[serde(default)]
    birthday: Option<String>,
    #[serde(default)]
    notes: Option<String>,
}

impl TryFrom<RecordDocument> for Record {
    type Error = LedgerError;

    fn try_from(doc: RecordDocument) -> Result<Self, Self::Error> {
        let mut record = Record::new(ContactName::new(&doc.name)?);
        for phone in &doc.phones {
            record.add_phone(phone)?;
        }
        for email in &doc.emails {
            record.add_email(email)?;
        }
        if let Some(birthday) = &doc.birthday {
            record.add_birthday(birthday)?;
        }
        record.set_address(doc.address);
        record.set_notes(doc.notes);
        Ok(record)
    }
}

/// Trim optional free text, mapping blank input to `None`.
fn non_blank(text: Option<String>) -> Option<String> {
    text.map(|t| t.trim().to_string()).filter(|t| !t.is_empty())
}

impl Record {
    /// Create an empty record filed under `name`.
    pub fn new(name: ContactName) -> Self {
        Self {
            name,
            phones: Vec::new(),
            emails: Vec::new(),
            address: None,
            birthday: None,
            notes: None,
        }
    }

    /// Create an empty record from a raw name.
    pub fn named(name: &str) -> Result<Self, ValidationError> {
        ContactName::new(name).map(Self::new)
    }

    pub fn name(&self) -> &ContactName {
        &self.name
    }

    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    pub fn emails(&self) -> &[EmailAddress] {
        &self.emails
    }

    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    pub fn birthday(&self) -> Option<Birthday> {
        self.birthday
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    /// Rename the record. Only the ledger calls this, so the key stays in sync.
    pub(crate) fn set_name(&mut self, name: ContactName) {
        self.name = name;
    }

    /// Validate and append a phone number.
    ///
    /// # Errors
    ///
    /// `Validation` if `raw` is not a phone number, `DuplicateEntry` if the
    /// record already has it.
    pub fn add_phone(&mut self, raw: &str) -> LedgerResult<&mut Self> {
        let phone = PhoneNumber::new(raw)?;
        if self.phones.contains(&phone) {
            return Err(LedgerError::duplicate(EntryKind::Phone, phone.into_inner()));
        }
        self.phones.push(phone);
        Ok(self)
    }

    /// Remove a phone number.
    ///
    /// # Errors
    ///
    /// `NotFound` if the record has no such phone.
    pub fn remove_phone(&mut self, value: &str) -> LedgerResult<&mut Self> {
        let index = self.phone_index(value)?;
        self.phones.remove(index);
        Ok(self)
    }

    /// Replace `old` with `new`, keeping its position.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> LedgerResult<&mut Self> {
        let phone = PhoneNumber::new(new)?;
        let index = self.phone_index(old)?;
        if self.phones[index] != phone && self.phones.contains(&phone) {
            return Err(LedgerError::duplicate(EntryKind::Phone, phone.into_inner()));
        }
        self.phones[index] = phone;
        Ok(self)
    }

    pub fn has_phone(&self, value: &str) -> bool {
        self.phone_index(value).is_ok()
    }

    fn phone_index(&self, value: &str) -> LedgerResult<usize> {
        let value = value.trim();
        self.phones
            .iter()
            .position(|p| p.as_str() == value)
            .ok_or_else(|| LedgerError::not_found(EntryKind::Phone, value))
    }

    /// Validate and append an email address.
    ///
    /// # Errors
    ///
    /// `Validation` if `raw` is not an email address, `DuplicateEntry` if the
    /// record already has it.
    pub fn add_email(&mut self, raw: &str) -> LedgerResult<&mut Self> {
        let email = EmailAddress::new(raw)?;
        if self.emails.contains(&email) {
            return Err(LedgerError::duplicate(EntryKind::Email, email.into_inner()));
        }
        self.emails.push(email);
        Ok(self)
    }

    pub fn remove_email(&mut self, value: &str) -> LedgerResult<&mut Self> {
        let index = self.email_index(value)?;
        self.emails.remove(index);
        Ok(self)
    }

    pub fn edit_email(&mut self, old: &str, new: &str) -> LedgerResult<&mut Self> {
        let email = EmailAddress::new(new)?;
        let index = self.email_index(old)?;
        if self.emails[index] != email && self.emails.contains(&email) {
            return Err(LedgerError::duplicate(EntryKind::Email, email.into_inner()));
        }
        self.emails[index] = email;
        Ok(self)
    }

    pub fn has_email(&self, value: &str) -> bool {
        self.email_index(value).is_ok()
    }

    fn email_index(&self, value: &str) -> LedgerResult<usize> {
        let value = value.trim();
        self.emails
            .iter()
            .position(|e| e.as_str() == value)
            .ok_or_else(|| LedgerError::not_found(EntryKind::Email, value))
    }

    /// Parse `raw` as `DD.MM.YYYY` and replace any existing birthday.
    pub fn add_birthday(&mut self, raw: &str) -> LedgerResult<&mut Self> {
        self.birthday = Some(Birthday::parse(raw)?);
        Ok(self)
    }

    pub fn clear_birthday(&mut self) -> &mut Self {
        self.birthday = None;
        self
    }

    /// Set the postal address; blank input clears it.
    pub fn set_address(&mut self, address: impl Into<Option<String>>) -> &mut Self {
        self.address = non_blank(address.into());
        self
    }

    /// Set the notes; blank input clears them.
    pub fn set_notes(&mut self, notes: impl Into<Option<String>>) -> &mut Self {
        self.notes = non_blank(notes.into());
        self
    }

    /// `#tag` tokens in the notes, lower-cased, first occurrence wins.
    pub fn tags(&self) -> Vec<String> {
        let mut tags: Vec<String> = Vec::new();
        if let Some(notes) = &self.notes {
            for capture in TAG_PATTERN.captures_iter(notes) {
                let tag = capture[1].to_lowercase();
                if !tags.contains(&tag) {
                    tags.push(tag);
                }
            }
        }
        tags
    }

    /// Days from `today` until the next birthday, or `None` without one.
    pub fn days_until_birthday(&self, today: NaiveDate) -> Option<i64> {
        self.birthday.and_then(|b| b.days_until(today))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> Record {
        Record::named("Ada Lovelace").unwrap()
    }

    #[test]
    fn test_add_phone_rejects_duplicates() {
        let mut r = record();
        r.add_phone("123456").unwrap();

        let err = r.add_phone("123456").unwrap_err();
        assert!(matches!(
            err,
            LedgerError::DuplicateEntry {
                kind: EntryKind::Phone,
                ..
            }
        ));
        assert_eq!(r.phones().len(), 1);
    }

    #[test]
    fn test_add_phone_invalid_leaves_record_unchanged() {
        let mut r = record();
        r.add_phone("123456").unwrap();
        assert!(r.add_phone("not-a-phone").is_err());
        assert_eq!(r.phones().len(), 1);
    }

    #[test]
    fn test_mutators_chain() {
        let mut r = record();
        r.add_phone("0501234567")
            .unwrap()
            .add_email("ada@example.com")
            .unwrap()
            .set_address(Some("12 St James's Square".to_string()));

        assert_eq!(r.phones()[0].as_str(), "0501234567");
        assert_eq!(r.emails()[0].as_str(), "ada@example.com");
        assert_eq!(r.address(), Some("12 St James's Square"));
    }

    #[test]
    fn test_remove_phone() {
        let mut r = record();
        r.add_phone("111111").unwrap().add_phone("222222").unwrap();
        r.remove_phone("111111").unwrap();

        assert!(!r.has_phone("111111"));
        assert!(r.has_phone("222222"));
    }

    #[test]
    fn test_remove_missing_phone_reports_not_found() {
        let mut r = record();
        let err = r.remove_phone("999999").unwrap_err();
        assert!(matches!(
            err,
            LedgerError::NotFound {
                kind: EntryKind::Phone,
                ..
            }
        ));
    }

    #[test]
    fn test_edit_phone_keeps_position() {
        let mut r = record();
        r.add_phone("111111").unwrap().add_phone("222222").unwrap();
        r.edit_phone("111111", "333333").unwrap();

        let phones: Vec<&str> = r.phones().iter().map(|p| p.as_str()).collect();
        assert_eq!(phones, vec!["333333", "222222"]);
    }

    #[test]
    fn test_edit_phone_validates_before_lookup() {
        let mut r = record();
        r.add_phone("111111").unwrap();

        let err = r.edit_phone("111111", "bad").unwrap_err();
        assert_eq!(err.kind(), "invalid_phone");
        assert!(r.has_phone("111111"));

        let err = r.edit_phone("999999", "333333").unwrap_err();
        assert_eq!(err.kind(), "not_found");
    }

    #[test]
    fn test_edit_phone_to_existing_number_fails() {
        let mut r = record();
        r.add_phone("111111").unwrap().add_phone("222222").unwrap();

        assert!(r.edit_phone("111111", "222222").is_err());
        assert!(r.edit_phone("111111", "111111").is_ok());
        assert_eq!(r.phones().len(), 2);
    }

    #[test]
    fn test_email_operations() {
        let mut r = record();
        r.add_email("ada@example.com").unwrap();
        assert!(r.add_email("ada@example.com").is_err());
        assert!(r.add_email("not-an-email").is_err());

        r.edit_email("ada@example.com", "ada@engine.org").unwrap();
        assert!(r.has_email("ada@engine.org"));
        assert!(!r.has_email("ada@example.com"));

        r.remove_email("ada@engine.org").unwrap();
        assert!(r.emails().is_empty());
        assert!(r.remove_email("ada@engine.org").is_err());
    }

    #[test]
    fn test_add_birthday_replaces_and_failure_keeps_previous() {
        let mut r = record();
        r.add_birthday("10.12.1815").unwrap();
        r.add_birthday("11.12.1815").unwrap();
        assert_eq!(r.birthday().unwrap().to_string(), "11.12.1815");

        let err = r.add_birthday("31.13.2020").unwrap_err();
        assert_eq!(err.kind(), "invalid_date");
        assert_eq!(r.birthday().unwrap().to_string(), "11.12.1815");
    }

    #[test]
    fn test_blank_free_text_clears_field() {
        let mut r = record();
        r.set_notes(Some("met at the Analytical Society".to_string()));
        r.set_notes(Some("   ".to_string()));
        assert_eq!(r.notes(), None);
    }

    #[test]
    fn test_tags_from_notes() {
        let mut r = record();
        r.set_notes(Some("#Math friend, #poetry fan, #math again".to_string()));
        assert_eq!(r.tags(), vec!["math".to_string(), "poetry".to_string()]);
    }

    #[test]
    fn test_days_until_birthday() {
        let mut r = record();
        let today = NaiveDate::from_ymd_opt(2024, 12, 1).unwrap();
        assert_eq!(r.days_until_birthday(today), None);

        r.add_birthday("10.12.1815").unwrap();
        assert_eq!(r.days_until_birthday(today), Some(9));
    }

    #[test]
    fn test_deserialize_rejects_duplicate_phones() {
        let json = r#"{"name": "Ada", "phones": ["123456", "123456"], "emails": []}"#;
        let result: Result<Record, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_accepts_null_and_missing_optionals() {
        let json = r#"{"name": "Ada", "address": null}"#;
        let r: Record = serde_json::from_str(json).unwrap();
        assert_eq!(r.name().as_str(), "Ada");
        assert!(r.phones().is_empty());
        assert_eq!(r.address(), None);
        assert_eq!(r.birthday(), None);
    }

    #[test]
    fn test_serialize_omits_absent_fields() {
        let mut r = record();
        r.add_phone("123456").unwrap();
        let value = serde_json::to_value(&r).unwrap();

        assert_eq!(value["name"], "Ada Lovelace");
        assert_eq!(value["phones"][0], "123456");
        assert!(value["emails"].as_array().unwrap().is_empty());
        assert!(value.get("address").is_none());
        assert!(value.get("birthday").is_none());
        assert!(value.get("notes").is_none());
    }
}
