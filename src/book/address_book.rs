//! The address book: an ordered, name-keyed collection of records.

use crate::clock::{Clock, SystemClock};
use crate::domain::{ContactName, ValidationError};
use crate::error::{EntryKind, LedgerError, LedgerResult};
use crate::models::Record;
use crate::search::{SearchHit, SubstringQuery};
use chrono::NaiveDate;
use tracing::debug;

/// A contact whose birthday falls inside a requested window.
#[derive(Debug, Clone, PartialEq)]
pub struct UpcomingBirthday<'a> {
    pub record: &'a Record,
    /// Date the birthday is celebrated next
    pub date: NaiveDate,
    /// Days from the reference date, 0 meaning today
    pub days_until: i64,
}

/// All contact records, keyed by name, in insertion order.
///
/// Names are unique: adding a record under an existing name replaces the old
/// record in its slot, while a new name is appended at the end.
///
/// Records live in a `Vec` and name lookups scan it, so `add_record`, `find`
/// and `contains` are O(n) and loading a ledger is O(n²) in its size.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: Vec<Record>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate records in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Contact names in insertion order.
    pub fn names(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.name().as_str()).collect()
    }

    fn position(&self, name: &str) -> Option<usize> {
        let name = name.trim();
        self.records.iter().position(|r| r.name().as_str() == name)
    }

    /// Insert `record`, replacing any record with the same name.
    ///
    /// Returns the replaced record, if there was one.
    pub fn add_record(&mut self, record: Record) -> Option<Record> {
        match self.position(record.name().as_str()) {
            Some(index) => {
                debug!("Replacing contact {}", record.name());
                Some(std::mem::replace(&mut self.records[index], record))
            }
            None => {
                debug!("Adding contact {}", record.name());
                self.records.push(record);
                None
            }
        }
    }

    /// Look up a record by its exact name.
    pub fn find(&self, name: &str) -> LedgerResult<&Record> {
        self.position(name)
            .map(|index| &self.records[index])
            .ok_or_else(|| LedgerError::not_found(EntryKind::Contact, name.trim()))
    }

    /// Look up a record by its exact name for in-place mutation.
    pub fn find_mut(&mut self, name: &str) -> LedgerResult<&mut Record> {
        match self.position(name) {
            Some(index) => Ok(&mut self.records[index]),
            None => Err(LedgerError::not_found(EntryKind::Contact, name.trim())),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Remove and return the record filed under `name`.
    pub fn delete(&mut self, name: &str) -> LedgerResult<Record> {
        let index = self
            .position(name)
            .ok_or_else(|| LedgerError::not_found(EntryKind::Contact, name.trim()))?;
        debug!("Deleting contact {}", name.trim());
        Ok(self.records.remove(index))
    }

    /// File the record `old` under `new`, keeping its position.
    ///
    /// # Errors
    ///
    /// `Validation` for a blank new name, `NotFound` if `old` is missing and
    /// `DuplicateEntry` if another record already uses `new`.
    pub fn rename(&mut self, old: &str, new: &str) -> LedgerResult<&mut Record> {
        let new_name = ContactName::new(new)?;
        let index = self
            .position(old)
            .ok_or_else(|| LedgerError::not_found(EntryKind::Contact, old.trim()))?;

        match self.position(new_name.as_str()) {
            Some(existing) if existing != index => {
                return Err(LedgerError::duplicate(
                    EntryKind::Contact,
                    new_name.into_inner(),
                ));
            }
            _ => {}
        }

        debug!("Renaming contact {} to {}", old.trim(), new_name);
        let record = &mut self.records[index];
        record.set_name(new_name);
        Ok(record)
    }

    /// Search every field, returning hits with the fields that matched.
    pub fn search(&self, query: &str) -> Vec<SearchHit<'_>> {
        let query = SubstringQuery::new(query);
        if query.is_empty() {
            return Vec::new();
        }
        self.records.iter().filter_map(|r| query.search(r)).collect()
    }

    /// Records containing `query` in any field, case-insensitively.
    ///
    /// A blank query returns no records.
    pub fn find_data_in_book(&self, query: &str) -> Vec<&Record> {
        let hits: Vec<&Record> = self.search(query).into_iter().map(|h| h.record).collect();
        debug!("Search {:?} matched {} contact(s)", query, hits.len());
        hits
    }

    /// Records whose notes carry `#tag` (with or without the leading '#').
    pub fn find_by_tag(&self, tag: &str) -> Vec<&Record> {
        let tag = tag.trim().trim_start_matches('#').to_lowercase();
        if tag.is_empty() {
            return Vec::new();
        }
        self.records
            .iter()
            .filter(|r| r.tags().contains(&tag))
            .collect()
    }

    /// Records with a birthday within `days` days from the local date.
    pub fn filter_contacts_by_birthday(&self, days: i64) -> LedgerResult<Vec<&Record>> {
        self.filter_contacts_by_birthday_on(SystemClock.today(), days)
    }

    /// Records whose next birthday falls in `[today, today + days]`.
    ///
    /// # Errors
    ///
    /// `Validation(InvalidArgument)` when `days` is negative.
    pub fn filter_contacts_by_birthday_on(
        &self,
        today: NaiveDate,
        days: i64,
    ) -> LedgerResult<Vec<&Record>> {
        check_window(days)?;
        Ok(self
            .records
            .iter()
            .filter(|r| r.days_until_birthday(today).is_some_and(|d| d <= days))
            .collect())
    }

    /// Birthdays in `[today, today + days]`, soonest first.
    ///
    /// Records sharing a date keep their ledger order.
    pub fn upcoming_birthdays_on(
        &self,
        today: NaiveDate,
        days: i64,
    ) -> LedgerResult<Vec<UpcomingBirthday<'_>>> {
        check_window(days)?;
        let mut upcoming: Vec<UpcomingBirthday<'_>> = self
            .records
            .iter()
            .filter_map(|record| {
                let date = record.birthday()?.next_occurrence(today)?;
                let days_until = (date - today).num_days();
                (days_until <= days).then_some(UpcomingBirthday {
                    record,
                    date,
                    days_until,
                })
            })
            .collect();
        upcoming.sort_by_key(|u| u.days_until);
        Ok(upcoming)
    }
}

fn check_window(days: i64) -> LedgerResult<()> {
    if days < 0 {
        return Err(ValidationError::InvalidArgument(format!(
            "days must be non-negative, got {}",
            days
        ))
        .into());
    }
    Ok(())
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
