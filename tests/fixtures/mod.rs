//! Test fixtures and sample data for integration tests.
//!
//! This module provides reusable records and address books so each test
//! only spells out the fields it cares about.

#![allow(dead_code)]

use chrono::NaiveDate;
use contact_ledger::{AddressBook, Record};

/// Build a calendar date, panicking on an impossible one.
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid fixture date")
}

/// Create a record with just a name.
pub fn sample_record(name: &str) -> Record {
    Record::named(name).expect("valid fixture name")
}

/// Create a record with a birthday in `DD.MM.YYYY` form.
pub fn record_with_birthday(name: &str, birthday: &str) -> Record {
    let mut record = sample_record(name);
    record.add_birthday(birthday).expect("valid fixture birthday");
    record
}

/// Create a record with every field populated.
pub fn full_record(name: &str) -> Record {
    let slug = name.to_lowercase().replace(' ', ".");
    let mut record = sample_record(name);
    record
        .add_phone("+380 50 123 4567")
        .expect("valid fixture phone")
        .add_phone("0441234567")
        .expect("valid fixture phone")
        .add_email(&format!("{}@example.com", slug))
        .expect("valid fixture email")
        .add_email(&format!("{}@work.example.org", slug))
        .expect("valid fixture email")
        .add_birthday("29.02.1996")
        .expect("valid fixture birthday")
        .set_address(Some("Kyiv, Khreshchatyk St 22, apt 5".to_string()))
        .set_notes(Some("Met at the hackathon. #work #Rust".to_string()));
    record
}

/// An address book with a mix of complete and sparse records.
pub fn sample_book() -> AddressBook {
    let mut book = AddressBook::new();
    book.add_record(full_record("Olena Kovalenko"));
    book.add_record(record_with_birthday("Taras Shevchenko", "09.03.1814"));

    let mut sparse = sample_record("Lesya");
    sparse.add_email("lesya@poetry.example.com").expect("valid fixture email");
    book.add_record(sparse);
    book
}
