//! The ledger of contact records.

mod address_book;

pub use address_book::{AddressBook, UpcomingBirthday};
