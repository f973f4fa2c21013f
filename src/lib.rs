//! Contact Ledger - a personal address book with validated records.
//!
//! The ledger stores contacts with several phone numbers and email addresses,
//! a postal address, an optional birthday and free-text notes. It supports
//! case-insensitive search across every field, upcoming-birthday filtering and
//! a lossless JSON round trip.
//!
//! # Architecture
//!
//! - **domain**: Self-validating value objects (name, phone, email, birthday)
//! - **models**: The contact [`Record`] and its mutators
//! - **book**: The [`AddressBook`] with lookup, search and birthday filtering
//! - **search**: Substring matching across record fields
//! - **storage**: JSON codec for saving and loading the ledger
//! - **repositories**: Where the ledger is persisted
//! - **commands**: Request objects dispatched to the ledger
//! - **services**: Session owner that saves after every change
//! - **config**: Configuration management from environment variables
//! - **clock**: Source of "today" for birthday queries
//! - **error**: Custom error types for precise error handling

pub mod book;
pub mod clock;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repositories;
pub mod search;
pub mod services;
pub mod storage;

pub use book::{AddressBook, UpcomingBirthday};
pub use clock::{Clock, FixedClock, SystemClock};
pub use commands::{dispatch, CommandOutcome, CommandResponse, LedgerCommand};
pub use config::Config;
pub use domain::{Birthday, ContactName, EmailAddress, PhoneNumber, ValidationError};
pub use error::{CodecError, ConfigError, EntryKind, LedgerError, LedgerResult};
pub use models::Record;
pub use repositories::{JsonFileRepository, LedgerRepository};
pub use search::{SearchHit, SearchableField};
pub use services::LedgerService;
