//! Command objects for driving the ledger.
//!
//! A presentation layer describes what the user asked for as a
//! [`LedgerCommand`], hands it to [`dispatch`], and renders the typed
//! [`CommandOutcome`] or error that comes back. Commands are plain serde
//! types so they can also arrive as JSON.

mod dispatch;
mod types;

pub use dispatch::dispatch;
pub use types::{
    BirthdayEntry, CommandOutcome, CommandResponse, ContactForm, ContactUpdate, ErrorBody,
    LedgerCommand, SearchMatch, ValueEdit,
};
