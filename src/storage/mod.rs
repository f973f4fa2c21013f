//! Persistence of the address book.

pub mod codec;

pub use codec::{load, load_or_default, save};
