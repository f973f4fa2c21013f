//! JSON codec for the address book.
//!
//! The document is one JSON object keyed by contact name, written in ledger
//! order:
//!
//! ```json
//! {
//!   "Ada Lovelace": {
//!     "name": "Ada Lovelace",
//!     "phones": ["+44 20 7946 0018"],
//!     "emails": ["ada@example.com"],
//!     "address": "12 St James's Square, London",
//!     "birthday": "10.12.1815",
//!     "notes": "#math"
//!   }
//! }
//! ```
//!
//! `address`, `birthday` and `notes` are omitted when absent and may be
//! `null` on read. Every value is re-validated while loading.

use crate::book::AddressBook;
use crate::error::{CodecError, LedgerResult};
use crate::models::Record;
use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::info;

impl Serialize for AddressBook {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_map(self.iter().map(|r| (r.name().as_str(), r)))
    }
}

struct AddressBookVisitor;

impl<'de> Visitor<'de> for AddressBookVisitor {
    type Value = AddressBook;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an object mapping contact names to records")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut book = AddressBook::new();
        while let Some((key, record)) = map.next_entry::<String, Record>()? {
            if key.trim() != record.name().as_str() {
                return Err(de::Error::custom(format!(
                    "key {:?} does not match record name {:?}",
                    key,
                    record.name().as_str()
                )));
            }
            if book.contains(&key) {
                return Err(de::Error::custom(format!("duplicate contact {:?}", key)));
            }
            book.add_record(record);
        }
        Ok(book)
    }
}

impl<'de> Deserialize<'de> for AddressBook {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(AddressBookVisitor)
    }
}

/// Encode `book` as pretty-printed JSON.
pub fn to_string(book: &AddressBook) -> LedgerResult<String> {
    Ok(serde_json::to_string_pretty(book).map_err(CodecError::from)?)
}

/// Decode an address book from JSON text.
pub fn from_str(text: &str) -> LedgerResult<AddressBook> {
    Ok(serde_json::from_str(text).map_err(CodecError::from)?)
}

/// Write `book` to `destination`, replacing whatever was there.
///
/// The write is not atomic; an interrupted save can leave a truncated file.
///
/// # Errors
///
/// `Io` if the file cannot be written, including when its directory is missing.
pub fn save(book: &AddressBook, destination: impl AsRef<Path>) -> LedgerResult<()> {
    let destination = destination.as_ref();
    let json = to_string(book)?;
    fs::write(destination, json)?;
    info!(
        path = %destination.display(),
        contacts = book.len(),
        "Address book saved"
    );
    Ok(())
}

/// Read an address book from `source`.
///
/// # Errors
///
/// `Codec(MissingSource)` if the file does not exist, `Codec(Malformed)` if
/// it is not a valid ledger document, `Io` for other read failures.
pub fn load(source: impl AsRef<Path>) -> LedgerResult<AddressBook> {
    let source = source.as_ref();
    let text = match fs::read_to_string(source) {
        Ok(text) => text,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(CodecError::MissingSource(source.to_path_buf()).into());
        }
        Err(e) => return Err(e.into()),
    };
    let book = from_str(&text)?;
    info!(
        path = %source.display(),
        contacts = book.len(),
        "Address book loaded"
    );
    Ok(book)
}

/// Like [`load`], but an absent file yields an empty address book.
pub fn load_or_default(source: impl AsRef<Path>) -> LedgerResult<AddressBook> {
    let source = source.as_ref();
    if !source.exists() {
        info!(path = %source.display(), "No address book yet, starting empty");
        return Ok(AddressBook::new());
    }
    load(source)
}
