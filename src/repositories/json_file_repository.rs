use crate::book::AddressBook;
use crate::error::LedgerResult;
use crate::repositories::traits::LedgerRepository;
use crate::storage::codec;
use std::path::PathBuf;

/// Ledger repository backed by a single JSON file.
///
/// This repository delegates encoding to the storage codec; a missing file
/// loads as an empty address book so a first run starts clean.
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    /// Create a new JsonFileRepository for the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl LedgerRepository for JsonFileRepository {
    fn load(&self) -> LedgerResult<AddressBook> {
        codec::load_or_default(&self.path)
    }

    fn save(&self, book: &AddressBook) -> LedgerResult<()> {
        codec::save(book, &self.path)
    }
}
