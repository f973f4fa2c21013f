use contact_ledger::error::LedgerResult;
use contact_ledger::{AddressBook, LedgerRepository};
use std::collections::HashMap;
use std::io;
use std::sync::{Arc, Mutex};

/// Mock ledger repository for testing.
///
/// Keeps the "persisted" address book in memory, can be told to fail saves,
/// and tracks method calls for verification. Clones share state, so a test
/// can keep a handle after moving one into a service.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockLedgerRepository {
    stored: Arc<Mutex<AddressBook>>,
    fail_saves: Arc<Mutex<bool>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

#[allow(dead_code)]
impl MockLedgerRepository {
    /// Create a new empty MockLedgerRepository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository that already holds `book`.
    pub fn with_book(book: AddressBook) -> Self {
        let repo = Self::new();
        *repo.stored.lock().unwrap() = book;
        repo
    }

    /// The most recently saved address book.
    pub fn stored(&self) -> AddressBook {
        self.stored.lock().unwrap().clone()
    }

    /// Make subsequent saves fail with an I/O error.
    pub fn fail_saves(&self, fail: bool) {
        *self.fail_saves.lock().unwrap() = fail;
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl LedgerRepository for MockLedgerRepository {
    fn load(&self) -> LedgerResult<AddressBook> {
        self.track_call("load");
        Ok(self.stored())
    }

    fn save(&self, book: &AddressBook) -> LedgerResult<()> {
        self.track_call("save");
        if *self.fail_saves.lock().unwrap() {
            return Err(io::Error::new(io::ErrorKind::Other, "disk unavailable").into());
        }
        *self.stored.lock().unwrap() = book.clone();
        Ok(())
    }
}
