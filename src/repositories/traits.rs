use crate::book::AddressBook;
use crate::error::LedgerResult;

/// Repository for the persisted address book.
///
/// Provides abstraction over where the ledger lives, enabling different
/// implementations (JSON file, in-memory mock).
pub trait LedgerRepository {
    /// Load the stored address book, or an empty one if nothing is stored yet.
    fn load(&self) -> LedgerResult<AddressBook>;

    /// Replace the stored address book with `book`.
    fn save(&self, book: &AddressBook) -> LedgerResult<()>;
}
