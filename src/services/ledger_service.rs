//! Ledger service layer.
//!
//! Owns the session's address book and persists it after every command that
//! changes it.

use crate::book::AddressBook;
use crate::clock::Clock;
use crate::commands::{dispatch, CommandOutcome, CommandResponse, LedgerCommand};
use crate::error::LedgerResult;
use crate::repositories::LedgerRepository;
use tracing::{info, warn};

/// The single owner of an address book for one working session.
pub struct LedgerService {
    book: AddressBook,
    repository: Box<dyn LedgerRepository>,
    clock: Box<dyn Clock>,
    default_window: i64,
}

impl LedgerService {
    /// Load the address book from `repository` and start a session.
    ///
    /// `default_window` is the birthday window, in days, used when a birthday
    /// command does not specify one.
    pub fn open(
        repository: Box<dyn LedgerRepository>,
        clock: Box<dyn Clock>,
        default_window: i64,
    ) -> LedgerResult<Self> {
        let book = repository.load()?;
        info!("Ledger session opened with {} contact(s)", book.len());
        Ok(Self {
            book,
            repository,
            clock,
            default_window,
        })
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    /// Run one command, saving the ledger if it changed.
    ///
    /// If the save fails the change is rolled back in memory and the error is
    /// returned, so sending the same command again retries the whole write.
    pub fn execute(&mut self, command: LedgerCommand) -> LedgerResult<CommandOutcome> {
        let snapshot = self.book.clone();
        let outcome = dispatch(
            &mut self.book,
            command,
            self.clock.today(),
            self.default_window,
        )?;
        if outcome.is_mutation() {
            if let Err(e) = self.save() {
                warn!("Save failed, rolling back command: {}", e);
                self.book = snapshot;
                return Err(e);
            }
        }
        Ok(outcome)
    }

    /// Write the current ledger to the repository.
    pub fn save(&self) -> LedgerResult<()> {
        self.repository.save(&self.book)
    }

    /// Handle one JSON-encoded command and produce its response envelope.
    pub fn handle_line(&mut self, line: &str) -> CommandResponse {
        let command: LedgerCommand = match serde_json::from_str(line) {
            Ok(command) => command,
            Err(e) => {
                warn!("Rejected malformed command: {}", e);
                return CommandResponse::rejected("invalid_command", e.to_string());
            }
        };

        match self.execute(command) {
            Ok(outcome) => CommandResponse::success(outcome),
            Err(e) => {
                warn!("Command failed: {}", e);
                CommandResponse::failure(&e)
            }
        }
    }
}
