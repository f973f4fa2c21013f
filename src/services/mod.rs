//! Application service layer.
//!
//! Services own the ledger for a session and provide a clean boundary between
//! a presentation layer and the data access layer.

mod ledger_service;

pub use ledger_service::LedgerService;
