mod mock_ledger_repository;

pub use mock_ledger_repository::MockLedgerRepository;
