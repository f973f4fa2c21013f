//! Error types for the contact ledger.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Value validation failures live in [`crate::domain::ValidationError`] and are
//! wrapped by [`LedgerError`] when they surface from a ledger operation.

use crate::domain::ValidationError;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// The kind of entry a duplicate or missing-entry error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// A whole contact record, keyed by name
    Contact,
    /// A phone number on a record
    Phone,
    /// An email address on a record
    Email,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Contact => "contact",
            Self::Phone => "phone",
            Self::Email => "email",
        };
        f.write_str(label)
    }
}

/// Errors that can occur when operating on the ledger.
#[derive(Error, Debug)]
pub enum LedgerError {
    /// A value failed validation before any state changed
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// The entry is already present
    #[error("Duplicate {kind}: {value}")]
    DuplicateEntry { kind: EntryKind, value: String },

    /// The referenced entry does not exist
    #[error("No such {kind}: {value}")]
    NotFound { kind: EntryKind, value: String },

    /// Persisted data could not be decoded
    #[error("Codec error: {0}")]
    Codec(#[from] CodecError),

    /// Filesystem failure during save or load
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl LedgerError {
    /// Shorthand for a missing entry.
    pub fn not_found(kind: EntryKind, value: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            value: value.into(),
        }
    }

    /// Shorthand for a duplicate entry.
    pub fn duplicate(kind: EntryKind, value: impl Into<String>) -> Self {
        Self::DuplicateEntry {
            kind,
            value: value.into(),
        }
    }

    /// Stable machine-readable tag for the presentation layer.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation(ValidationError::EmptyName) => "empty_name",
            Self::Validation(ValidationError::InvalidPhone(_)) => "invalid_phone",
            Self::Validation(ValidationError::InvalidEmail(_)) => "invalid_email",
            Self::Validation(ValidationError::InvalidDate(_)) => "invalid_date",
            Self::Validation(ValidationError::InvalidArgument(_)) => "invalid_argument",
            Self::DuplicateEntry { .. } => "duplicate_entry",
            Self::NotFound { .. } => "not_found",
            Self::Codec(_) => "codec_error",
            Self::Io(_) => "io_error",
        }
    }
}

/// Errors that can occur while decoding a persisted ledger.
#[derive(Error, Debug)]
pub enum CodecError {
    /// The source file does not exist
    #[error("Ledger file not found: {}", .0.display())]
    MissingSource(PathBuf),

    /// The document is not a valid ledger
    #[error("Malformed ledger document: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// The .env file exists but could not be read
    #[error("Failed to load .env file: {0}")]
    DotenvError(String),
}

/// Convenience type alias for Results with LedgerError
pub type LedgerResult<T> = Result<T, LedgerError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
