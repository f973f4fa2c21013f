//! Request and response types for ledger commands.

use crate::book::UpcomingBirthday;
use crate::domain::birthday::BIRTHDAY_FORMAT;
use crate::error::LedgerError;
use crate::models::Record;
use crate::search::SearchHit;
use serde::{Deserialize, Serialize};

/// Fields of the "add contact" form. Blank or missing fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub birthday: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Replace one value with another.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueEdit {
    pub from: String,
    pub to: String,
}

/// Changes to an existing contact.
///
/// `None` leaves a field alone. For `address`, `notes` and `birthday` an
/// empty string clears the field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactUpdate {
    pub name: String,
    #[serde(default)]
    pub new_name: Option<String>,
    #[serde(default)]
    pub phone: Option<ValueEdit>,
    #[serde(default)]
    pub email: Option<ValueEdit>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub birthday: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// An operation requested of the ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum LedgerCommand {
    /// Create a contact, or add the given details to an existing one
    AddContact(ContactForm),
    /// Edit an existing contact; all edits apply or none do
    UpdateContact(ContactUpdate),
    DeleteContact {
        name: String,
    },
    RemovePhone {
        name: String,
        phone: String,
    },
    RemoveEmail {
        name: String,
        email: String,
    },
    Show {
        name: String,
    },
    List,
    Search {
        query: String,
    },
    /// Birthdays within `days` days; the configured window when omitted
    Birthdays {
        #[serde(default)]
        days: Option<i64>,
    },
    Tagged {
        tag: String,
    },
}

/// One row of a birthday listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BirthdayEntry {
    pub name: String,
    pub birthday: String,
    /// Next celebration as `DD.MM.YYYY`
    pub next: String,
    pub days_until: i64,
}

impl From<&UpcomingBirthday<'_>> for BirthdayEntry {
    fn from(upcoming: &UpcomingBirthday<'_>) -> Self {
        Self {
            name: upcoming.record.name().to_string(),
            birthday: upcoming
                .record
                .birthday()
                .map(|b| b.to_string())
                .unwrap_or_default(),
            next: upcoming.date.format(BIRTHDAY_FORMAT).to_string(),
            days_until: upcoming.days_until,
        }
    }
}

/// A contact found by a search, with the fields the query was found in.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchMatch {
    pub contact: Record,
    pub fields: Vec<&'static str>,
}

impl From<&SearchHit<'_>> for SearchMatch {
    fn from(hit: &SearchHit<'_>) -> Self {
        Self {
            contact: hit.record.clone(),
            fields: hit.fields.iter().map(|f| f.display_name()).collect(),
        }
    }
}

/// Result of a successful command.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum CommandOutcome {
    /// A contact was created or changed
    Saved { created: bool, contact: Record },
    Deleted { contact: Record },
    Contact { contact: Record },
    Contacts { contacts: Vec<Record> },
    Matches { matches: Vec<SearchMatch> },
    Birthdays { birthdays: Vec<BirthdayEntry> },
}

impl CommandOutcome {
    /// Whether the ledger changed and must be saved.
    pub fn is_mutation(&self) -> bool {
        matches!(self, Self::Saved { .. } | Self::Deleted { .. })
    }
}

/// Error payload of a failed command.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorBody {
    pub kind: String,
    pub message: String,
}

/// Wire envelope for one command's result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommandResponse {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<CommandOutcome>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorBody>,
}

impl CommandResponse {
    pub fn success(outcome: CommandOutcome) -> Self {
        Self {
            ok: true,
            result: Some(outcome),
            error: None,
        }
    }

    pub fn failure(error: &LedgerError) -> Self {
        Self::rejected(error.kind(), error.to_string())
    }

    /// A failure that never reached the ledger, such as an unparseable request.
    pub fn rejected(kind: &str, message: impl Into<String>) -> Self {
        Self {
            ok: false,
            result: None,
            error: Some(ErrorBody {
                kind: kind.to_string(),
                message: message.into(),
            }),
        }
    }
}
