//! Apply a [`LedgerCommand`] to an address book.

use super::types::{
    BirthdayEntry, CommandOutcome, ContactForm, ContactUpdate, LedgerCommand, SearchMatch,
};
use crate::book::AddressBook;
use crate::domain::ContactName;
use crate::error::{EntryKind, LedgerError, LedgerResult};
use crate::models::Record;
use chrono::NaiveDate;
use tracing::debug;

/// Run `command` against `book`.
///
/// `today` anchors birthday queries and `default_window` is used when a
/// birthday command does not name a window. Mutating commands edit a working
/// copy of the record and only write it back once every step has succeeded.
pub fn dispatch(
    book: &mut AddressBook,
    command: LedgerCommand,
    today: NaiveDate,
    default_window: i64,
) -> LedgerResult<CommandOutcome> {
    debug!("Dispatching {:?}", command);
    match command {
        LedgerCommand::AddContact(form) => add_contact(book, form),
        LedgerCommand::UpdateContact(update) => update_contact(book, update),
        LedgerCommand::DeleteContact { name } => {
            let contact = book.delete(&name)?;
            Ok(CommandOutcome::Deleted { contact })
        }
        LedgerCommand::RemovePhone { name, phone } => {
            let mut working = book.find(&name)?.clone();
            working.remove_phone(&phone)?;
            Ok(commit(book, working, false))
        }
        LedgerCommand::RemoveEmail { name, email } => {
            let mut working = book.find(&name)?.clone();
            working.remove_email(&email)?;
            Ok(commit(book, working, false))
        }
        LedgerCommand::Show { name } => Ok(CommandOutcome::Contact {
            contact: book.find(&name)?.clone(),
        }),
        LedgerCommand::List => Ok(CommandOutcome::Contacts {
            contacts: book.iter().cloned().collect(),
        }),
        LedgerCommand::Search { query } => Ok(CommandOutcome::Matches {
            matches: book.search(&query).iter().map(SearchMatch::from).collect(),
        }),
        LedgerCommand::Birthdays { days } => {
            let upcoming = book.upcoming_birthdays_on(today, days.unwrap_or(default_window))?;
            Ok(CommandOutcome::Birthdays {
                birthdays: upcoming.iter().map(BirthdayEntry::from).collect(),
            })
        }
        LedgerCommand::Tagged { tag } => Ok(CommandOutcome::Contacts {
            contacts: book.find_by_tag(&tag).into_iter().cloned().collect(),
        }),
    }
}

fn provided(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

fn commit(book: &mut AddressBook, working: Record, created: bool) -> CommandOutcome {
    book.add_record(working.clone());
    CommandOutcome::Saved {
        created,
        contact: working,
    }
}

fn add_contact(book: &mut AddressBook, form: ContactForm) -> LedgerResult<CommandOutcome> {
    let name = ContactName::new(&form.name)?;
    let (mut working, created) = match book.find(name.as_str()) {
        Ok(existing) => (existing.clone(), false),
        Err(_) => (Record::new(name), true),
    };

    if let Some(phone) = provided(&form.phone) {
        working.add_phone(phone)?;
    }
    if let Some(email) = provided(&form.email) {
        working.add_email(email)?;
    }
    if let Some(birthday) = provided(&form.birthday) {
        working.add_birthday(birthday)?;
    }
    if let Some(address) = provided(&form.address) {
        working.set_address(address.to_string());
    }
    if let Some(notes) = provided(&form.notes) {
        working.set_notes(notes.to_string());
    }

    Ok(commit(book, working, created))
}

fn update_contact(book: &mut AddressBook, update: ContactUpdate) -> LedgerResult<CommandOutcome> {
    let mut working = book.find(&update.name)?.clone();

    let new_name = provided(&update.new_name).map(ContactName::new).transpose()?;
    if let Some(new_name) = &new_name {
        if new_name != working.name() && book.contains(new_name.as_str()) {
            return Err(LedgerError::duplicate(
                EntryKind::Contact,
                new_name.as_str(),
            ));
        }
    }

    if let Some(edit) = &update.phone {
        working.edit_phone(&edit.from, &edit.to)?;
    }
    if let Some(edit) = &update.email {
        working.edit_email(&edit.from, &edit.to)?;
    }
    match update.birthday.as_deref().map(str::trim) {
        Some("") => {
            working.clear_birthday();
        }
        Some(birthday) => {
            working.add_birthday(birthday)?;
        }
        None => {}
    }
    if let Some(address) = update.address {
        working.set_address(address);
    }
    if let Some(notes) = update.notes {
        working.set_notes(notes);
    }

    let old_name = working.name().clone();
    let outcome = commit(book, working, false);
    match new_name {
        Some(new_name) => {
            let renamed = book.rename(old_name.as_str(), new_name.as_str())?.clone();
            Ok(CommandOutcome::Saved {
                created: false,
                contact: renamed,
            })
        }
        None => Ok(outcome),
    }
}
