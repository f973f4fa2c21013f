//! Integration tests for the ledger service and its command protocol.

mod fixtures;
mod mocks;

use contact_ledger::commands::{ContactForm, ContactUpdate, ValueEdit};
use contact_ledger::{
    CommandOutcome, FixedClock, JsonFileRepository, LedgerCommand, LedgerService,
};
use fixtures::*;
use mocks::MockLedgerRepository;

fn open(repo: &MockLedgerRepository) -> LedgerService {
    LedgerService::open(
        Box::new(repo.clone()),
        Box::new(FixedClock::new(date(2024, 12, 29))),
        7,
    )
    .unwrap()
}

fn add(name: &str, phone: &str) -> LedgerCommand {
    LedgerCommand::AddContact(ContactForm {
        name: name.to_string(),
        phone: Some(phone.to_string()),
        ..Default::default()
    })
}

#[test]
fn test_open_loads_existing_book() {
    let repo = MockLedgerRepository::with_book(sample_book());
    let service = open(&repo);

    assert_eq!(service.book(), &sample_book());
    assert_eq!(repo.get_call_count("load"), 1);
}

#[test]
fn test_mutations_are_saved() {
    let repo = MockLedgerRepository::new();
    let mut service = open(&repo);

    service.execute(add("Ada", "123456")).unwrap();
    assert_eq!(repo.get_call_count("save"), 1);
    assert!(repo.stored().find("Ada").unwrap().has_phone("123456"));

    service
        .execute(LedgerCommand::DeleteContact {
            name: "Ada".to_string(),
        })
        .unwrap();
    assert_eq!(repo.get_call_count("save"), 2);
    assert!(repo.stored().is_empty());
}

#[test]
fn test_queries_are_not_saved() {
    let repo = MockLedgerRepository::with_book(sample_book());
    let mut service = open(&repo);

    service.execute(LedgerCommand::List).unwrap();
    service
        .execute(LedgerCommand::Search {
            query: "olena".to_string(),
        })
        .unwrap();
    service.execute(LedgerCommand::Birthdays { days: None }).unwrap();

    assert_eq!(repo.get_call_count("save"), 0);
}

#[test]
fn test_failed_command_is_not_saved() {
    let repo = MockLedgerRepository::new();
    let mut service = open(&repo);

    service.execute(add("Ada", "123456")).unwrap();
    let err = service.execute(add("Ada", "123456")).unwrap_err();

    assert_eq!(err.kind(), "duplicate_entry");
    assert_eq!(repo.get_call_count("save"), 1);
    assert_eq!(service.book().find("Ada").unwrap().phones().len(), 1);
}

#[test]
fn test_save_failure_rolls_back_and_command_can_be_resent() {
    let repo = MockLedgerRepository::new();
    let mut service = open(&repo);

    repo.fail_saves(true);
    let err = service.execute(add("Ada", "123456")).unwrap_err();
    assert_eq!(err.kind(), "io_error");
    assert!(repo.stored().is_empty());
    assert!(!service.book().contains("Ada"));

    repo.fail_saves(false);
    service.execute(add("Ada", "123456")).unwrap();
    assert!(repo.stored().find("Ada").unwrap().has_phone("123456"));
    assert_eq!(service.book(), &repo.stored());
}

#[test]
fn test_save_failure_keeps_earlier_saved_state() {
    let repo = MockLedgerRepository::with_book(sample_book());
    let mut service = open(&repo);

    repo.fail_saves(true);
    let err = service
        .execute(LedgerCommand::DeleteContact {
            name: "Olena Kovalenko".to_string(),
        })
        .unwrap_err();
    assert_eq!(err.kind(), "io_error");
    assert_eq!(service.book(), &sample_book());

    let response =
        service.handle_line(r#"{"command": "show", "name": "Olena Kovalenko"}"#);
    assert!(response.ok);
}

#[test]
fn test_birthdays_use_service_clock() {
    let mut book = contact_ledger::AddressBook::new();
    book.add_record(record_with_birthday("Silvester", "31.12.2000"));
    book.add_record(record_with_birthday("Summer", "01.07.2000"));
    let repo = MockLedgerRepository::with_book(book);
    let mut service = open(&repo);

    match service.execute(LedgerCommand::Birthdays { days: Some(3) }).unwrap() {
        CommandOutcome::Birthdays { birthdays } => {
            assert_eq!(birthdays.len(), 1);
            assert_eq!(birthdays[0].name, "Silvester");
            assert_eq!(birthdays[0].next, "31.12.2024");
            assert_eq!(birthdays[0].days_until, 2);
        }
        other => panic!("Expected Birthdays, got: {:?}", other),
    }
}

#[test]
fn test_update_then_reload_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("address_book.json");

    {
        let mut service = LedgerService::open(
            Box::new(JsonFileRepository::new(&path)),
            Box::new(FixedClock::new(date(2024, 1, 1))),
            7,
        )
        .unwrap();
        service.execute(add("Ada", "111111")).unwrap();
        service
            .execute(LedgerCommand::UpdateContact(ContactUpdate {
                name: "Ada".to_string(),
                new_name: Some("Ada Lovelace".to_string()),
                phone: Some(ValueEdit {
                    from: "111111".to_string(),
                    to: "222222".to_string(),
                }),
                ..Default::default()
            }))
            .unwrap();
    }

    let service = LedgerService::open(
        Box::new(JsonFileRepository::new(&path)),
        Box::new(FixedClock::new(date(2024, 1, 1))),
        7,
    )
    .unwrap();
    let ada = service.book().find("Ada Lovelace").unwrap();
    assert!(ada.has_phone("222222"));
    assert!(!service.book().contains("Ada"));
}

#[test]
fn test_handle_line_protocol() {
    let repo = MockLedgerRepository::new();
    let mut service = open(&repo);

    let response = service.handle_line(
        r#"{"command": "add_contact", "name": "Ada", "email": "ada@example.com"}"#,
    );
    let json = serde_json::to_value(&response).unwrap();
    assert_eq!(json["ok"], true);
    assert_eq!(json["result"]["outcome"], "saved");
    assert_eq!(json["result"]["created"], true);
    assert_eq!(json["result"]["contact"]["emails"][0], "ada@example.com");

    let response = service.handle_line(r#"{"command": "show", "name": "Nobody"}"#);
    let json = serde_json::to_value(&response).unwrap();
    assert_eq!(json["ok"], false);
    assert_eq!(json["error"]["kind"], "not_found");

    let response = service.handle_line(r#"{"command": "search", "query": "EXAMPLE"}"#);
    let json = serde_json::to_value(&response).unwrap();
    assert_eq!(json["result"]["outcome"], "matches");
    assert_eq!(json["result"]["matches"][0]["contact"]["name"], "Ada");
    assert_eq!(json["result"]["matches"][0]["fields"][0], "email");

    let response = service.handle_line("this is not json");
    assert!(!response.ok);
    assert_eq!(response.error.unwrap().kind, "invalid_command");
}
