//! End-to-end tests for address book CRUD and the birthday query.
//!
//! Walks the library API the way the interactive loop does: build records,
//! mutate phones, set birthdays, then query upcoming birthdays against a
//! pinned "today".

use chrono::NaiveDate;
use contact_book::{AddressBook, Name, Record};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_full_lifecycle() {
    let mut book = AddressBook::new();

    let mut john = Record::new(Name::new("John").unwrap());
    john.add_phone("1234567890").unwrap();
    john.add_phone("5555555555").unwrap();
    john.add_phone("0987654321").unwrap();
    book.add_record(john);

    let mut jane = Record::new(Name::new("Jane").unwrap());
    jane.add_phone("2222222222").unwrap();
    book.add_record(jane);

    assert_eq!(book.len(), 2);

    // Edit keeps the slot.
    let john = book.find_mut("John").unwrap();
    john.edit_phone("1234567890", "1112223333").unwrap();
    assert_eq!(john.phones()[0].as_str(), "1112223333");
    assert_eq!(john.phones().len(), 3);

    // Exact-match lookup.
    let found = john.find_phone("5555555555").unwrap();
    assert_eq!(found.as_str(), "5555555555");

    // Drain the phone list.
    john.remove_phone("1112223333").unwrap();
    john.remove_phone("5555555555").unwrap();
    john.remove_phone("0987654321").unwrap();
    assert!(john.phones().is_empty());

    // Delete both records; the book ends empty.
    book.delete("Jane").unwrap();
    book.delete("John").unwrap();
    assert!(book.is_empty());
    assert!(book.delete("John").is_err());
}

#[test]
fn test_rendering_matches_expected_line() {
    let mut record = Record::new(Name::new("John").unwrap());
    record.add_phone("1112223333").unwrap();
    record.add_phone("5555555555").unwrap();
    record.add_birthday("15.06.2020").unwrap();

    assert_eq!(
        record.to_string(),
        "Contact name: John, birthday: 15.06.2020, phones: 1112223333; 5555555555"
    );
}

#[test]
fn test_upcoming_birthdays_scenario() {
    let mut book = AddressBook::new();

    let mut john = Record::new(Name::new("John").unwrap());
    john.add_birthday("15.06.2020").unwrap();
    book.add_record(john);

    let mut jane = Record::new(Name::new("Jane").unwrap());
    jane.add_birthday("17.05.2020").unwrap();
    book.add_record(jane);

    // Jane's May date is outside the window; John lands on 2024-06-15.
    let upcoming = book.upcoming_birthdays_from(date(2024, 6, 10));
    assert_eq!(upcoming.len(), 1);
    assert_eq!(upcoming[0].name, "John");
    assert_eq!(upcoming[0].congratulation_date, date(2024, 6, 15));

    let json = serde_json::to_string(&upcoming).unwrap();
    assert_eq!(
        json,
        r#"[{"name":"John","congratulation_date":"2024-06-15"}]"#
    );
}

#[test]
fn test_upcoming_birthdays_next_year_projection() {
    let mut book = AddressBook::new();

    let mut john = Record::new(Name::new("John").unwrap());
    john.add_birthday("15.06.2020").unwrap();
    book.add_record(john);

    // Birthday already passed: the candidate rolls to 2025-06-15,
    // which is more than 7 days away from 2024-06-20.
    assert!(book.upcoming_birthdays_from(date(2024, 6, 20)).is_empty());

    // From 2025-06-08 the rolled-over date is inside the window.
    let upcoming = book.upcoming_birthdays_from(date(2025, 6, 8));
    assert_eq!(upcoming.len(), 1);
    assert_eq!(upcoming[0].congratulation_date, date(2025, 6, 15));
}

#[test]
fn test_overwriting_a_record_drops_its_birthday() {
    let mut book = AddressBook::new();

    let mut john = Record::new(Name::new("John").unwrap());
    john.add_birthday("15.06.2020").unwrap();
    book.add_record(john);

    // Create-or-replace: the fresh record has no birthday.
    book.add_record(Record::new(Name::new("John").unwrap()));
    assert!(book.upcoming_birthdays_from(date(2024, 6, 10)).is_empty());
}
