//! Handlers turning parsed commands into book operations and user-facing text.

use super::Command;
use crate::book::AddressBook;
use crate::domain::Name;
use crate::error::{AddressBookError, CommandResult};
use crate::models::Record;
use tracing::debug;

/// Execute `command` against `book`, returning the message to print.
///
/// Every failure surfaces as a `CommandError`; nothing here terminates
/// the process, so the interactive loop stays usable after any single
/// command fails.
pub fn execute(book: &mut AddressBook, command: Command) -> CommandResult<String> {
    debug!(?command, "dispatching");
    match command {
        Command::Hello => Ok("How can I help you?".to_string()),
        Command::Add { name, phone } => add_contact(book, &name, &phone),
        Command::Change {
            name,
            old_phone,
            new_phone,
        } => change_contact(book, &name, &old_phone, &new_phone),
        Command::Phone { name } => show_phone(book, &name),
        Command::RemovePhone { name, phone } => remove_phone(book, &name, &phone),
        Command::All => Ok(show_all(book)),
        Command::AddBirthday { name, birthday } => add_birthday(book, &name, &birthday),
        Command::ShowBirthday { name } => show_birthday(book, &name),
        Command::Birthdays => birthdays(book),
        Command::Exit => Ok("Good bye!".to_string()),
    }
}

/// Create-or-update: a fresh record is inserted when the name is new,
/// otherwise the phone is appended to the existing record.
fn add_contact(book: &mut AddressBook, name: &str, phone: &str) -> CommandResult<String> {
    match book.find_mut(name) {
        Some(record) => {
            record.add_phone(phone)?;
            Ok("Contact updated.".to_string())
        }
        None => {
            let mut record = Record::new(Name::new(name)?);
            record.add_phone(phone)?;
            book.add_record(record);
            Ok("Contact added.".to_string())
        }
    }
}

fn change_contact(
    book: &mut AddressBook,
    name: &str,
    old_phone: &str,
    new_phone: &str,
) -> CommandResult<String> {
    let record = find_record_mut(book, name)?;
    record.edit_phone(old_phone, new_phone)?;
    Ok(format!("Phone number for contact {} changed", name))
}

fn show_phone(book: &AddressBook, name: &str) -> CommandResult<String> {
    let record = find_record(book, name)?;
    if record.phones().is_empty() {
        return Ok(format!("No phones for contact {}", name));
    }
    let phones = record
        .phones()
        .iter()
        .map(|phone| phone.as_str())
        .collect::<Vec<_>>()
        .join("; ");
    Ok(phones)
}

fn remove_phone(book: &mut AddressBook, name: &str, phone: &str) -> CommandResult<String> {
    let record = find_record_mut(book, name)?;
    record.remove_phone(phone)?;
    Ok(format!(
        "Phone number {} for contact {} removed",
        phone, name
    ))
}

fn show_all(book: &AddressBook) -> String {
    if book.is_empty() {
        return "You have no contacts yet.".to_string();
    }
    book.iter()
        .map(|record| record.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

fn add_birthday(book: &mut AddressBook, name: &str, birthday: &str) -> CommandResult<String> {
    let record = find_record_mut(book, name)?;
    record.add_birthday(birthday)?;
    Ok(format!("Birthday for contact {} changed", name))
}

fn show_birthday(book: &AddressBook, name: &str) -> CommandResult<String> {
    let record = find_record(book, name)?;
    match record.birthday() {
        Some(birthday) => Ok(format!("Birthday for contact {}: {}", name, birthday)),
        None => Ok(format!("Birthday for contact {} not provided", name)),
    }
}

fn birthdays(book: &AddressBook) -> CommandResult<String> {
    if book.is_empty() {
        return Ok("You have no contacts yet.".to_string());
    }
    let upcoming = book.upcoming_birthdays();
    if upcoming.is_empty() {
        return Ok("No birthdays next week.".to_string());
    }
    Ok(serde_json::to_string(&upcoming)?)
}

fn find_record<'a>(book: &'a AddressBook, name: &str) -> CommandResult<&'a Record> {
    book.find(name)
        .ok_or_else(|| AddressBookError::RecordNotFound(name.to_string()).into())
}

fn find_record_mut<'a>(book: &'a mut AddressBook, name: &str) -> CommandResult<&'a mut Record> {
    book.find_mut(name)
        .ok_or_else(|| AddressBookError::RecordNotFound(name.to_string()).into())
}
