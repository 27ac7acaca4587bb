//! Record model representing a single contact in the address book.

use crate::domain::{Birthday, Name, PhoneNumber};
use crate::error::{AddressBookError, BookResult};
use serde::Serialize;
use std::fmt;

/// A contact record: a name, its phone numbers, and an optional birthday.
///
/// The name is set once at creation and never changes. Phone numbers keep
/// insertion order and may contain duplicates; only validated values are
/// ever stored. Phone lookups match by exact string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    name: Name,
    phones: Vec<PhoneNumber>,
    #[serde(skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a new record with the given name and no phones or birthday.
    pub fn new(name: Name) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    /// The record's name.
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// The record's phone numbers, in insertion order.
    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    /// The record's birthday, if one has been set.
    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate `value` as a phone number and append it to the record.
    ///
    /// Duplicates are permitted; no dedup check is performed.
    ///
    /// # Errors
    ///
    /// Returns a validation error if `value` is not exactly 10 digits.
    pub fn add_phone(&mut self, value: &str) -> BookResult<()> {
        let phone = PhoneNumber::new(value)?;
        self.phones.push(phone);
        Ok(())
    }

    /// Remove the first phone whose string form equals `value`.
    ///
    /// # Errors
    ///
    /// Returns `AddressBookError::PhoneNotFound` if no phone matches.
    pub fn remove_phone(&mut self, value: &str) -> BookResult<()> {
        let position = self.position_of(value)?;
        self.phones.remove(position);
        Ok(())
    }

    /// Replace the first phone matching `old_value` with `new_value`,
    /// keeping its position in the sequence.
    ///
    /// The record is left unchanged if `new_value` fails validation.
    ///
    /// # Errors
    ///
    /// Returns `AddressBookError::PhoneNotFound` if `old_value` is absent,
    /// or a validation error if `new_value` is not exactly 10 digits.
    pub fn edit_phone(&mut self, old_value: &str, new_value: &str) -> BookResult<()> {
        let position = self.position_of(old_value)?;
        let phone = PhoneNumber::new(new_value)?;
        self.phones[position] = phone;
        Ok(())
    }

    /// Find the phone whose string form equals `value`.
    ///
    /// Lookup failure is an error, not an empty result; callers must
    /// handle the miss explicitly.
    ///
    /// # Errors
    ///
    /// Returns `AddressBookError::PhoneNotFound` if no phone matches.
    pub fn find_phone(&self, value: &str) -> BookResult<&PhoneNumber> {
        self.phones
            .iter()
            .find(|phone| phone.as_str() == value)
            .ok_or_else(|| AddressBookError::PhoneNotFound(value.to_string()))
    }

    /// Parse `value` as a `DD.MM.YYYY` birthday and set it on the record,
    /// overwriting any previous value.
    ///
    /// # Errors
    ///
    /// Returns a validation error if `value` is not a valid date in that format.
    pub fn add_birthday(&mut self, value: &str) -> BookResult<()> {
        let birthday = Birthday::parse(value)?;
        self.birthday = Some(birthday);
        Ok(())
    }

    fn position_of(&self, value: &str) -> BookResult<usize> {
        self.phones
            .iter()
            .position(|phone| phone.as_str() == value)
            .ok_or_else(|| AddressBookError::PhoneNotFound(value.to_string()))
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let birthday = self
            .birthday
            .map(|b| b.to_string())
            .unwrap_or_default();
        let phones = self
            .phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join("; ");
        write!(
            f,
            "Contact name: {}, birthday: {}, phones: {}",
            self.name, birthday, phones
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str) -> Record {
        Record::new(Name::new(name).unwrap())
    }

    #[test]
    fn test_new_record_is_empty() {
        let record = record("John");
        assert_eq!(record.name().as_str(), "John");
        assert!(record.phones().is_empty());
        assert!(record.birthday().is_none());
    }

    #[test]
    fn test_add_phone() {
        let mut record = record("John");
        record.add_phone("1234567890").unwrap();
        record.add_phone("5555555555").unwrap();
        assert_eq!(record.phones().len(), 2);
        assert_eq!(record.phones()[0].as_str(), "1234567890");
    }

    #[test]
    fn test_add_phone_rejects_invalid() {
        let mut record = record("John");
        assert!(record.add_phone("12345").is_err());
        assert!(record.phones().is_empty());
    }

    #[test]
    fn test_add_phone_permits_duplicates() {
        let mut record = record("John");
        record.add_phone("1234567890").unwrap();
        record.add_phone("1234567890").unwrap();
        assert_eq!(record.phones().len(), 2);
    }

    #[test]
    fn test_remove_phone() {
        let mut record = record("John");
        record.add_phone("1234567890").unwrap();
        record.add_phone("5555555555").unwrap();
        record.remove_phone("1234567890").unwrap();
        assert_eq!(record.phones().len(), 1);
        assert_eq!(record.phones()[0].as_str(), "5555555555");
    }

    #[test]
    fn test_remove_phone_absent_fails() {
        let mut record = record("John");
        let err = record.remove_phone("1234567890").unwrap_err();
        assert_eq!(err, AddressBookError::PhoneNotFound("1234567890".into()));
    }

    #[test]
    fn test_edit_phone_preserves_position() {
        let mut record = record("John");
        record.add_phone("1111111111").unwrap();
        record.add_phone("1234567890").unwrap();
        record.add_phone("2222222222").unwrap();

        record.edit_phone("1234567890", "1112223333").unwrap();

        assert_eq!(record.phones().len(), 3);
        assert_eq!(record.phones()[1].as_str(), "1112223333");
    }

    #[test]
    fn test_edit_phone_absent_old_fails() {
        let mut record = record("John");
        record.add_phone("1111111111").unwrap();
        let err = record.edit_phone("9999999999", "1112223333").unwrap_err();
        assert_eq!(err, AddressBookError::PhoneNotFound("9999999999".into()));
    }

    #[test]
    fn test_edit_phone_invalid_new_leaves_record_unchanged() {
        let mut record = record("John");
        record.add_phone("1234567890").unwrap();
        assert!(record.edit_phone("1234567890", "bad").is_err());
        assert_eq!(record.phones()[0].as_str(), "1234567890");
    }

    #[test]
    fn test_find_phone() {
        let mut record = record("John");
        record.add_phone("1234567890").unwrap();
        let phone = record.find_phone("1234567890").unwrap();
        assert_eq!(phone.as_str(), "1234567890");
        assert!(record.find_phone("0000000000").is_err());
    }

    #[test]
    fn test_add_birthday_overwrites() {
        let mut record = record("John");
        record.add_birthday("15.06.2020").unwrap();
        record.add_birthday("16.06.2020").unwrap();
        assert_eq!(record.birthday().unwrap().to_string(), "16.06.2020");
    }

    #[test]
    fn test_add_birthday_rejects_bad_format() {
        let mut record = record("John");
        assert!(record.add_birthday("2020-06-15").is_err());
        assert!(record.birthday().is_none());
    }

    #[test]
    fn test_display() {
        let mut record = record("John");
        record.add_phone("1234567890").unwrap();
        record.add_phone("5555555555").unwrap();
        record.add_birthday("15.06.2020").unwrap();
        assert_eq!(
            record.to_string(),
            "Contact name: John, birthday: 15.06.2020, phones: 1234567890; 5555555555"
        );
    }

    #[test]
    fn test_display_without_birthday() {
        let record = record("Jane");
        assert_eq!(record.to_string(), "Contact name: Jane, birthday: , phones: ");
    }
}
