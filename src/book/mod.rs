//! The address book: an owning collection of contact records keyed by name.
//!
//! Also home of the upcoming-birthday query, which projects each stored
//! birthday onto the current (or next) year and selects the ones falling
//! inside a 7-day forward-looking window.

use crate::error::{AddressBookError, BookResult};
use crate::models::Record;
use chrono::{Datelike, Duration, Local, NaiveDate};
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use tracing::debug;

/// Length of the forward-looking congratulation window, in days.
/// The window is inclusive on both ends.
const WINDOW_DAYS: i64 = 7;

/// A single entry of the upcoming-birthday query result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpcomingBirthday {
    /// Name of the contact to congratulate.
    pub name: String,

    /// The date the birthday falls on inside the window, serialized as
    /// `YYYY-MM-DD`.
    #[serde(serialize_with = "serialize_iso_date")]
    pub congratulation_date: NaiveDate,
}

fn serialize_iso_date<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    date.format("%Y-%m-%d").to_string().serialize(serializer)
}

/// An owning map from contact name to [`Record`], keys unique.
///
/// Created empty at process start and discarded at process end: there is
/// no persistence. Every entry's key equals its record's name.
///
/// Lookups via [`AddressBook::find`] return an `Option` so callers can
/// branch on absence (create vs update); [`AddressBook::delete`] treats
/// absence as an error because the caller named a record it expected to
/// exist. The asymmetry is deliberate.
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    records: BTreeMap<String, Record>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records in the book.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when the book holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Insert `record` under its own name, replacing any existing entry.
    ///
    /// Last write wins: adding a record for an existing name silently
    /// overwrites it. This is the create-or-replace contract.
    pub fn add_record(&mut self, record: Record) {
        let name = record.name().as_str().to_string();
        debug!(name = %name, "adding record");
        self.records.insert(name, record);
    }

    /// Look up the record for `name`, if present.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Look up the record for `name` for mutation, if present.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Remove the record for `name`.
    ///
    /// # Errors
    ///
    /// Returns `AddressBookError::RecordNotFound` if no record exists
    /// under `name`.
    pub fn delete(&mut self, name: &str) -> BookResult<()> {
        match self.records.remove(name) {
            Some(_) => {
                debug!(name = %name, "deleted record");
                Ok(())
            }
            None => Err(AddressBookError::RecordNotFound(name.to_string())),
        }
    }

    /// Iterate over all records.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    /// Records with a birthday falling within the next 7 days of the
    /// local calendar date.
    pub fn upcoming_birthdays(&self) -> Vec<UpcomingBirthday> {
        self.upcoming_birthdays_from(Local::now().date_naive())
    }

    /// Records with a birthday falling within the inclusive window
    /// `[today, today + 7 days]`.
    ///
    /// Each stored birthday is projected onto `today`'s year; if that
    /// projection already passed, onto the next year, so the search
    /// always looks forward. Results are sorted ascending by
    /// congratulation date. Feb 29 birthdays are observed on March 1
    /// in non-leap target years.
    pub fn upcoming_birthdays_from(&self, today: NaiveDate) -> Vec<UpcomingBirthday> {
        let window_end = today + Duration::days(WINDOW_DAYS);
        let mut result: Vec<UpcomingBirthday> = Vec::new();

        for record in self.records.values() {
            let Some(birthday) = record.birthday() else {
                continue;
            };

            let mut candidate = project_onto_year(birthday.month(), birthday.day(), today.year());
            if candidate < today {
                candidate = project_onto_year(birthday.month(), birthday.day(), today.year() + 1);
            }

            if today <= candidate && candidate <= window_end {
                result.push(UpcomingBirthday {
                    name: record.name().as_str().to_string(),
                    congratulation_date: candidate,
                });
            }
        }

        // Stable sort: ties keep the book's name order.
        result.sort_by_key(|entry| entry.congratulation_date);
        debug!(count = result.len(), "upcoming birthday query");
        result
    }
}

/// Place a recurring (month, day) onto `year`. Feb 29 is the only pair
/// that can miss; it maps to March 1 of the same year.
fn project_onto_year(month: u32, day: u32, year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap_or_else(|| NaiveDate::from_ymd_opt(year, 3, 1).unwrap_or_default())
}
