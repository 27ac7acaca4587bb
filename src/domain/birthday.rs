//! Birthday value object.

use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Textual format birthdays are parsed from and rendered to.
const DATE_FORMAT: &str = "%d.%m.%Y";

/// A contact's birthday, parsed from the fixed `DD.MM.YYYY` format.
///
/// Construction fails on anything that is not a valid calendar date in
/// that format. The full date is retained, but only day-of-month and
/// month participate in the recurring-birthday computation; the year is
/// display-only.
///
/// # Example
///
/// ```
/// use contact_book::domain::Birthday;
///
/// let birthday = Birthday::parse("15.06.2020").unwrap();
/// assert_eq!(birthday.to_string(), "15.06.2020");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parse a Birthday from a `DD.MM.YYYY` string.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidDate` if the input does not match
    /// the format or names an impossible calendar date.
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        NaiveDate::parse_from_str(value, DATE_FORMAT)
            .map(Self)
            .map_err(|_| ValidationError::InvalidDate(value.to_string()))
    }

    /// Get the underlying calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// Month component (1-12), used for scheduling.
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Day-of-month component (1-31), used for scheduling.
    pub fn day(&self) -> u32 {
        self.0.day()
    }
}

// Serde support - serialize in the same DD.MM.YYYY textual form
impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_string().serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::parse(&s).map_err(serde::de::Error::custom)
    }
}

// Display support
impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}
