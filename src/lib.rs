//! Contact Book - an interactive command-line contact manager.
//!
//! Stores contact names, validated 10-digit phone numbers, and optional
//! birthdays, and answers a "which contacts have birthdays in the next
//! 7 days" query. All data is in-memory only and lost at process exit.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (Name, PhoneNumber, Birthday)
//! - **models**: The Record aggregate for a single contact
//! - **book**: The owning AddressBook collection and the birthday query
//! - **error**: Custom error types for precise error handling
//! - **commands**: Parsing and dispatch for the interactive loop

pub mod book;
pub mod commands;
pub mod domain;
pub mod error;
pub mod models;

pub use book::{AddressBook, UpcomingBirthday};
pub use commands::Command;
pub use domain::{Birthday, Name, PhoneNumber, ValidationError};
pub use error::{AddressBookError, BookResult, CommandError, CommandResult};
pub use models::Record;
