//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur when operating on records and the address book.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressBookError {
    /// A field value failed domain validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The referenced phone number is not stored on the record
    #[error("Phone number not found: {0}")]
    PhoneNotFound(String),

    /// No record exists under the given name
    #[error("Record not found: {0}")]
    RecordNotFound(String),
}

/// Errors that can occur while dispatching a user command.
#[derive(Error, Debug)]
pub enum CommandError {
    /// The command needs more arguments than were supplied
    #[error("Please provide the correct number of arguments: {usage}")]
    MissingArguments { usage: &'static str },

    /// The first token did not name a known command
    #[error("Invalid command: {0}")]
    UnknownCommand(String),

    /// The underlying book operation failed
    #[error(transparent)]
    Book(#[from] AddressBookError),

    /// Failed to render a result as JSON
    #[error("JSON render error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<ValidationError> for CommandError {
    fn from(err: ValidationError) -> Self {
        Self::Book(AddressBookError::Validation(err))
    }
}

/// Convenience type alias for Results with AddressBookError
pub type BookResult<T> = Result<T, AddressBookError>;

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;
