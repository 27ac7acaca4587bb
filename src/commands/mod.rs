//! Command parsing and dispatch for the interactive loop.
//!
//! A line of input is split on whitespace; the first token names the
//! command (case-insensitive) and the rest are its arguments. Argument
//! counts are checked here, before any book operation runs.

pub mod handlers;

use crate::error::{CommandError, CommandResult};

pub use handlers::execute;

/// A parsed user command with its typed arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `hello`
    Hello,
    /// `add <name> <phone>` — create-or-update a contact with a phone
    Add { name: String, phone: String },
    /// `change <name> <old-phone> <new-phone>`
    Change {
        name: String,
        old_phone: String,
        new_phone: String,
    },
    /// `phone <name>` — list a contact's phones
    Phone { name: String },
    /// `remove-phone <name> <phone>`
    RemovePhone { name: String, phone: String },
    /// `all` — list every contact
    All,
    /// `add-birthday <name> <DD.MM.YYYY>`
    AddBirthday { name: String, birthday: String },
    /// `show-birthday <name>`
    ShowBirthday { name: String },
    /// `birthdays` — contacts with a birthday in the next 7 days
    Birthdays,
    /// `close` / `exit`
    Exit,
}

impl Command {
    /// Parse one line of user input.
    ///
    /// Returns `Ok(None)` for blank input so the loop can re-prompt.
    ///
    /// # Errors
    ///
    /// Returns `CommandError::UnknownCommand` for an unrecognized command
    /// token, or `CommandError::MissingArguments` when too few argument
    /// tokens follow a known command.
    pub fn parse(line: &str) -> CommandResult<Option<Self>> {
        let mut tokens = line.split_whitespace();
        let Some(command) = tokens.next() else {
            return Ok(None);
        };
        let args: Vec<&str> = tokens.collect();

        let command = match command.to_lowercase().as_str() {
            "hello" => Self::Hello,
            "add" => {
                let [name, phone] = take_args(&args, "add <name> <phone>")?;
                Self::Add {
                    name: name.to_string(),
                    phone: phone.to_string(),
                }
            }
            "change" => {
                let [name, old_phone, new_phone] =
                    take_args(&args, "change <name> <old-phone> <new-phone>")?;
                Self::Change {
                    name: name.to_string(),
                    old_phone: old_phone.to_string(),
                    new_phone: new_phone.to_string(),
                }
            }
            "phone" => {
                let [name] = take_args(&args, "phone <name>")?;
                Self::Phone {
                    name: name.to_string(),
                }
            }
            "remove-phone" => {
                let [name, phone] = take_args(&args, "remove-phone <name> <phone>")?;
                Self::RemovePhone {
                    name: name.to_string(),
                    phone: phone.to_string(),
                }
            }
            "all" => Self::All,
            "add-birthday" => {
                let [name, birthday] = take_args(&args, "add-birthday <name> <DD.MM.YYYY>")?;
                Self::AddBirthday {
                    name: name.to_string(),
                    birthday: birthday.to_string(),
                }
            }
            "show-birthday" => {
                let [name] = take_args(&args, "show-birthday <name>")?;
                Self::ShowBirthday {
                    name: name.to_string(),
                }
            }
            "birthdays" => Self::Birthdays,
            "close" | "exit" => Self::Exit,
            other => return Err(CommandError::UnknownCommand(other.to_string())),
        };

        Ok(Some(command))
    }
}

/// Take the first `N` argument tokens, failing when fewer are present.
/// Extra tokens are ignored.
fn take_args<'a, const N: usize>(
    args: &[&'a str],
    usage: &'static str,
) -> CommandResult<[&'a str; N]> {
    if args.len() < N {
        return Err(CommandError::MissingArguments { usage });
    }
    let mut taken = [""; N];
    taken.copy_from_slice(&args[..N]);
    Ok(taken)
}
