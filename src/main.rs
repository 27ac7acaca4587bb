//! Contact Book - Main entry point
//!
//! Runs the interactive read-eval-print loop: read a line, parse it into
//! a command, execute it against the in-memory address book, print the
//! result, repeat.

use anyhow::Result;
use contact_book::{commands, AddressBook, Command};
use std::io::{self, BufRead, Write};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Initialize logging (stderr only to keep stdout clean for command output)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut book = AddressBook::new();
    info!("address book initialized");

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    println!("Welcome to the assistant bot!");
    loop {
        print!("Enter a command: ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            // EOF: leave the loop the same way "exit" does.
            println!("Good bye!");
            break;
        }

        let command = match Command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                println!("{}", err);
                continue;
            }
        };

        let exiting = command == Command::Exit;
        match commands::execute(&mut book, command) {
            Ok(message) => println!("{}", message),
            // No error is fatal; report it and keep the loop usable.
            Err(err) => println!("{}", err),
        }
        if exiting {
            break;
        }
    }

    info!("shutdown complete");
    Ok(())
}
