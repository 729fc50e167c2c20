//! Per-process session state.
//!
//! A [`Session`] owns the address book and the clock for as long as the
//! command loop runs, and routes each command to its handler.

use crate::clock::{Clock, SystemClock};
use crate::handlers;
use crate::models::AddressBook;
use crate::repl::parser::{Command, ParsedInput};

pub const FAREWELL: &str = "Good bye!";

/// What the loop should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Print the text and read the next command.
    Reply(String),
    /// Print the text and stop.
    Exit(String),
}

impl Outcome {
    pub fn text(&self) -> &str {
        match self {
            Self::Reply(text) | Self::Exit(text) => text,
        }
    }
}

/// The address book plus everything handlers need alongside it.
pub struct Session {
    book: AddressBook,
    clock: Box<dyn Clock>,
}

impl Session {
    /// An empty session reading dates from the system clock.
    pub fn new() -> Self {
        Self::with_clock(Box::new(SystemClock))
    }

    pub fn with_clock(clock: Box<dyn Clock>) -> Self {
        Self {
            book: AddressBook::new(),
            clock,
        }
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    pub fn book_mut(&mut self) -> &mut AddressBook {
        &mut self.book
    }

    /// Run one parsed line.
    pub fn execute(&mut self, input: &ParsedInput) -> Outcome {
        let command = match input.command.parse::<Command>() {
            Ok(command) => command,
            Err(word) => {
                tracing::debug!(command = %word, "Unknown command");
                return Outcome::Reply(format!("Not a valid command '{}'", word));
            }
        };

        tracing::debug!(command = %command, args = input.args.len(), "Dispatching command");

        let args = input.args.as_slice();
        let text = match command {
            Command::Exit => return Outcome::Exit(FAREWELL.to_string()),
            Command::Hello => handlers::hello(),
            Command::Add => handlers::add_contact(args, &mut self.book),
            Command::Change => handlers::change_contact(args, &mut self.book),
            Command::Phone => handlers::show_phone(args, &self.book),
            Command::All => handlers::show_all(&self.book),
            Command::AddBirthday => handlers::add_birthday(args, &mut self.book),
            Command::ShowBirthday => handlers::show_birthday(args, &self.book),
            Command::Birthdays => handlers::birthdays(&self.book, &*self.clock),
        };

        Outcome::Reply(text)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
