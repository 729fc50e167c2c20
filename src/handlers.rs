//! Command handlers.
//!
//! One function per user command. Each takes the positional arguments typed
//! after the command word and returns the text to print. Failures are carried
//! as [`CommandError`] inside the handler and turned into their fixed reply
//! text at the boundary, so a handler never fails past its caller.
//!
//! Every handler validates its input before touching the address book.

use crate::clock::Clock;
use crate::error::{CommandError, CommandResult};
use crate::models::{AddressBook, Record};
use tracing::{debug, warn};

pub const GREETING: &str = "How can I help you?";
pub const CONTACT_ADDED: &str = "Contact added.";
pub const CONTACT_UPDATED: &str = "Contact updated.";
pub const BIRTHDAY_ADDED: &str = "Birthday added.";
pub const NO_CONTACTS: &str = "No contacts stored.";
pub const NO_BIRTHDAYS: &str = "No birthdays next week.";

const NOT_FOUND: &str = "Not found.";
const BIRTHDAY_CONTACT_NOT_FOUND: &str = "Contact not found.";
const NO_BIRTHDAY_FOR_CONTACT: &str = "No birthday found for this contact.";

/// `hello`
pub fn hello() -> String {
    GREETING.to_string()
}

/// `add <name> <phone>`: create a contact with one phone.
///
/// An existing contact with the same name is replaced.
pub fn add_contact(args: &[String], book: &mut AddressBook) -> String {
    reply("add", try_add_contact(args, book))
}

/// `change <name> <phone>`: replace the contact's first phone.
///
/// A contact with no phones gets the number as its first phone.
pub fn change_contact(args: &[String], book: &mut AddressBook) -> String {
    reply("change", try_change_contact(args, book))
}

/// `phone <name>`: the contact's phones, comma separated.
pub fn show_phone(args: &[String], book: &AddressBook) -> String {
    reply("phone", try_show_phone(args, book))
}

/// `all`: one `name: phones` line per contact.
pub fn show_all(book: &AddressBook) -> String {
    if book.is_empty() {
        return NO_CONTACTS.to_string();
    }

    book.iter()
        .map(|record| format!("{}: {}", record.name(), record.joined_phones(", ")))
        .collect::<Vec<_>>()
        .join("\n")
}

/// `add-birthday <name> <DD.MM.YYYY>`
pub fn add_birthday(args: &[String], book: &mut AddressBook) -> String {
    reply("add-birthday", try_add_birthday(args, book))
}

/// `show-birthday <name>`
pub fn show_birthday(args: &[String], book: &AddressBook) -> String {
    reply("show-birthday", try_show_birthday(args, book))
}

/// `birthdays`: this week's birthdays grouped by weekday.
pub fn birthdays(book: &AddressBook, clock: &dyn Clock) -> String {
    let weekly = book.birthdays_due_this_week(clock);
    if weekly.is_empty() {
        NO_BIRTHDAYS.to_string()
    } else {
        weekly.to_string()
    }
}

fn try_add_contact(args: &[String], book: &mut AddressBook) -> CommandResult<String> {
    let [name, phone] = expect_args::<2>(args)?;

    let mut record = Record::new(name, None)?;
    record.add_phone(phone)?;
    book.add_record(record);

    debug!(name = %name, "Contact added");
    Ok(CONTACT_ADDED.to_string())
}

fn try_change_contact(args: &[String], book: &mut AddressBook) -> CommandResult<String> {
    let [name, phone] = expect_args::<2>(args)?;

    let record = book
        .find_mut(name)
        .ok_or(CommandError::NotFound(NOT_FOUND))?;

    match record.phones().first().map(|p| p.as_str().to_string()) {
        Some(first) => {
            record.edit_phone(&first, phone)?;
        }
        None => {
            // Nothing to replace yet: the new number becomes the first one
            record.add_phone(phone)?;
        }
    }

    debug!(name = %name, "Contact updated");
    Ok(CONTACT_UPDATED.to_string())
}

fn try_show_phone(args: &[String], book: &AddressBook) -> CommandResult<String> {
    let [name] = expect_args::<1>(args)?;

    let record = book.find(name).ok_or(CommandError::NotFound(NOT_FOUND))?;
    Ok(record.joined_phones(", "))
}

fn try_add_birthday(args: &[String], book: &mut AddressBook) -> CommandResult<String> {
    let [name, date] = expect_args::<2>(args)?;

    let record = book
        .find_mut(name)
        .ok_or(CommandError::NotFound(BIRTHDAY_CONTACT_NOT_FOUND))?;
    record.add_birthday(date)?;

    debug!(name = %name, "Birthday added");
    Ok(BIRTHDAY_ADDED.to_string())
}

fn try_show_birthday(args: &[String], book: &AddressBook) -> CommandResult<String> {
    let [name] = expect_args::<1>(args)?;

    book.find(name)
        .and_then(Record::birthday)
        .map(ToString::to_string)
        .ok_or(CommandError::NotFound(NO_BIRTHDAY_FOR_CONTACT))
}

/// Borrow exactly `N` positional arguments.
fn expect_args<const N: usize>(args: &[String]) -> CommandResult<[&str; N]> {
    if args.len() != N {
        return Err(CommandError::InvalidArgument);
    }

    let mut out = [""; N];
    for (slot, arg) in out.iter_mut().zip(args) {
        *slot = arg.as_str();
    }
    Ok(out)
}

/// Render a handler result as the text shown to the user.
fn reply(command: &str, result: CommandResult<String>) -> String {
    match result {
        Ok(text) => text,
        Err(err) => {
            match &err {
                CommandError::Validation(cause) => {
                    warn!(command = %command, kind = err.kind(), cause = %cause, "Command rejected")
                }
                CommandError::NotFound(_) | CommandError::InvalidArgument => {
                    debug!(command = %command, kind = err.kind(), "Command failed")
                }
            }
            err.to_string()
        }
    }
}
