//! Data models for the address book.
//!
//! A [`Record`] holds one contact; the [`AddressBook`] keys records by name
//! and answers the weekly birthday query.

pub mod address_book;
pub mod record;

pub use address_book::{weekday_name, AddressBook, WeeklyBirthdays};
pub use record::Record;
