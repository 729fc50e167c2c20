//! Assistant Bot - an interactive command-line address book.
//!
//! Stores contact names, phone numbers and birthdays in memory and answers
//! queries such as "whose birthday is this week".
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (name, phone, birthday)
//! - **models**: Contact records and the address book with the birthday query
//! - **clock**: Source of today's date
//! - **handlers**: One function per user command
//! - **session**: Owns the address book and routes commands to handlers
//! - **repl**: Line-oriented command loop over any reader/writer
//! - **config**: Configuration from environment variables
//! - **error**: Error types for handlers and configuration

pub mod clock;
pub mod config;
pub mod domain;
pub mod error;
pub mod handlers;
pub mod models;
pub mod repl;
pub mod session;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::Config;
pub use domain::{Birthday, Name, Phone, ValidationError};
pub use error::{CommandError, CommandResult, ConfigError};
pub use models::{AddressBook, Record, WeeklyBirthdays};
pub use session::{Outcome, Session};
