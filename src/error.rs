//! Error types for the assistant bot.
//!
//! Handler failures are typed here and rendered to the user through their
//! `Display` text. Validation errors from the domain layer convert into
//! [`CommandError::Validation`].

use crate::domain::ValidationError;
use thiserror::Error;

/// Generic reply for a failed name lookup.
pub const CONTACT_NOT_FOUND: &str = "Can't find the contact.";

/// Errors a command handler can end with.
///
/// The `Display` text of each variant is exactly what the user sees.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// No contact (or no matching data) for the given name.
    #[error("{0}")]
    NotFound(&'static str),

    /// Wrong number of positional arguments.
    #[error("No arguments.")]
    InvalidArgument,

    /// A field failed validation.
    #[error("Give the correct data, please")]
    Validation(#[from] ValidationError),
}

impl CommandError {
    /// Lookup failure with the generic message.
    pub fn contact_not_found() -> Self {
        Self::NotFound(CONTACT_NOT_FOUND)
    }

    /// Short label for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "not_found",
            Self::InvalidArgument => "invalid_argument",
            Self::Validation(_) => "validation",
        }
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for handler results
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
