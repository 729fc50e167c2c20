//! Domain validation errors.

use thiserror::Error;

/// Errors that can occur during domain value object validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided contact name is empty or whitespace only.
    #[error("name cannot be empty")]
    EmptyName,

    /// The provided phone number is not exactly 10 digits.
    #[error("phone must be 10 digits, got '{0}'")]
    InvalidPhone(String),

    /// The provided birthday is not a real date in `DD.MM.YYYY` form.
    #[error("birthday must be DD.MM.YYYY, got '{0}'")]
    InvalidBirthday(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        assert_eq!(ValidationError::EmptyName.to_string(), "name cannot be empty");
        assert_eq!(
            ValidationError::InvalidPhone("123".to_string()).to_string(),
            "phone must be 10 digits, got '123'"
        );
        assert!(ValidationError::InvalidBirthday("1.1.90".to_string())
            .to_string()
            .starts_with("birthday must be DD.MM.YYYY"));
    }
}
