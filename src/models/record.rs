//! Contact record: one person's name, phones and birthday.

use crate::domain::{Birthday, Name, Phone, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A contact stored in the address book.
///
/// The name is fixed at construction. Phones keep insertion order and may
/// repeat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: Name,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    phones: Vec<Phone>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a record with no phones.
    ///
    /// # Errors
    ///
    /// Fails if the name is blank or the birthday is not `DD.MM.YYYY`.
    pub fn new(name: &str, birthday: Option<&str>) -> Result<Self, ValidationError> {
        let name = Name::new(name)?;
        let birthday = birthday.map(Birthday::new).transpose()?;

        Ok(Self {
            name,
            phones: Vec::new(),
            birthday,
        })
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate and append a phone number.
    pub fn add_phone(&mut self, number: &str) -> Result<(), ValidationError> {
        let phone = Phone::new(number)?;
        self.phones.push(phone);
        Ok(())
    }

    /// Replace the first phone equal to `old` with `new`.
    ///
    /// `new` is validated before anything is looked up, so an invalid
    /// replacement is rejected even when `old` is not stored. Returns
    /// `Ok(false)` when no phone matched.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<bool, ValidationError> {
        let replacement = Phone::new(new)?;

        match self.phones.iter_mut().find(|phone| **phone == *old) {
            Some(phone) => {
                *phone = replacement;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// First phone equal to `number`.
    pub fn find_phone(&self, number: &str) -> Option<&Phone> {
        self.phones.iter().find(|phone| **phone == *number)
    }

    /// Remove the first phone equal to `number`. Returns whether one was removed.
    pub fn remove_phone(&mut self, number: &str) -> bool {
        match self.phones.iter().position(|phone| *phone == *number) {
            Some(index) => {
                self.phones.remove(index);
                true
            }
            None => false,
        }
    }

    /// Set the birthday, replacing any previous one.
    pub fn add_birthday(&mut self, value: &str) -> Result<(), ValidationError> {
        self.birthday = Some(Birthday::new(value)?);
        Ok(())
    }

    /// Phones joined with `separator`, in insertion order.
    pub fn joined_phones(&self, separator: &str) -> String {
        self.phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join(separator)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Contact name: {}, phones: {}",
            self.name,
            self.joined_phones("; ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_with_phones(phones: &[&str]) -> Record {
        let mut record = Record::new("Alice", None).unwrap();
        for phone in phones {
            record.add_phone(phone).unwrap();
        }
        record
    }

    #[test]
    fn test_record_new() {
        let record = Record::new("Alice", Some("05.06.1990")).unwrap();
        assert_eq!(record.name().as_str(), "Alice");
        assert!(record.phones().is_empty());
        assert_eq!(record.birthday().unwrap().to_string(), "05.06.1990");
    }

    #[test]
    fn test_record_new_rejects_invalid_fields() {
        assert_eq!(Record::new("", None), Err(ValidationError::EmptyName));
        assert!(matches!(
            Record::new("Alice", Some("1990-06-05")),
            Err(ValidationError::InvalidBirthday(_))
        ));
    }

    #[test]
    fn test_add_phone_keeps_order_and_duplicates() {
        let record = record_with_phones(&["1111111111", "2222222222", "1111111111"]);
        let phones: Vec<&str> = record.phones().iter().map(Phone::as_str).collect();
        assert_eq!(phones, vec!["1111111111", "2222222222", "1111111111"]);
    }

    #[test]
    fn test_add_phone_invalid_leaves_record_unchanged() {
        let mut record = record_with_phones(&["1111111111"]);
        assert!(record.add_phone("12345").is_err());
        assert_eq!(record.phones().len(), 1);
    }

    #[test]
    fn test_edit_phone_replaces_first_match() {
        let mut record = record_with_phones(&["1111111111", "2222222222", "1111111111"]);
        assert_eq!(record.edit_phone("1111111111", "3333333333"), Ok(true));
        assert_eq!(record.joined_phones(","), "3333333333,2222222222,1111111111");
    }

    #[test]
    fn test_edit_phone_without_match() {
        let mut record = record_with_phones(&["1111111111"]);
        assert_eq!(record.edit_phone("9999999999", "3333333333"), Ok(false));
        assert_eq!(record.joined_phones(","), "1111111111");
    }

    #[test]
    fn test_edit_phone_validates_replacement() {
        let mut record = record_with_phones(&["1111111111"]);
        assert!(matches!(
            record.edit_phone("1111111111", "abc"),
            Err(ValidationError::InvalidPhone(_))
        ));
        assert_eq!(record.joined_phones(","), "1111111111");
    }

    #[test]
    fn test_find_and_remove_phone() {
        let mut record = record_with_phones(&["1111111111", "2222222222"]);
        assert_eq!(
            record.find_phone("2222222222").map(Phone::as_str),
            Some("2222222222")
        );
        assert!(record.find_phone("3333333333").is_none());

        assert!(record.remove_phone("1111111111"));
        assert!(!record.remove_phone("1111111111"));
        assert_eq!(record.joined_phones(","), "2222222222");
    }

    #[test]
    fn test_add_birthday_overwrites() {
        let mut record = Record::new("Alice", Some("01.01.1990")).unwrap();
        record.add_birthday("02.02.1992").unwrap();
        assert_eq!(record.birthday().unwrap().to_string(), "02.02.1992");

        assert!(record.add_birthday("2.2.1992").is_err());
        assert_eq!(record.birthday().unwrap().to_string(), "02.02.1992");
    }

    #[test]
    fn test_record_display() {
        let record = record_with_phones(&["1111111111", "2222222222"]);
        assert_eq!(
            record.to_string(),
            "Contact name: Alice, phones: 1111111111; 2222222222"
        );
        let empty = Record::new("Bob", None).unwrap();
        assert_eq!(empty.to_string(), "Contact name: Bob, phones: ");
    }

    #[test]
    fn test_record_serialization() {
        let mut record = Record::new("Alice", Some("05.06.1990")).unwrap();
        record.add_phone("1234567890").unwrap();

        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"name":"Alice","phones":["1234567890"],"birthday":"05.06.1990"}"#
        );

        let back: Record = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
