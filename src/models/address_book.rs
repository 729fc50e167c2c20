//! The address book and its weekly birthday query.

use crate::clock::Clock;
use crate::models::Record;
use chrono::{Datelike, Days, NaiveDate, Weekday};
use std::fmt;

/// Name-keyed collection of contact records.
///
/// Records iterate in the order their names were first added. Adding a record
/// under an existing name replaces the old record in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: Vec<Record>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `record`, replacing any record with the same name.
    pub fn add_record(&mut self, record: Record) {
        match self.position(record.name().as_str()) {
            Some(index) => self.records[index] = record,
            None => self.records.push(record),
        }
    }

    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.name().as_str() == name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.iter_mut().find(|r| r.name().as_str() == name)
    }

    /// Remove the record stored under `name`, if any.
    pub fn delete(&mut self, name: &str) -> Option<Record> {
        self.position(name).map(|index| self.records.remove(index))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    /// Birthdays to celebrate in the current week, as seen by `clock`.
    pub fn birthdays_due_this_week(&self, clock: &dyn Clock) -> WeeklyBirthdays {
        self.birthdays_in_week_of(clock.today())
    }

    /// Birthdays to celebrate in the week containing `today`.
    ///
    /// The week starts on the Monday on or before `today`. A birthday is due
    /// when its anniversary lands `d` days after that Monday with
    /// `-2 < d <= 5`, i.e. from the Sunday before through Saturday.
    /// Anniversaries on a weekend are celebrated on Monday.
    ///
    /// The Sunday that closes the week is not part of it: that anniversary is
    /// reported under Monday by the following week's query.
    pub fn birthdays_in_week_of(&self, today: NaiveDate) -> WeeklyBirthdays {
        let week_start = today - Days::new(u64::from(today.weekday().num_days_from_monday()));
        let first_day = week_start - Days::new(1);
        let last_day = week_start + Days::new(5);

        let mut weekly = WeeklyBirthdays::default();

        for record in &self.records {
            let Some(birthday) = record.birthday() else {
                continue;
            };

            // The window can straddle New Year; try each year it touches
            let anniversary = (first_day.year()..=last_day.year())
                .map(|year| birthday.in_year(year))
                .find(|date| {
                    let delta = date.signed_duration_since(week_start).num_days();
                    -2 < delta && delta <= 5
                });

            if let Some(date) = anniversary {
                let day = match date.weekday() {
                    Weekday::Sat | Weekday::Sun => Weekday::Mon,
                    other => other,
                };
                weekly.push(day, record.name().as_str());
            }
        }

        weekly
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.records.iter().position(|r| r.name().as_str() == name)
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Contact names grouped by the weekday their birthday is celebrated on.
///
/// Days are kept in the order they were first reached while walking the
/// address book; names within a day follow address book order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeeklyBirthdays {
    days: Vec<(Weekday, Vec<String>)>,
}

impl WeeklyBirthdays {
    fn push(&mut self, day: Weekday, name: &str) {
        match self.days.iter_mut().find(|(d, _)| *d == day) {
            Some((_, names)) => names.push(name.to_string()),
            None => self.days.push((day, vec![name.to_string()])),
        }
    }

    /// Names celebrated on `day`, empty if none.
    pub fn on(&self, day: Weekday) -> &[String] {
        self.days
            .iter()
            .find(|(d, _)| *d == day)
            .map(|(_, names)| names.as_slice())
            .unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Days with their names, in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (Weekday, &[String])> {
        self.days.iter().map(|(day, names)| (*day, names.as_slice()))
    }
}

impl fmt::Display for WeeklyBirthdays {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines: Vec<String> = self
            .iter()
            .map(|(day, names)| format!("{}: {}", weekday_name(day), names.join(", ")))
            .collect();
        write!(f, "{}", lines.join("\n"))
    }
}

/// Full English name of `day`.
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}
