//! Shared fixtures for integration tests.
//!
//! Builds sessions pinned to a known date and runs scripted input through
//! the command loop.

use assistant_bot::{repl, FixedClock, Record, Session};
use chrono::NaiveDate;

/// Monday 2024-06-03, the reference date for weekly birthday tests.
pub fn monday_june_3_2024() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 3).unwrap()
}

/// A session whose clock always reads `today`.
pub fn session_on(today: NaiveDate) -> Session {
    Session::with_clock(Box::new(FixedClock(today)))
}

/// A record with the given birthday and no phones.
#[allow(dead_code)]
pub fn sample_record(name: &str, birthday: &str) -> Record {
    Record::new(name, Some(birthday)).unwrap()
}

/// Feed `script` to the loop and return everything it printed.
#[allow(dead_code)]
pub fn run_script(session: &mut Session, script: &str) -> String {
    let mut out = Vec::new();
    repl::run(session, "", script.as_bytes(), &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

/// The lines printed between the welcome line and the farewell.
#[allow(dead_code)]
pub fn replies(transcript: &str) -> Vec<String> {
    let lines: Vec<&str> = transcript.lines().collect();
    lines[1..lines.len() - 1].iter().map(|l| l.to_string()).collect()
}
