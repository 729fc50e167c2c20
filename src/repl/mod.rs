//! Interactive command loop.
//!
//! Reads one line at a time, hands it to the [`Session`], and prints the
//! reply. The loop is generic over its reader and writer so tests can drive
//! it with in-memory buffers.

pub mod parser;

pub use parser::{parse_input, Command, ParsedInput};

use crate::session::{Outcome, Session, FAREWELL};
use std::io::{self, BufRead, Write};
use tracing::{debug, info};

pub const WELCOME: &str = "Welcome to the assistant bot!";

/// Run the loop until an exit command or end of input.
///
/// Writes `prompt` before every read. End of input behaves like `exit`.
pub fn run<R, W>(session: &mut Session, prompt: &str, mut input: R, mut output: W) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    info!("Session started");
    writeln!(output, "{}", WELCOME)?;

    let mut line = String::new();
    loop {
        write!(output, "{}", prompt)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            debug!("End of input");
            writeln!(output)?;
            writeln!(output, "{}", FAREWELL)?;
            break;
        }

        let Some(parsed) = parse_input(&line) else {
            continue;
        };

        match session.execute(&parsed) {
            Outcome::Reply(text) => writeln!(output, "{}", text)?,
            Outcome::Exit(text) => {
                writeln!(output, "{}", text)?;
                break;
            }
        }
    }

    output.flush()?;
    info!(contacts = session.book().len(), "Session finished");
    Ok(())
}
