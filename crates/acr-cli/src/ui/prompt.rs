//! Interactive confirmation on the controlling terminal.

use acr_core::Confirm;
use crossterm::style::Stylize;
use std::io::{self, BufRead, Write};

/// Asks on stdout and reads one line from stdin.
///
/// A closed stdin yields an empty answer, which never confirms anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdinConfirm;

impl Confirm for StdinConfirm {
    fn ask(&self, prompt: &str) -> io::Result<String> {
        let mut stdout = io::stdout().lock();
        writeln!(stdout)?;

        let mut lines = prompt.lines().peekable();
        if let Some(banner) = lines.next() {
            writeln!(stdout, "  {}", banner.bold().red())?;
        }
        while let Some(line) = lines.next() {
            if lines.peek().is_some() {
                writeln!(stdout, "  {line}")?;
            } else {
                // Last line is the question; the answer goes on the same line.
                write!(stdout, "  {line}")?;
            }
        }
        stdout.flush()?;

        let mut input = String::new();
        io::stdin().lock().read_line(&mut input)?;
        Ok(input)
    }
}
