//! Confirmation provider for irreversible actions.

use std::io;

/// Asks the user a question and returns the raw answer.
///
/// Any `Fn(&str) -> io::Result<String>` is a provider, which keeps canned
/// answers in tests to a one-line closure.
pub trait Confirm {
    /// Show `prompt` and block until an answer is available.
    fn ask(&self, prompt: &str) -> io::Result<String>;
}

impl<F> Confirm for F
where
    F: Fn(&str) -> io::Result<String>,
{
    fn ask(&self, prompt: &str) -> io::Result<String> {
        self(prompt)
    }
}
