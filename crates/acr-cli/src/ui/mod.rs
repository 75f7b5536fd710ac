//! Terminal interaction.

pub mod prompt;

pub use prompt::StdinConfirm;
