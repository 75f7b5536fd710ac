//! Errors of the two top-level operations.

use crate::client::ApiError;
use crate::snapshot::SnapshotError;
use thiserror::Error;

/// Why discovery stopped. Discovery is all-or-nothing: no partial snapshot is written.
#[derive(Error, Debug)]
pub enum ListError {
    /// A listing request failed or returned something unusable.
    #[error("Failed to list storages: {0}")]
    Api(#[from] ApiError),

    /// The snapshot could not be written.
    #[error("Failed to write snapshot: {0}")]
    Snapshot(#[from] SnapshotError),
}

/// Why removal could not start. Failures of individual deletes are not errors.
#[derive(Error, Debug)]
pub enum RemoveError {
    /// The snapshot is missing or malformed.
    #[error("Failed to read snapshot: {0}")]
    Snapshot(#[from] SnapshotError),

    /// The confirmation prompt could not be shown or answered.
    #[error("Failed to read confirmation: {0}")]
    Prompt(#[from] std::io::Error),
}
