//! acr-core - find and remove empty Artifactory cache storages
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::doc_markdown)]
//!
//! Conan cache repositories in Artifactory accumulate "storages" whose only
//! remaining content is an `index.json` marker. This crate finds them and
//! removes them in two deliberately separate steps.
//!
//! # Workflow
//!
//! ```text
//! list_packages ──► snapshot.json ──► (human review) ──► remove_packages
//! ```
//!
//! - [`discovery::list_packages`] walks every top-level storage with
//!   [`evaluator::is_empty`] and records the empty ones as a [`Snapshot`].
//! - [`removal::remove_packages`] reads a snapshot back, asks for a literal
//!   `YES`, and deletes each recorded storage.
//!
//! The network sits behind [`StorageApi`], user interaction behind
//! [`Confirm`], and all logging behind [`Reporter`], so every step can be
//! driven by fakes.

pub mod client;
pub mod confirm;
pub mod discovery;
pub mod error;
pub mod evaluator;
pub mod listing;
pub mod removal;
pub mod reporter;
pub mod snapshot;

#[cfg(test)]
pub(crate) mod testing;

pub use client::{ApiError, ArtifactoryClient, DeleteStatus, RemoteConfig, StorageApi};
pub use confirm::Confirm;
pub use error::{ListError, RemoveError};
pub use listing::{FolderListing, ListingChild, MARKER_FILE};
pub use reporter::{NullReporter, Reporter, TracingReporter};
pub use snapshot::{Snapshot, SnapshotError};

/// User Agent string sent with every Artifactory request
pub const USER_AGENT: &str = concat!("acr-core/", env!("CARGO_PKG_VERSION"));
