//! Emptiness check for a single storage.
//!
//! A storage is empty when its tree holds nothing but the `index.json`
//! marker. The check looks at each listing only up to the first deciding
//! child:
//!
//! - a non-marker file ends the whole check with "not empty";
//! - a folder is descended into, and its answer is the storage's answer.
//!
//! Siblings after the first folder are never listed, so a storage shaped like
//! `[/0.1 (folder, empty), /conanfile.py]` is reported empty.

use crate::client::{ApiError, StorageApi};
use crate::listing::ListingChild;
use crate::reporter::Reporter;

/// What one folder listing says about the storage being checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict<'a> {
    /// Nothing but the marker (or nothing at all).
    Empty,
    /// A file other than the marker was found.
    NotEmpty {
        /// URI of the non-marker file.
        file: &'a str,
    },
    /// The answer is whatever this child folder's answer is.
    Descend {
        /// URI of the child folder to descend into.
        folder: &'a str,
    },
}

/// Decide a single listing, stopping at the first file or folder that settles it.
pub fn inspect(children: &[ListingChild]) -> Verdict<'_> {
    for child in children {
        if child.folder {
            return Verdict::Descend { folder: &child.uri };
        }
        if !child.is_marker() {
            return Verdict::NotEmpty { file: &child.uri };
        }
    }
    Verdict::Empty
}

/// Whether the storage at `{storage_url}{storage_uri}` is empty.
///
/// Each level either settles the answer or hands it to exactly one child
/// folder, so the walk is a loop over a single path and its depth is bounded
/// only by the remote tree.
pub async fn is_empty<A, R>(
    api: &A,
    reporter: &R,
    storage_url: &str,
    storage_uri: &str,
) -> Result<bool, ApiError>
where
    A: StorageApi + ?Sized,
    R: Reporter + ?Sized,
{
    let mut path = storage_uri.to_string();
    loop {
        let listing = api.folder(storage_url, &path).await?;
        match inspect(&listing.children) {
            Verdict::Empty => return Ok(true),
            Verdict::NotEmpty { file } => {
                reporter.debug(&format!("{storage_uri} holds {path}{file}"));
                return Ok(false);
            }
            Verdict::Descend { folder } => path.push_str(folder),
        }
    }
}
