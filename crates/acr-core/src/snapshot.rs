//! The snapshot file written by `list` and read by `remove`.
//!
//! A snapshot is the repository root listing as Artifactory returned it, with
//! `children` cut down to the empty storages. It is the only input `remove`
//! trusts: delete URLs are built from `uri` and each child's `uri`, never
//! from a fresh listing.
//!
//! Keys are written sorted and indented so two snapshots diff cleanly.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::listing::ListingChild;

/// Failure reading or writing a snapshot file.
#[derive(Error, Debug)]
pub enum SnapshotError {
    /// The file could not be read or written.
    #[error("IO error on {}: {source}", path.display())]
    Io {
        /// Snapshot file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The contents are not a snapshot.
    #[error("Invalid snapshot {}: {source}", path.display())]
    Json {
        /// Snapshot file.
        path: PathBuf,
        /// Parser error.
        #[source]
        source: serde_json::Error,
    },
}

/// Empty storages of one repository, as recorded by discovery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Repository name, e.g. `bintray-conan-cache`.
    pub repo: String,
    /// API URL of the repository root the storages were listed from.
    pub uri: String,
    /// The storages found empty, in listing order.
    pub children: Vec<ListingChild>,
    /// Remaining root listing fields, carried through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Snapshot {
    /// Render as indented JSON with every object's keys in sorted order.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        let value = sort_keys(serde_json::to_value(self)?);
        let mut out = serde_json::to_string_pretty(&value)?;
        out.push('\n');
        Ok(out)
    }

    /// Write the snapshot to `path`, replacing any existing file.
    pub fn save(&self, path: &Path) -> Result<(), SnapshotError> {
        let json = self.to_json_pretty().map_err(|source| SnapshotError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        std::fs::write(path, json).map_err(|source| SnapshotError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Read a snapshot previously written by [`Snapshot::save`].
    pub fn load(path: &Path) -> Result<Self, SnapshotError> {
        let bytes = std::fs::read(path).map_err(|source| SnapshotError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_slice(&bytes).map_err(|source| SnapshotError::Json {
            path: path.to_path_buf(),
            source,
        })
    }
}

// serde_json keeps insertion order when built with `preserve_order`, so the
// ordering is imposed here rather than left to the map type.
fn sort_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<(String, Value)> = map.into_iter().collect();
            entries.sort_by(|a, b| a.0.cmp(&b.0));
            Value::Object(
                entries
                    .into_iter()
                    .map(|(k, v)| (k, sort_keys(v)))
                    .collect(),
            )
        }
        Value::Array(items) => Value::Array(items.into_iter().map(sort_keys).collect()),
        other => other,
    }
}
