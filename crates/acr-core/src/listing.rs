//! Wire types for the Artifactory "Folder Info" response.
//!
//! Only `children`, `repo` and `uri` are interpreted. Everything else the
//! server sends (`created`, `lastModified`, `path`, ...) is kept verbatim in
//! `extra` so a snapshot can carry it through unchanged.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Relative uri of the only file an empty storage may contain.
pub const MARKER_FILE: &str = "/index.json";

/// One entry of a folder listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingChild {
    /// Path relative to the listed folder, with a leading slash (`/zlib`).
    pub uri: String,
    /// `true` for folders, `false` for files.
    pub folder: bool,
    /// Server fields acr does not interpret.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ListingChild {
    /// A folder entry with no extra fields.
    pub fn folder(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            folder: true,
            extra: Map::new(),
        }
    }

    /// A file entry with no extra fields.
    pub fn file(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            folder: false,
            extra: Map::new(),
        }
    }

    /// Whether this entry is the `index.json` marker file.
    pub fn is_marker(&self) -> bool {
        !self.folder && self.uri == MARKER_FILE
    }
}

/// The listing of one path inside a repository.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FolderListing {
    /// Repository the listed folder belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repo: Option<String>,
    /// Absolute API URL of the listed folder.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
    /// Direct children, in server order.
    pub children: Vec<ListingChild>,
    /// Server fields acr does not interpret.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl FolderListing {
    /// A bare listing holding only `children`.
    pub fn new(children: Vec<ListingChild>) -> Self {
        Self {
            repo: None,
            uri: None,
            children,
            extra: Map::new(),
        }
    }
}
